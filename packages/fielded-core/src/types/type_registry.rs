use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::builtin_types::builtin_types;
use super::error::RegistryError;
use super::AttributeType;

static GLOBAL: OnceLock<Arc<TypeRegistry>> = OnceLock::new();

/// Registry of attribute types.
///
/// Stores registered types with lookup by tag. Populated up front, then
/// shared read-only (typically behind an `Arc`) so lookups need no locking.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, Arc<dyn AttributeType>>,
}

impl TypeRegistry {
    /// Creates a new empty type registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Creates a registry holding every built-in type.
    pub fn with_builtins() -> Self {
        let types = builtin_types()
            .into_iter()
            .map(|ty| (ty.tag().to_string(), ty))
            .collect();
        Self { types }
    }

    /// Process-wide registry of the built-in types, initialised on first use.
    pub fn global() -> Arc<TypeRegistry> {
        GLOBAL
            .get_or_init(|| Arc::new(TypeRegistry::with_builtins()))
            .clone()
    }

    /// Registers a type under its tag.
    ///
    /// # Returns
    /// `Ok(())` if successful, `Err(RegistryError::DuplicateType)` if the tag is taken.
    pub fn register(&mut self, ty: Arc<dyn AttributeType>) -> Result<(), RegistryError> {
        let tag = ty.tag().to_string();
        if self.types.contains_key(&tag) {
            return Err(RegistryError::DuplicateType { tag });
        }

        tracing::debug!(tag = %tag, base = %ty.base_kind(), "registered attribute type");
        self.types.insert(tag, ty);
        Ok(())
    }

    /// Looks a type up by tag.
    pub fn resolve(&self, tag: &str) -> Result<Arc<dyn AttributeType>, RegistryError> {
        self.types
            .get(tag)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownType {
                tag: tag.to_string(),
            })
    }

    /// Checks if a type is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.types.contains_key(tag)
    }

    /// Returns all registered tags, sorted.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.types.keys().cloned().collect();
        tags.sort();
        tags
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
