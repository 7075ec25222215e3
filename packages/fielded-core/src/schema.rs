//! Schema definition and introspection.
//!
//! A schema is an ordered, immutable set of attribute definitions. Each
//! attribute is assigned a storage slot (its declaration index) once, when
//! the schema is defined; value objects store their values by slot.

use std::collections::HashMap;
use std::sync::Arc;

use crate::attribute::{AttributeDefinition, AttributeOptions};
use crate::config::SchemaConfig;
use crate::error::SchemaError;
use crate::types::{RegistryError, TypeRegistry};

/// Ordered, immutable record shape.
#[derive(Debug)]
pub struct Schema {
    name: String,
    attributes: Vec<AttributeDefinition>,
    slots: HashMap<String, usize>,
}

impl Schema {
    /// Starts a schema resolved against the process-wide type registry.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute names in declaration order.
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name()).collect()
    }

    /// Attribute definitions in declaration order.
    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.slot(name).map(|slot| &self.attributes[slot])
    }

    /// Storage slot (declaration index) of an attribute.
    pub fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Builder for [`Schema`]; each `define_attribute` call resolves its type
/// immediately, so definition errors surface at the offending attribute.
///
/// ```
/// use fielded_core::attribute::AttributeOptions;
/// use fielded_core::schema::Schema;
///
/// let schema = Schema::builder("Point")
///     .define_attribute("x", "integer", AttributeOptions::new().coercible())
///     .unwrap()
///     .define_attribute("y", "integer", AttributeOptions::new().coercible())
///     .unwrap()
///     .build();
/// assert_eq!(schema.attribute_names(), vec!["x", "y"]);
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    registry: Arc<TypeRegistry>,
    config: SchemaConfig,
    attributes: Vec<AttributeDefinition>,
    slots: HashMap<String, usize>,
}

impl SchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registry: TypeRegistry::global(),
            config: SchemaConfig::default(),
            attributes: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Resolves types against `registry` instead of the global one.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<TypeRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Option defaults for attributes defined after this call.
    #[must_use]
    pub fn with_config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends an attribute.
    ///
    /// # Arguments
    /// * `name` - Attribute name, unique within the schema
    /// * `tag` - Registered type tag
    /// * `options` - Constraint options
    pub fn define_attribute(
        mut self,
        name: impl Into<String>,
        tag: &str,
        options: AttributeOptions,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SchemaError::EmptyName {
                schema: self.name.clone(),
            });
        }
        if self.slots.contains_key(&name) {
            return Err(SchemaError::DuplicateAttribute {
                schema: self.name.clone(),
                attribute: name,
            });
        }

        let ty = self.registry.resolve(tag).map_err(|e| match e {
            RegistryError::UnknownType { tag } => SchemaError::UnknownType {
                attribute: name.clone(),
                tag,
            },
            other => SchemaError::from(other),
        })?;

        let definition = AttributeDefinition::new(name.clone(), ty, options, &self.config)?;
        self.slots.insert(name, self.attributes.len());
        self.attributes.push(definition);
        Ok(self)
    }

    /// Freezes the schema.
    pub fn build(self) -> Arc<Schema> {
        tracing::debug!(
            schema = %self.name,
            attributes = self.attributes.len(),
            "compiled schema"
        );
        Arc::new(Schema {
            name: self.name,
            attributes: self.attributes,
            slots: self.slots,
        })
    }
}
