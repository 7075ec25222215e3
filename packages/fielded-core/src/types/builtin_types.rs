use std::sync::Arc;

use super::error::RegistryError;
use super::type_registry::TypeRegistry;
use super::{
    AttributeType, BooleanType, DateType, DecimalType, FloatType, IntegerType, StringType,
    TimeType,
};

/// Returns one instance of every built-in type.
pub fn builtin_types() -> Vec<Arc<dyn AttributeType>> {
    vec![
        Arc::new(StringType),
        Arc::new(IntegerType),
        Arc::new(FloatType),
        Arc::new(DecimalType),
        Arc::new(BooleanType),
        Arc::new(DateType),
        Arc::new(TimeType),
    ]
}

/// Registers all built-in types in the registry.
///
/// # Arguments
/// * `registry` - Type registry to populate
///
/// # Returns
/// `Ok(())` if all types registered successfully, or the first duplicate tag.
pub fn register_builtin_types(registry: &mut TypeRegistry) -> Result<(), RegistryError> {
    for ty in builtin_types() {
        registry.register(ty)?;
    }
    Ok(())
}
