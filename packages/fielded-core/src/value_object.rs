//! Immutable, fully validated record instances.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::error::BuildError;
use crate::schema::Schema;
use crate::value::Value;

/// Error type for attribute access on a value object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Value objects expose no setters
    #[error("no such mutator `{attribute}=` on {schema}")]
    NoSuchMutator { schema: String, attribute: String },

    #[error("no such attribute :{attribute} on {schema}")]
    NoSuchAttribute { schema: String, attribute: String },

    /// Replacement value failed validation
    #[error(transparent)]
    Rejected(#[from] BuildError),
}

/// One coerced value per schema attribute, in schema order.
///
/// There is no way to change a stored value. Equality is schema identity
/// plus the ordered values.
#[derive(Debug, Clone)]
pub struct ValueObject {
    schema: Arc<Schema>,
    values: Box<[Value]>,
}

impl ValueObject {
    pub(crate) fn new(schema: Arc<Schema>, values: Vec<Value>) -> Self {
        debug_assert_eq!(schema.len(), values.len());
        Self {
            schema,
            values: values.into_boxed_slice(),
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Reads an attribute by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema.slot(name).map(|slot| &self.values[slot])
    }

    /// Values in schema order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.schema
            .attributes()
            .iter()
            .map(|a| a.name())
            .zip(self.values.iter())
    }

    pub fn to_map(&self) -> BTreeMap<String, Value> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    /// Rebinding an attribute always fails.
    pub fn assign(&self, name: &str, _value: impl Into<Value>) -> Result<(), AccessError> {
        let schema = self.schema.name().to_string();
        let attribute = name.to_string();
        if self.schema.slot(name).is_some() {
            Err(AccessError::NoSuchMutator { schema, attribute })
        } else {
            Err(AccessError::NoSuchAttribute { schema, attribute })
        }
    }

    /// Returns a new value object with one attribute replaced, validated
    /// through the full pipeline. `self` is left untouched.
    pub fn with_value(&self, name: &str, value: impl Into<Value>) -> Result<Self, AccessError> {
        let slot = self
            .schema
            .slot(name)
            .ok_or_else(|| AccessError::NoSuchAttribute {
                schema: self.schema.name().to_string(),
                attribute: name.to_string(),
            })?;
        let mut values = self.values.to_vec();
        values[slot] = value.into();
        Ok(self.schema.build_positional(values)?)
    }

    /// `name1=<literal> name2=<literal> ...`
    pub fn to_canonical_string(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}={}", name, value.literal()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PartialEq for ValueObject {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.schema, &other.schema) && self.values == other.values
    }
}

impl fmt::Display for ValueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            return write!(f, "#<{}>", self.schema.name());
        }
        write!(f, "#<{} {}>", self.schema.name(), self.to_canonical_string())
    }
}
