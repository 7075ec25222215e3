//! Value object construction.
//!
//! Positional values bind to attributes in declaration order; named values
//! then fill or override slots by name. Every attribute runs its pipeline in
//! schema order and the first failure aborts the build.

use std::sync::Arc;

use crate::error::BuildError;
use crate::schema::Schema;
use crate::value::Value;
use crate::value_object::ValueObject;

/// Binds raw arguments to the schema's slots. Unbound slots are `None`.
fn bind<P, N, K>(schema: &Schema, positional: P, named: N) -> Result<Vec<Option<Value>>, BuildError>
where
    P: IntoIterator<Item = Value>,
    N: IntoIterator<Item = (K, Value)>,
    K: AsRef<str>,
{
    let positional: Vec<Value> = positional.into_iter().collect();
    if positional.len() > schema.len() {
        return Err(BuildError::Arity {
            given: positional.len(),
            expected: schema.len(),
        });
    }

    let mut slots: Vec<Option<Value>> = vec![None; schema.len()];
    for (slot, value) in positional.into_iter().enumerate() {
        slots[slot] = Some(value);
    }

    for (key, value) in named {
        let key = key.as_ref();
        match schema.slot(key) {
            Some(slot) => slots[slot] = Some(value),
            None => tracing::debug!(schema = schema.name(), key, "ignoring unknown attribute"),
        }
    }

    Ok(slots)
}

impl Schema {
    /// Builds a value object from positional and named raw values.
    ///
    /// # Returns
    /// The value object, or the first attribute's `BuildError`.
    pub fn build<P, N, K>(self: &Arc<Self>, positional: P, named: N) -> Result<ValueObject, BuildError>
    where
        P: IntoIterator<Item = Value>,
        N: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let slots = bind(self, positional, named)?;

        let mut values = Vec::with_capacity(slots.len());
        for (attribute, raw) in self.attributes().iter().zip(slots) {
            match attribute.resolve(raw) {
                Ok(value) => values.push(value),
                Err(e) => {
                    tracing::debug!(schema = self.name(), error = %e, "build rejected");
                    return Err(e);
                }
            }
        }

        Ok(ValueObject::new(Arc::clone(self), values))
    }

    /// Builds from named values only.
    pub fn build_named<N, K>(self: &Arc<Self>, named: N) -> Result<ValueObject, BuildError>
    where
        N: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        self.build(std::iter::empty::<Value>(), named)
    }

    /// Builds from positional values only.
    pub fn build_positional<P>(self: &Arc<Self>, positional: P) -> Result<ValueObject, BuildError>
    where
        P: IntoIterator<Item = Value>,
    {
        self.build(positional, std::iter::empty::<(&str, Value)>())
    }
}
