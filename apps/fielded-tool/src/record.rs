//! Raw JSON records.

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use fielded_core::schema::Schema;
use fielded_core::{BuildError, Value, ValueObject};

/// Input converted to build arguments: objects bind by name, arrays by
/// position.
#[derive(Debug)]
pub enum RawRecord {
    Named(Vec<(String, Value)>),
    Positional(Vec<Value>),
}

impl RawRecord {
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Object(map) => {
                let named = map
                    .into_iter()
                    .map(|(key, value)| -> Result<(String, Value)> {
                        let value = Value::try_from(value)
                            .with_context(|| format!("field '{}'", key))?;
                        Ok((key, value))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(RawRecord::Named(named))
            }
            serde_json::Value::Array(items) => {
                let positional = items
                    .into_iter()
                    .enumerate()
                    .map(|(i, value)| {
                        Value::try_from(value).with_context(|| format!("position {}", i))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(RawRecord::Positional(positional))
            }
            other => bail!("record must be a JSON object or array, got {}", other),
        }
    }

    pub fn build(self, schema: &Arc<Schema>) -> Result<ValueObject, BuildError> {
        match self {
            RawRecord::Named(named) => schema.build_named(named),
            RawRecord::Positional(positional) => schema.build_positional(positional),
        }
    }
}
