use super::{AttributeType, CoercionOptions};
use crate::value::{Value, ValueKind};

/// UTF-8 text. Other scalars coerce by stringifying.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringType;

impl AttributeType for StringType {
    fn tag(&self) -> &str {
        "string"
    }

    fn base_kind(&self) -> ValueKind {
        ValueKind::String
    }

    fn coercible_from(&self) -> &[ValueKind] {
        &[
            ValueKind::Symbol,
            ValueKind::Integer,
            ValueKind::Float,
            ValueKind::Decimal,
            ValueKind::Boolean,
            ValueKind::Date,
            ValueKind::Time,
        ]
    }

    fn is_string_like(&self) -> bool {
        true
    }

    fn convert(&self, value: &Value, _options: &CoercionOptions) -> Option<Value> {
        let text = match value {
            Value::Nil | Value::String(_) => return None,
            Value::Symbol(s) => s.clone(),
            other => other.literal().to_string(),
        };
        Some(Value::String(text))
    }
}
