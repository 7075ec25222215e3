use bigdecimal::ToPrimitive;

use super::numeric::{numeric_text, parse_float};
use super::{AttributeType, CoercionOptions};
use crate::value::{Value, ValueKind};

/// 64-bit floating point. Numeric text may carry currency decoration.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatType;

impl AttributeType for FloatType {
    fn tag(&self) -> &str {
        "float"
    }

    fn base_kind(&self) -> ValueKind {
        ValueKind::Float
    }

    fn coercible_from(&self) -> &[ValueKind] {
        &[ValueKind::Integer, ValueKind::Decimal, ValueKind::String]
    }

    fn admits(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => numeric_text(s).is_some(),
            _ => true,
        }
    }

    fn convert(&self, value: &Value, _options: &CoercionOptions) -> Option<Value> {
        let float = match value {
            Value::Integer(i) => *i as f64,
            Value::Decimal(d) => d.to_f64()?,
            Value::String(s) => parse_float(s)?,
            _ => return None,
        };
        Some(Value::Float(float))
    }
}
