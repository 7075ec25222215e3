use bigdecimal::{RoundingMode, ToPrimitive};

use super::numeric::{has_leading_digit, leading_integer};
use super::{AttributeType, CoercionOptions};
use crate::value::{Value, ValueKind};

/// 64-bit signed integer. Fractional input is truncated toward zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerType;

impl AttributeType for IntegerType {
    fn tag(&self) -> &str {
        "integer"
    }

    fn base_kind(&self) -> ValueKind {
        ValueKind::Integer
    }

    fn coercible_from(&self) -> &[ValueKind] {
        &[ValueKind::Float, ValueKind::Decimal, ValueKind::String]
    }

    fn admits(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => has_leading_digit(s),
            Value::Float(f) => f.is_finite(),
            _ => true,
        }
    }

    fn convert(&self, value: &Value, _options: &CoercionOptions) -> Option<Value> {
        let int = match value {
            Value::Float(f) => {
                let t = f.trunc();
                if t < i64::MIN as f64 || t >= i64::MAX as f64 {
                    return None;
                }
                t as i64
            }
            Value::Decimal(d) => d.with_scale_round(0, RoundingMode::Down).to_i64()?,
            Value::String(s) => leading_integer(s)?,
            _ => return None,
        };
        Some(Value::Integer(int))
    }
}
