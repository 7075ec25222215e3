use super::{AttributeType, CoercionOptions};
use crate::value::{Value, ValueKind};

const TRUTHY: [&str; 5] = ["true", "t", "on", "1", "yes"];
const FALSY: [&str; 5] = ["false", "f", "off", "0", "no"];

/// Two-valued boolean, coercible from `true/false/t/f/on/off/1/0/yes/no`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanType;

fn parse_flag(text: &str) -> Option<bool> {
    let text = text.trim().to_ascii_lowercase();
    if TRUTHY.contains(&text.as_str()) {
        Some(true)
    } else if FALSY.contains(&text.as_str()) {
        Some(false)
    } else {
        None
    }
}

impl AttributeType for BooleanType {
    fn tag(&self) -> &str {
        "boolean"
    }

    fn base_kind(&self) -> ValueKind {
        ValueKind::Boolean
    }

    fn coercible_from(&self) -> &[ValueKind] {
        &[ValueKind::String, ValueKind::Symbol]
    }

    fn admits(&self, value: &Value) -> bool {
        value.as_text().and_then(parse_flag).is_some()
    }

    fn convert(&self, value: &Value, _options: &CoercionOptions) -> Option<Value> {
        value.as_text().and_then(parse_flag).map(Value::Boolean)
    }
}
