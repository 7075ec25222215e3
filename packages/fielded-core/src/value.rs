//! Runtime value model shared by raw input and canonical attribute values.

use std::fmt;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use bigdecimal::BigDecimal;
use thiserror::Error;

/// A loosely-typed input value or a canonical attribute value.
///
/// Raw input arrives in whatever representation the caller has at hand;
/// after the attribute pipeline every stored value is in the base
/// representation of its attribute's type (or `Nil`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit "no value"
    Nil,
    /// Two-valued boolean
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Arbitrary-precision decimal
    Decimal(BigDecimal),
    /// UTF-8 text
    String(String),
    /// Interned name (`:on`, `:true`, ...)
    Symbol(String),
    /// Calendar date
    Date(NaiveDate),
    /// UTC timestamp
    Time(DateTime<Utc>),
}

/// The representation a [`Value`] is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Boolean,
    Integer,
    Float,
    Decimal,
    String,
    Symbol,
    Date,
    Time,
}

impl ValueKind {
    /// Returns `true` for the numeric representations.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Integer | ValueKind::Float | ValueKind::Decimal)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Nil => "nil",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Decimal => "decimal",
            ValueKind::String => "string",
            ValueKind::Symbol => "symbol",
            ValueKind::Date => "date",
            ValueKind::Time => "time",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the representation of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::String(_) => ValueKind::String,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Date(_) => ValueKind::Date,
            Value::Time(_) => ValueKind::Time,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the text of a string or symbol value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<&BigDecimal> {
        match self {
            Value::Decimal(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Wraps this value so that `Display` yields its literal form.
    pub fn literal(&self) -> Literal<'_> {
        Literal(self)
    }
}

/// Literal rendering of a [`Value`]: strings quoted, `nil` for no value.
pub struct Literal<'a>(&'a Value);

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Nil => f.write_str("nil"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            // Debug keeps the fractional part: 0.0 rather than 0
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Decimal(d) => f.write_str(&d.to_plain_string()),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Symbol(s) => write!(f, ":{}", s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Time(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<BigDecimal> for Value {
    fn from(value: BigDecimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Time(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

/// Error converting structured JSON into a scalar [`Value`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueConversionError {
    #[error("unsupported JSON {0}: only null, booleans, numbers and strings are accepted")]
    Unsupported(&'static str),

    #[error("JSON number {0} is not representable")]
    Number(String),
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueConversionError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Value::Nil),
            serde_json::Value::Bool(b) => Ok(Value::Boolean(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else {
                    n.as_f64()
                        .map(Value::Float)
                        .ok_or_else(|| ValueConversionError::Number(n.to_string()))
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(_) => Err(ValueConversionError::Unsupported("array")),
            serde_json::Value::Object(_) => Err(ValueConversionError::Unsupported("object")),
        }
    }
}
