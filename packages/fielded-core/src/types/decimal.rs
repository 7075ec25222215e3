use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};

use super::numeric::{decimal_from_f64, numeric_text, parse_decimal};
use super::{AttributeType, CoercionOptions};
use crate::value::{Value, ValueKind};

/// Rounding applied to a scaled decimal attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundMode {
    /// Away from zero
    Up,
    /// Toward zero (truncate)
    Down,
    /// Nearest, ties away from zero
    #[default]
    HalfUp,
    /// Nearest, ties toward zero
    HalfDown,
    /// Nearest, ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
}

impl RoundMode {
    pub const ALL: [RoundMode; 7] = [
        RoundMode::Up,
        RoundMode::Down,
        RoundMode::HalfUp,
        RoundMode::HalfDown,
        RoundMode::HalfEven,
        RoundMode::Ceiling,
        RoundMode::Floor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundMode::Up => "up",
            RoundMode::Down => "down",
            RoundMode::HalfUp => "half_up",
            RoundMode::HalfDown => "half_down",
            RoundMode::HalfEven => "half_even",
            RoundMode::Ceiling => "ceiling",
            RoundMode::Floor => "floor",
        }
    }

    fn strategy(&self) -> RoundingMode {
        match self {
            RoundMode::Up => RoundingMode::Up,
            RoundMode::Down => RoundingMode::Down,
            RoundMode::HalfUp => RoundingMode::HalfUp,
            RoundMode::HalfDown => RoundingMode::HalfDown,
            RoundMode::HalfEven => RoundingMode::HalfEven,
            RoundMode::Ceiling => RoundingMode::Ceiling,
            RoundMode::Floor => RoundingMode::Floor,
        }
    }

    /// Rounds `value` to `scale` fractional digits.
    pub fn round(&self, value: &BigDecimal, scale: u32) -> BigDecimal {
        value.with_scale_round(i64::from(scale), self.strategy())
    }
}

impl fmt::Display for RoundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoundMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown round mode '{}'", s))
    }
}

/// Arbitrary-precision decimal with optional scale and rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalType;

impl DecimalType {
    fn apply_scale(value: BigDecimal, options: &CoercionOptions) -> BigDecimal {
        match options.scale {
            Some(scale) => options.round_mode.round(&value, scale),
            None => value,
        }
    }
}

impl AttributeType for DecimalType {
    fn tag(&self) -> &str {
        "decimal"
    }

    fn base_kind(&self) -> ValueKind {
        ValueKind::Decimal
    }

    fn coercible_from(&self) -> &[ValueKind] {
        &[ValueKind::Float, ValueKind::Integer, ValueKind::String]
    }

    fn supports_scale(&self) -> bool {
        true
    }

    fn admits(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => numeric_text(s).is_some(),
            Value::Float(f) => f.is_finite(),
            _ => true,
        }
    }

    fn convert(&self, value: &Value, options: &CoercionOptions) -> Option<Value> {
        let parsed = match value {
            Value::Float(f) => decimal_from_f64(*f)?,
            Value::Integer(i) => BigDecimal::from(*i),
            Value::String(s) => parse_decimal(s)?,
            _ => return None,
        };
        Some(Value::Decimal(Self::apply_scale(parsed, options)))
    }

    fn normalize(&self, value: Value, options: &CoercionOptions) -> Value {
        match value {
            Value::Decimal(d) => Value::Decimal(Self::apply_scale(d, options)),
            other => other,
        }
    }
}
