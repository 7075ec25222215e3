//! Calendar date and UTC timestamp types.
//!
//! Both accept ISO-8601-like text and numeric epoch seconds when coercible.
//! Offsets in text are honoured and converted to UTC; text without an offset
//! is taken to be UTC already.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::{AttributeType, CoercionOptions};
use crate::value::{Value, ValueKind};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(text) {
        return Some(t.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    parse_date(text).and_then(midnight)
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn from_epoch(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Integer(secs) => DateTime::from_timestamp(*secs, 0),
        Value::Float(f) if f.is_finite() => {
            let secs = f.floor();
            if secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
                return None;
            }
            let nanos = (((f - secs) * 1e9).round() as u32).min(999_999_999);
            DateTime::from_timestamp(secs as i64, nanos)
        }
        _ => None,
    }
}

/// Calendar date without time of day.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateType;

impl AttributeType for DateType {
    fn tag(&self) -> &str {
        "date"
    }

    fn base_kind(&self) -> ValueKind {
        ValueKind::Date
    }

    fn coercible_from(&self) -> &[ValueKind] {
        &[
            ValueKind::String,
            ValueKind::Time,
            ValueKind::Integer,
            ValueKind::Float,
        ]
    }

    fn admits(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => parse_date(s).is_some() || parse_timestamp(s).is_some(),
            Value::Integer(_) | Value::Float(_) => from_epoch(value).is_some(),
            _ => true,
        }
    }

    fn convert(&self, value: &Value, _options: &CoercionOptions) -> Option<Value> {
        let date = match value {
            Value::String(s) => {
                parse_date(s).or_else(|| parse_timestamp(s).map(|t| t.date_naive()))?
            }
            Value::Time(t) => t.date_naive(),
            Value::Integer(_) | Value::Float(_) => from_epoch(value)?.date_naive(),
            _ => return None,
        };
        Some(Value::Date(date))
    }
}

/// Point in time, stored in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeType;

impl AttributeType for TimeType {
    fn tag(&self) -> &str {
        "time"
    }

    fn base_kind(&self) -> ValueKind {
        ValueKind::Time
    }

    fn coercible_from(&self) -> &[ValueKind] {
        &[
            ValueKind::String,
            ValueKind::Date,
            ValueKind::Integer,
            ValueKind::Float,
        ]
    }

    fn admits(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => parse_timestamp(s).is_some(),
            Value::Integer(_) | Value::Float(_) => from_epoch(value).is_some(),
            _ => true,
        }
    }

    fn convert(&self, value: &Value, _options: &CoercionOptions) -> Option<Value> {
        let time = match value {
            Value::String(s) => parse_timestamp(s)?,
            Value::Date(d) => midnight(*d)?,
            Value::Integer(_) | Value::Float(_) => from_epoch(value)?,
            _ => return None,
        };
        Some(Value::Time(time))
    }
}
