//! Attribute definition within a schema.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::options::{AttributeOptions, DefaultValue};
use crate::config::SchemaConfig;
use crate::error::SchemaError;
use crate::types::{AttributeType, CoercionOptions, RoundMode};
use crate::value::Value;

/// One named, typed field of a schema with its constraints.
///
/// # Invariants
///
/// - `strict` implies `coercible == false`
/// - `format` is only set on string-like types
/// - `scale` is only set on types that support it
#[derive(Debug, Clone)]
pub struct AttributeDefinition {
    name: String,
    ty: Arc<dyn AttributeType>,
    required: bool,
    coercible: bool,
    strict: bool,
    format: Option<Regex>,
    enumeration: Option<Vec<Value>>,
    default: Option<DefaultValue>,
    scale: Option<u32>,
    round_mode: Option<RoundMode>,
    default_round_mode: RoundMode,
}

impl AttributeDefinition {
    /// Creates a definition, checking the options against the type.
    ///
    /// # Arguments
    /// * `name` - Attribute name
    /// * `ty` - Resolved type strategy
    /// * `options` - Constraint options
    /// * `config` - Schema defaults for unset options
    pub fn new(
        name: impl Into<String>,
        ty: Arc<dyn AttributeType>,
        options: AttributeOptions,
        config: &SchemaConfig,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let unsupported = |option: &'static str| SchemaError::UnsupportedOption {
            attribute: name.clone(),
            option,
            tag: ty.tag().to_string(),
        };

        if options.format.is_some() && !ty.is_string_like() {
            return Err(unsupported("format"));
        }
        if options.scale.is_some() && !ty.supports_scale() {
            return Err(unsupported("scale"));
        }
        if options.round_mode.is_some() && !ty.supports_scale() {
            return Err(unsupported("round_mode"));
        }

        let format = match options.format {
            Some(pattern) => Some(Regex::new(&pattern).map_err(|source| {
                SchemaError::InvalidFormat {
                    attribute: name.clone(),
                    pattern: pattern.clone(),
                    source,
                }
            })?),
            None => None,
        };

        let strict = options.strict;
        let coercible = !strict && options.coercible.unwrap_or(config.default_coercible);

        // Members are held in the base representation so admitted values
        // compare against them directly.
        let member_options = CoercionOptions {
            coercible: true,
            scale: options.scale,
            round_mode: options.round_mode.unwrap_or(config.default_round_mode),
        };
        let enumeration = match options.enumeration {
            Some(values) => Some(
                values
                    .iter()
                    .map(|value| {
                        ty.coerce(value, &member_options)
                            .ok_or_else(|| SchemaError::InvalidEnumValue {
                                attribute: name.clone(),
                                value: value.literal().to_string(),
                                tag: ty.tag().to_string(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };

        Ok(Self {
            required: options.required.unwrap_or(config.default_required),
            coercible,
            strict,
            format,
            enumeration,
            default: options.default,
            scale: options.scale,
            round_mode: options.round_mode,
            default_round_mode: config.default_round_mode,
            name,
            ty,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Arc<dyn AttributeType> {
        &self.ty
    }

    pub fn type_tag(&self) -> &str {
        self.ty.tag()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_coercible(&self) -> bool {
        self.coercible
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    pub fn format(&self) -> Option<&Regex> {
        self.format.as_ref()
    }

    pub fn enumeration(&self) -> Option<&[Value]> {
        self.enumeration.as_deref()
    }

    pub fn scale(&self) -> Option<u32> {
        self.scale
    }

    /// Effective round mode: explicit option, else the schema default.
    pub fn round_mode(&self) -> RoundMode {
        self.round_mode.unwrap_or(self.default_round_mode)
    }

    /// Options handed to the type when coercing this attribute's input.
    pub fn coercion_options(&self) -> CoercionOptions {
        CoercionOptions {
            coercible: self.coercible,
            scale: self.scale,
            round_mode: self.round_mode(),
        }
    }
}

/// Canonical descriptor: `name=<name> type="<tag>" options={...}`.
///
/// `required` and `coercible` are always listed; `strict`, `format`, `enum`,
/// `scale` and `round_mode` only when set.
impl fmt::Display for AttributeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={} type={:?} options={{required={}, coercible={}",
            self.name,
            self.ty.tag(),
            self.required,
            self.coercible
        )?;
        if self.strict {
            f.write_str(", strict=true")?;
        }
        if let Some(format) = &self.format {
            write!(f, ", format=/{}/", format.as_str())?;
        }
        if let Some(values) = &self.enumeration {
            f.write_str(", enum=[")?;
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", value.literal())?;
            }
            f.write_str("]")?;
        }
        if let Some(scale) = self.scale {
            write!(f, ", scale={}, round_mode={}", scale, self.round_mode())?;
        }
        f.write_str("}")
    }
}
