//! Per-attribute validation and coercion pipeline.
//!
//! Steps run in a fixed order: presence (with default substitution),
//! required, type admission, format, enumeration.

use super::definition::AttributeDefinition;
use crate::error::{Absence, BuildError};
use crate::types::CoercionOptions;
use crate::value::Value;

impl AttributeDefinition {
    /// Whether `value` counts as absent for this attribute.
    pub fn is_absent(&self, value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Nil) => true,
            Some(Value::String(s)) => s.is_empty() && self.ty().is_string_like(),
            Some(_) => false,
        }
    }

    /// Runs the pipeline over one raw input. `None` is true absence.
    ///
    /// # Returns
    /// The canonical value (`Value::Nil` for an absent optional attribute),
    /// or the first constraint violated.
    pub fn resolve(&self, raw: Option<Value>) -> Result<Value, BuildError> {
        let (value, defaulted) = match self.substitute_default(raw) {
            Some(found) => found,
            None => return self.unresolved(Absence::Missing),
        };

        let resolved = if self.is_strict() && !defaulted {
            if !self.ty().is_base(&value) {
                return Err(BuildError::WrongType {
                    attribute: self.name().to_string(),
                    tag: self.type_tag().to_string(),
                });
            }
            value
        } else {
            // Defaults come from the schema author, so they may always coerce.
            let options = CoercionOptions {
                coercible: self.is_coercible() || defaulted,
                ..self.coercion_options()
            };
            match self.ty().coerce(&value, &options) {
                Some(coerced) => coerced,
                None => {
                    tracing::trace!(
                        attribute = self.name(),
                        kind = %value.kind(),
                        "value not coercible"
                    );
                    return self.unresolved(Absence::Uncoercible);
                }
            }
        };

        self.check_format(&resolved)?;
        self.check_enumeration(&resolved)?;

        tracing::trace!(attribute = self.name(), value = %resolved.literal(), "resolved");
        Ok(resolved)
    }

    /// Presence step: returns the value to admit and whether it was defaulted,
    /// or `None` when the attribute stays absent.
    fn substitute_default(&self, raw: Option<Value>) -> Option<(Value, bool)> {
        if !self.is_absent(raw.as_ref()) {
            return raw.map(|value| (value, false));
        }
        let produced = self.default()?.produce();
        if self.is_absent(Some(&produced)) {
            return None;
        }
        Some((produced, true))
    }

    /// Required step for a value that is absent or failed coercion.
    fn unresolved(&self, cause: Absence) -> Result<Value, BuildError> {
        if self.is_required() {
            return Err(BuildError::Required {
                attribute: self.name().to_string(),
                cause,
            });
        }
        Ok(Value::Nil)
    }

    fn check_format(&self, value: &Value) -> Result<(), BuildError> {
        let Some(format) = self.format() else {
            return Ok(());
        };
        match value.as_str() {
            Some(text) if format.is_match(text) => Ok(()),
            _ => Err(BuildError::Format {
                attribute: self.name().to_string(),
            }),
        }
    }

    fn check_enumeration(&self, value: &Value) -> Result<(), BuildError> {
        match self.enumeration() {
            Some(allowed) if !allowed.contains(value) => Err(BuildError::NotIncluded {
                attribute: self.name().to_string(),
            }),
            _ => Ok(()),
        }
    }
}
