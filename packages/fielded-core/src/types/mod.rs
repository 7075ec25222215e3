//! Type strategies, the built-in scalar types, and the type registry.
//!
//! Every attribute is backed by one [`AttributeType`], resolved by tag from a
//! [`TypeRegistry`] when its schema is defined. A type names its base
//! representation, the representations it accepts for coercion, and how to
//! convert an admissible value into the base representation.

use std::fmt;

use crate::value::{Value, ValueKind};

mod boolean;
mod builtin_types;
mod decimal;
mod error;
mod float;
mod integer;
mod numeric;
mod string;
mod temporal;
mod type_registry;

pub use boolean::BooleanType;
pub use builtin_types::{builtin_types, register_builtin_types};
pub use decimal::{DecimalType, RoundMode};
pub use error::RegistryError;
pub use float::FloatType;
pub use integer::IntegerType;
pub use string::StringType;
pub use temporal::{DateType, TimeType};
pub use type_registry::TypeRegistry;

/// Per-attribute settings a type consults while coercing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoercionOptions {
    /// Whether values outside the base representation may be converted
    pub coercible: bool,
    /// Fractional digits to retain (decimal only)
    pub scale: Option<u32>,
    /// Rounding applied when `scale` is set (decimal only)
    pub round_mode: RoundMode,
}

/// Capability interface implemented by every registered type.
///
/// Implementers supply the representation metadata plus [`convert`]; the
/// `coercible`/`coerce` contract is derived from those and should not
/// normally be overridden.
///
/// [`convert`]: AttributeType::convert
pub trait AttributeType: fmt::Debug + Send + Sync {
    /// Unique registry tag (`"string"`, `"decimal"`, ...).
    fn tag(&self) -> &str;

    /// Canonical representation produced by this type.
    fn base_kind(&self) -> ValueKind;

    /// Representations accepted for coercion, in preference order.
    fn coercible_from(&self) -> &[ValueKind];

    /// Whether the empty string counts as absence and `format` applies.
    fn is_string_like(&self) -> bool {
        false
    }

    /// Whether this type understands the decimal `scale`/`round_mode` options.
    fn supports_scale(&self) -> bool {
        false
    }

    /// Type-specific pre-filter for a value outside the base representation.
    fn admits(&self, _value: &Value) -> bool {
        true
    }

    /// Converts an admissible value. `None` means "cannot coerce".
    fn convert(&self, value: &Value, options: &CoercionOptions) -> Option<Value>;

    /// Brings a value already in base representation to canonical form.
    fn normalize(&self, value: Value, _options: &CoercionOptions) -> Value {
        value
    }

    fn is_base(&self, value: &Value) -> bool {
        value.kind() == self.base_kind()
    }

    /// True when `value` is already canonical, or coercion is enabled and
    /// `value` is of an accepted representation that passes [`admits`].
    ///
    /// [`admits`]: AttributeType::admits
    fn coercible(&self, value: &Value, options: &CoercionOptions) -> bool {
        self.is_base(value)
            || (options.coercible
                && self.coercible_from().contains(&value.kind())
                && self.admits(value))
    }

    /// Produces the canonical representation of `value`, or `None`.
    fn coerce(&self, value: &Value, options: &CoercionOptions) -> Option<Value> {
        if self.is_base(value) {
            return Some(self.normalize(value.clone(), options));
        }
        if !self.coercible(value, options) {
            return None;
        }
        self.convert(value, options)
    }
}
