//! Constraint options accepted when defining an attribute.

use std::fmt;
use std::sync::Arc;

use crate::types::RoundMode;
use crate::value::Value;

/// Zero-argument producer for default values.
pub type DefaultFn = dyn Fn() -> Value + Send + Sync;

/// Value substituted when an attribute's input is absent.
#[derive(Clone)]
pub enum DefaultValue {
    /// Fixed value
    Value(Value),
    /// Invoked on every substitution
    Producer(Arc<DefaultFn>),
}

impl DefaultValue {
    pub fn produce(&self) -> Value {
        match self {
            DefaultValue::Value(value) => value.clone(),
            DefaultValue::Producer(f) => f(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            DefaultValue::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// Options for a single attribute, built fluently.
///
/// Unset `required`/`coercible` fall back to the schema's
/// [`SchemaConfig`](crate::config::SchemaConfig) defaults.
///
/// ```
/// use fielded_core::attribute::AttributeOptions;
///
/// let options = AttributeOptions::new().strict().format("(?i)^[a-z]");
/// assert!(options.is_strict());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttributeOptions {
    pub(crate) required: Option<bool>,
    pub(crate) coercible: Option<bool>,
    pub(crate) strict: bool,
    pub(crate) format: Option<String>,
    pub(crate) enumeration: Option<Vec<Value>>,
    pub(crate) default: Option<DefaultValue>,
    pub(crate) scale: Option<u32>,
    pub(crate) round_mode: Option<RoundMode>,
}

impl AttributeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn required(self) -> Self {
        self.with_required(true)
    }

    #[must_use]
    pub fn optional(self) -> Self {
        self.with_required(false)
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    #[must_use]
    pub fn coercible(self) -> Self {
        self.with_coercible(true)
    }

    /// Explicit coercion flag, overriding the schema default either way.
    #[must_use]
    pub fn with_coercible(mut self, coercible: bool) -> Self {
        self.coercible = Some(coercible);
        self
    }

    /// Disables coercion; input must already be in the base representation.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Regular expression the final string must match (string types only).
    #[must_use]
    pub fn format(mut self, pattern: impl Into<String>) -> Self {
        self.format = Some(pattern.into());
        self
    }

    /// Ordered set of allowed canonical values.
    #[must_use]
    pub fn one_of<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enumeration = Some(values.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Value(value.into()));
        self
    }

    #[must_use]
    pub fn default_with<F>(mut self, producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(DefaultValue::Producer(Arc::new(producer)));
        self
    }

    /// Fractional digits retained by a decimal attribute.
    #[must_use]
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn round_mode(mut self, mode: RoundMode) -> Self {
        self.round_mode = Some(mode);
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}
