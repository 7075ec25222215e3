//! Schema definition and build error types.

use thiserror::Error;

use crate::types::RegistryError;

/// Why a required attribute ended up without a value.
///
/// Both causes surface as the same `is required` message; the cause is kept
/// so callers can tell missing input from input that could not be coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    /// No input, nil, or an empty string for a string-like type
    Missing,
    /// Input present but not coercible to the attribute's type
    Uncoercible,
}

/// Failure while building a value object. The first failing attribute wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Value absent, or not coercible, for a required attribute
    #[error(":{attribute} is required")]
    Required { attribute: String, cause: Absence },

    /// String value does not match the attribute's format
    #[error(":{attribute} is not in a valid format")]
    Format { attribute: String },

    /// Value is not a member of the attribute's enumeration
    #[error(":{attribute} is not included in list")]
    NotIncluded { attribute: String },

    /// Strict attribute received a value outside its base representation
    #[error(":{attribute} is not of type {tag}")]
    WrongType { attribute: String, tag: String },

    /// More positional values than the schema has attributes
    #[error("wrong number of arguments (given {given}, expected 0..{expected})")]
    Arity { given: usize, expected: usize },
}

impl BuildError {
    /// Name of the attribute that failed, if the failure is per-attribute.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            BuildError::Required { attribute, .. }
            | BuildError::Format { attribute }
            | BuildError::NotIncluded { attribute }
            | BuildError::WrongType { attribute, .. } => Some(attribute),
            BuildError::Arity { .. } => None,
        }
    }
}

/// Failure while defining a schema.
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// Attribute references a tag missing from the registry
    #[error("attribute :{attribute} references unknown type '{tag}'")]
    UnknownType { attribute: String, tag: String },

    /// Two attributes share a name
    #[error("attribute :{attribute} already defined on {schema}")]
    DuplicateAttribute { schema: String, attribute: String },

    /// Attribute names must be non-empty
    #[error("attribute name must not be empty on {schema}")]
    EmptyName { schema: String },

    /// `format` pattern failed to compile
    #[error("attribute :{attribute} has invalid format /{pattern}/: {source}")]
    InvalidFormat {
        attribute: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Enumeration member not convertible to the attribute's type
    #[error("enum value {value} of attribute :{attribute} is not a valid {tag}")]
    InvalidEnumValue {
        attribute: String,
        value: String,
        tag: String,
    },

    /// Registry lookup or registration failure other than an unknown tag
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Option not applicable to the attribute's type
    #[error("option '{option}' is not supported by type '{tag}' (attribute :{attribute})")]
    UnsupportedOption {
        attribute: String,
        option: &'static str,
        tag: String,
    },
}
