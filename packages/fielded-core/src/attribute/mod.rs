//! Attribute definitions, their options, and the validation pipeline.

mod definition;
mod options;
mod validation;

pub use definition::AttributeDefinition;
pub use options::{AttributeOptions, DefaultFn, DefaultValue};
