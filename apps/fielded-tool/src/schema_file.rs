//! JSON schema description files.
//!
//! ```json
//! {
//!   "name": "User",
//!   "defaults": { "default_coercible": true },
//!   "attributes": [
//!     { "name": "username", "type": "string", "strict": true, "format": "(?i)^[a-z]" },
//!     { "name": "level", "type": "integer", "default": 2 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;

use fielded_core::attribute::AttributeOptions;
use fielded_core::config::SchemaConfig;
use fielded_core::schema::Schema;
use fielded_core::types::RoundMode;
use fielded_core::Value;

/// Top-level schema file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    pub name: String,
    #[serde(default)]
    pub defaults: SchemaConfig,
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
}

/// One attribute declaration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub required: Option<bool>,
    pub coercible: Option<bool>,
    #[serde(default)]
    pub strict: bool,
    pub format: Option<String>,
    #[serde(rename = "enum")]
    pub enumeration: Option<Vec<serde_json::Value>>,
    pub default: Option<serde_json::Value>,
    pub scale: Option<u32>,
    pub round_mode: Option<RoundMode>,
}

impl AttributeEntry {
    fn options(&self) -> Result<AttributeOptions> {
        let mut options = AttributeOptions::new();
        if let Some(required) = self.required {
            options = options.with_required(required);
        }
        if let Some(coercible) = self.coercible {
            options = options.with_coercible(coercible);
        }
        if self.strict {
            options = options.strict();
        }
        if let Some(format) = &self.format {
            options = options.format(format.clone());
        }
        if let Some(values) = &self.enumeration {
            let values = values
                .iter()
                .cloned()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("enum of attribute '{}'", self.name))?;
            options = options.one_of(values);
        }
        if let Some(default) = &self.default {
            let value = Value::try_from(default.clone())
                .with_context(|| format!("default of attribute '{}'", self.name))?;
            options = options.default_value(value);
        }
        if let Some(scale) = self.scale {
            options = options.scale(scale);
        }
        if let Some(mode) = self.round_mode {
            options = options.round_mode(mode);
        }
        Ok(options)
    }
}

impl SchemaFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid schema file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Defines every attribute, in file order, on a fresh schema.
    pub fn compile(&self) -> Result<Arc<Schema>> {
        let mut builder = Schema::builder(self.name.clone()).with_config(self.defaults);
        for entry in &self.attributes {
            builder = builder.define_attribute(entry.name.clone(), &entry.type_tag, entry.options()?)?;
        }
        Ok(builder.build())
    }
}
