//! Schema-wide option defaults.

use serde::{Deserialize, Serialize};

use crate::types::RoundMode;

/// Defaults applied to attribute options a definition leaves unset.
///
/// Owned by a single schema; there is no process-wide mutable default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Whether attributes are required unless marked optional
    pub default_required: bool,
    /// Whether attributes coerce unless told otherwise
    pub default_coercible: bool,
    /// Rounding for scaled decimals without an explicit round mode
    pub default_round_mode: RoundMode,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            default_required: true,
            default_coercible: false,
            default_round_mode: RoundMode::HalfUp,
        }
    }
}
