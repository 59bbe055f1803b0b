//! Run configuration.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or built
//! with [`Config::default`]. Every field has a default, so a partial
//! document only overrides what it names.

use serde::Deserialize;

/// Default values applied when a field is absent.
mod defaults {
    /// Default per-run step budget.
    pub const STEP_LIMIT: u64 = 1_000_000;
}

/// Top-level configuration for a machine run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Options governing the execution loop.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] for malformed documents.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Options governing the execution loop.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Print a trace line before each executed instruction.
    #[serde(default)]
    pub trace: bool,

    /// Upper bound on executed steps; `null` disables the guard.
    #[serde(default = "default_step_limit")]
    pub step_limit: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            step_limit: default_step_limit(),
        }
    }
}

fn default_step_limit() -> Option<u64> {
    Some(defaults::STEP_LIMIT)
}
