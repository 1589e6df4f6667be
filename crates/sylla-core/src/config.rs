//! Codec configuration
//!
//! Configuration is resolved in layers: defaults, then an optional TOML file,
//! then `SYLLA_`-prefixed environment variables. The result is validated
//! before a codec is built from it.
//!
//! ```toml
//! precision = 4
//! snap_epsilon = 1e-9
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{CodecError, Result};
use crate::normalize::SNAP_EPSILON;

/// Default number of words per address
pub const DEFAULT_PRECISION: usize = 4;

/// Largest supported number of words.
///
/// Beyond eight digits the base-50 cell is smaller than f64 resolution of a
/// unified longitude.
pub const MAX_PRECISION: usize = 8;

/// Largest accepted snap tolerance
pub const MAX_SNAP_EPSILON: f64 = 1e-3;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "SYLLA_";

/// Settings shared by every encode and decode call of a codec
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Syllables per axis, which is also the number of words
    pub precision: usize,
    /// Distance from 1.0 within which a decoded fraction snaps to the range maximum
    pub snap_epsilon: f64,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            snap_epsilon: SNAP_EPSILON,
        }
    }
}

impl CodecConfig {
    /// Default configuration with a different precision
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Parse a TOML document, filling omitted keys with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply `SYLLA_PRECISION` and `SYLLA_SNAP_EPSILON` from the process environment
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_vars(std::env::vars())
    }

    /// Apply overrides from `(key, value)` pairs using the environment naming scheme
    pub fn merge_with_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            self.set_from_string(&name.to_lowercase(), value.as_ref())?;
        }
        self.validate()
    }

    /// Set one field from its string form
    pub fn set_from_string(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "precision" => {
                self.precision = value.trim().parse().map_err(|e| {
                    CodecError::invalid_config(format!("precision '{value}': {e}"))
                })?;
            }
            "snap_epsilon" => {
                self.snap_epsilon = value.trim().parse().map_err(|e| {
                    CodecError::invalid_config(format!("snap_epsilon '{value}': {e}"))
                })?;
            }
            other => {
                tracing::debug!(key = other, "ignoring unknown configuration key");
            }
        }
        Ok(())
    }

    /// Check every field against its legal range
    pub fn validate(&self) -> Result<()> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(CodecError::invalid_config(format!(
                "precision must be between 1 and {MAX_PRECISION} (got {})",
                self.precision
            )));
        }
        if !(self.snap_epsilon > 0.0 && self.snap_epsilon <= MAX_SNAP_EPSILON) {
            return Err(CodecError::invalid_config(format!(
                "snap_epsilon must be in (0, {MAX_SNAP_EPSILON}] (got {})",
                self.snap_epsilon
            )));
        }
        Ok(())
    }
}
