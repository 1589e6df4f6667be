//! Codec configuration resolution for the CLI
//!
//! Layers, lowest first: built-in defaults, the `--config` TOML file,
//! `SYLLA_*` environment variables, then `--precision`.

use anyhow::{Context, Result};
use std::path::Path;
use sylla_core::{CodecConfig, WordCodec};

/// Resolve the codec configuration and build a codec from it
pub fn load_codec(config_path: Option<&Path>, precision: Option<usize>) -> Result<WordCodec> {
    let mut config = match config_path {
        Some(path) => CodecConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CodecConfig::default(),
    };

    config
        .merge_with_env()
        .context("applying SYLLA_* environment overrides")?;

    if let Some(precision) = precision {
        config.precision = precision;
    }

    tracing::debug!(
        precision = config.precision,
        snap_epsilon = config.snap_epsilon,
        "resolved codec configuration"
    );
    Ok(WordCodec::new(config)?)
}
