//! CLI command implementations.
//!
//! Each submodule owns one subcommand: configuration resolution, the
//! pipeline call, and report writing. The handlers return
//! `anyhow::Result` at this orchestration boundary; the library beneath
//! them uses typed errors.

pub mod init;
pub mod score;
pub mod sensitivity;

pub use init::init_config;
pub use score::{run_score, ScoreArgs};
pub use sensitivity::{run_sensitivity, SensitivityArgs};

use crate::config::RiskConfig;
use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Resolve the active configuration: an explicit `--config` path, else
/// `./riskmap.toml` when present, else built-in defaults.
pub fn load_config(explicit: Option<&PathBuf>) -> Result<RiskConfig> {
    if let Some(path) = explicit {
        return RiskConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()));
    }

    let default_path = Path::new("riskmap.toml");
    if default_path.exists() {
        debug!("using configuration from ./riskmap.toml");
        return RiskConfig::load(default_path).context("loading configuration from ./riskmap.toml");
    }

    Ok(RiskConfig::default())
}
