pub mod prd;
pub mod status;
pub mod viewer;

use anyhow::Context;
use ralph_core::config::Config;
use std::path::{Path, PathBuf};

/// PRD location: explicit flag, else the configured / default path under `root`.
pub fn prd_path(root: &Path, explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p);
    }
    let config = Config::load(root).context("failed to load config")?;
    Ok(config.resolve_paths(root).prd)
}
