use crate::error::{RalphError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// ViewerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// How often `/api/stream` re-checks the transcript size.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ViewerConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

// ---------------------------------------------------------------------------
// PathsConfig
// ---------------------------------------------------------------------------

/// Optional overrides, relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prd: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<PathBuf>,
}

/// Absolute locations of everything the tools read and write.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPaths {
    pub logs_dir: PathBuf,
    pub prd: PathBuf,
    pub progress: PathBuf,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load `.claude/ralph/config.yaml`. A missing file yields the defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.viewer.poll_interval_ms == 0 {
            return Err(RalphError::InvalidConfig(
                "viewer.poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn resolve_paths(&self, root: &Path) -> ResolvedPaths {
        let under_root = |p: &Option<PathBuf>, default: PathBuf| match p {
            Some(p) => root.join(p),
            None => default,
        };
        ResolvedPaths {
            logs_dir: under_root(&self.paths.logs_dir, paths::logs_dir(root)),
            prd: under_root(&self.paths.prd, paths::prd_path(root)),
            progress: under_root(&self.paths.progress, paths::progress_path(root)),
        }
    }
}
