use ralph_core::config::{Config, ResolvedPaths};
use std::path::Path;
use std::time::Duration;

/// Shared application state passed to all route handlers.
///
/// Read-only: every `/api/stream` connection owns its own watcher, so no
/// mutable state is shared between requests.
#[derive(Clone, Debug)]
pub struct AppState {
    pub paths: ResolvedPaths,
    pub poll_interval: Duration,
}

impl AppState {
    pub fn new(paths: ResolvedPaths, poll_interval: Duration) -> Self {
        Self {
            paths,
            poll_interval,
        }
    }

    pub fn from_config(root: &Path, config: &Config) -> Self {
        Self::new(config.resolve_paths(root), config.viewer.poll_interval())
    }
}
