//! Size-based change detection for a single growing file.
//!
//! The tracker is a two-state machine: a tick either observes the same size
//! as last time (idle) or a different one (changed, exactly one
//! notification, new size recorded). A tick where the file cannot be read
//! leaves the state alone.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Idle,
    Changed { size: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeTracker {
    last_size: u64,
}

impl SizeTracker {
    pub fn new(initial_size: u64) -> Self {
        Self {
            last_size: initial_size,
        }
    }

    pub fn last_size(&self) -> u64 {
        self.last_size
    }

    /// Feed one observation. `None` means the file was unreadable this tick.
    pub fn observe(&mut self, size: Option<u64>) -> Tick {
        match size {
            Some(size) if size != self.last_size => {
                self.last_size = size;
                Tick::Changed { size }
            }
            _ => Tick::Idle,
        }
    }
}

/// A [`SizeTracker`] bound to one path.
#[derive(Debug, Clone)]
pub struct FileWatch {
    path: PathBuf,
    tracker: SizeTracker,
}

impl FileWatch {
    /// Start watching `path`; a file that does not exist yet starts at size 0.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let initial = crate::io::file_size(&path).unwrap_or(0);
        Self {
            path,
            tracker: SizeTracker::new(initial),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a size read elsewhere (e.g. by an async stat).
    pub fn observe(&mut self, size: Option<u64>) -> Tick {
        let tick = self.tracker.observe(size);
        if let Tick::Changed { size } = tick {
            tracing::debug!(path = %self.path.display(), size, "watched file changed");
        }
        tick
    }
}
