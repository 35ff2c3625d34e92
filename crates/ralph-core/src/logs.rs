use crate::error::{RalphError, Result};
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Listing entry for one transcript file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogFile {
    pub name: String,
    pub size: u64,
    /// Seconds since the Unix epoch, with sub-second precision.
    pub mtime: f64,
}

fn epoch_seconds(t: SystemTime) -> f64 {
    let dt: DateTime<Utc> = t.into();
    dt.timestamp_micros() as f64 / 1_000_000.0
}

/// List `*.jsonl` files directly inside `dir`, most recently modified first.
///
/// A missing directory lists as empty. Entries that vanish or cannot be
/// stat'ed between the directory read and the metadata call are left out.
pub fn list_files(dir: &Path) -> Result<Vec<LogFile>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !paths::is_transcript_name(&name) {
            continue;
        }
        let meta = match entry.metadata() {
            Ok(m) if m.is_file() => m,
            _ => continue,
        };
        let mtime = meta.modified().map(epoch_seconds).unwrap_or(0.0);
        files.push(LogFile {
            name,
            size: meta.len(),
            mtime,
        });
    }

    files.sort_by(|a, b| b.mtime.total_cmp(&a.mtime));
    Ok(files)
}

/// Resolve a client-supplied transcript name to an existing file in `dir`.
pub fn resolve(dir: &Path, name: &str) -> Result<PathBuf> {
    if !paths::is_transcript_name(name) {
        return Err(RalphError::InvalidLogName(name.to_string()));
    }
    let path = dir.join(name);
    if !path.is_file() {
        return Err(RalphError::LogNotFound(name.to_string()));
    }
    Ok(path)
}
