use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const RALPH_DIR: &str = ".claude/ralph";
pub const LOGS_DIR: &str = ".claude/ralph/logs";

pub const PRD_FILE: &str = ".claude/ralph/plans/prd.json";
pub const PROGRESS_FILE: &str = ".claude/ralph/progress.txt";
pub const CONFIG_FILE: &str = ".claude/ralph/config.yaml";

/// Suffix every transcript file carries.
pub const TRANSCRIPT_EXT: &str = "jsonl";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn ralph_dir(root: &Path) -> PathBuf {
    root.join(RALPH_DIR)
}

pub fn logs_dir(root: &Path) -> PathBuf {
    root.join(LOGS_DIR)
}

pub fn prd_path(root: &Path) -> PathBuf {
    root.join(PRD_FILE)
}

pub fn progress_path(root: &Path) -> PathBuf {
    root.join(PROGRESS_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// True when `name` is a bare `*.jsonl` file name with no directory parts.
pub fn is_transcript_name(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
        return false;
    }
    let path = Path::new(name);
    path.extension().and_then(|e| e.to_str()) == Some(TRANSCRIPT_EXT)
        && path.file_name().and_then(|n| n.to_str()) == Some(name)
}
