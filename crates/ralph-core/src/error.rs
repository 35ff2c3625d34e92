use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RalphError {
    #[error("PRD file not found: {}", .0.display())]
    PrdNotFound(PathBuf),

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("log file not found: {0}")]
    LogNotFound(String),

    #[error("invalid log file name '{0}': must be a plain *.jsonl name")]
    InvalidLogName(String),

    #[error("invalid batch input: {0}")]
    InvalidBatch(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RalphError>;
