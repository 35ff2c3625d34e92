use axum::extract::State;
use axum::Json;
use ralph_core::logs::LogFile;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/files — transcript files, most recently modified first.
pub async fn list_files(State(app): State<AppState>) -> Result<Json<Vec<LogFile>>, AppError> {
    let dir = app.paths.logs_dir.clone();
    let files = tokio::task::spawn_blocking(move || ralph_core::logs::list_files(&dir))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(files))
}
