use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/progress — raw text of the progress notes.
pub async fn get_progress(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let path = app.paths.progress.clone();
    let content = tokio::task::spawn_blocking(move || {
        ralph_core::io::read_to_string_or_empty(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "could not read progress file");
            String::new()
        })
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;

    Ok(Json(serde_json::json!({ "content": content })))
}
