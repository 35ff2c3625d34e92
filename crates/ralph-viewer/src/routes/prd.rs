use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/prd — the PRD array as stored. An unreadable file yields `[]`.
pub async fn get_prd(State(app): State<AppState>) -> Result<Json<Value>, AppError> {
    let path = app.paths.prd.clone();
    let value = tokio::task::spawn_blocking(move || match ralph_core::prd::load_raw(&path) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read PRD file");
            Value::Array(Vec::new())
        }
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;

    Ok(Json(value))
}
