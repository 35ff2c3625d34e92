use axum::extract::{Path, Query, State};
use axum::Json;
use ralph_core::transcript::{self, AssistantMessage};

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize, Default)]
pub struct MessagesQuery {
    /// Only return messages after this line number.
    #[serde(default)]
    pub after: Option<usize>,
}

/// GET /api/messages/:filename — assistant messages of one transcript.
pub async fn get_messages(
    State(app): State<AppState>,
    Path(filename): Path<String>,
    Query(query): Query<MessagesQuery>,
) -> Result<Json<Vec<AssistantMessage>>, AppError> {
    let dir = app.paths.logs_dir.clone();
    let result = tokio::task::spawn_blocking(move || {
        let path = ralph_core::logs::resolve(&dir, &filename)?;
        let messages = transcript::parse(&path)?;
        let messages = match query.after {
            Some(line) => transcript::messages_after(&messages, line).to_vec(),
            None => messages,
        };
        Ok::<_, ralph_core::RalphError>(messages)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;

    match result {
        Ok(messages) => Ok(Json(messages)),
        Err(ralph_core::RalphError::LogNotFound(_) | ralph_core::RalphError::InvalidLogName(_)) => {
            Err(AppError::not_found("File not found"))
        }
        Err(e) => Err(e.into()),
    }
}
