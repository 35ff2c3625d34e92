use axum::extract::{Path, State};
use axum::http::header::{self, HeaderName};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use futures::StreamExt as _;
use ralph_core::watch::FileWatch;
use std::convert::Infallible;

use crate::error::AppError;
use crate::state::AppState;
use crate::watch::size_changes;

/// Payload of every change notification.
pub const REFRESH: &str = "refresh";

/// GET /api/stream/:filename — SSE stream that emits `refresh` whenever the
/// transcript's size changes.
///
/// The file does not have to exist yet; it is picked up once created. The
/// poll loop lives inside the response stream and stops when the client
/// goes away.
pub async fn stream_file(
    State(app): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    if !ralph_core::paths::is_transcript_name(&filename) {
        return Err(AppError::not_found("File not found"));
    }
    let path = app.paths.logs_dir.join(&filename);
    let watch = tokio::task::spawn_blocking(move || FileWatch::new(path))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;

    tracing::debug!(file = %filename, "stream subscribed");
    let events = size_changes(watch, app.poll_interval)
        .map(|_| Ok::<Event, Infallible>(Event::default().data(REFRESH)));

    Ok((
        [
            (header::CACHE_CONTROL, "no-cache"),
            (HeaderName::from_static("x-accel-buffering"), "no"),
        ],
        Sse::new(events).keep_alive(KeepAlive::default()),
    )
        .into_response())
}
