pub mod embed;
pub mod error;
pub mod routes;
pub mod state;
pub mod watch;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Transcripts
        .route("/api/files", get(routes::files::list_files))
        .route(
            "/api/messages/{filename}",
            get(routes::messages::get_messages),
        )
        // Live refresh (SSE)
        .route("/api/stream/{filename}", get(routes::stream::stream_file))
        // PRD + progress notes
        .route("/api/prd", get(routes::prd::get_prd))
        .route("/api/progress", get(routes::progress::get_progress))
        .fallback(embed::static_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the viewer on `host:port`.
pub async fn serve(
    app_state: AppState,
    host: &str,
    port: u16,
    open_browser: bool,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    serve_on(app_state, listener, open_browser).await
}

/// Start the viewer on a pre-bound listener.
///
/// The caller can read the actual port before starting (useful when
/// `port = 0` and the OS picks a free port).
pub async fn serve_on(
    app_state: AppState,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    tracing::info!(
        logs_dir = %app_state.paths.logs_dir.display(),
        "log viewer listening on http://localhost:{actual_port}"
    );

    let app = build_router(app_state);

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        if let Err(e) = open::that(&url) {
            tracing::warn!(error = %e, "could not open browser");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
