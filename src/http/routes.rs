use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Recording control
        .route("/start-recording", post(handlers::start_recording))
        .route("/transcribe", get(handlers::get_transcript))
        // Recorded audio, served statically like the original uploads folder
        .nest_service("/uploads", ServeDir::new(&state.uploads_dir))
        // The page frontend is served from a different origin in development
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
