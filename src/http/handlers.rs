use super::state::AppState;
use crate::protocol::{ErrorResponse, StartRecordingResponse, TranscribeResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info, warn};

/// POST /start-recording
/// Stage the fixture recording under a fresh server-assigned filename
pub async fn start_recording(State(state): State<AppState>) -> impl IntoResponse {
    let file = format!("recording-{}.wav", uuid::Uuid::new_v4());
    let dest = state.uploads_dir.join(&file);

    if let Err(e) = tokio::fs::create_dir_all(&state.uploads_dir).await {
        error!("Failed to create uploads directory: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to create uploads directory: {}", e),
            }),
        )
            .into_response();
    }

    if let Err(e) = tokio::fs::copy(&state.fixture_recording, &dest).await {
        error!("Failed to stage recording: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to stage recording: {}", e),
            }),
        )
            .into_response();
    }

    {
        let mut last = state.last_file.write().await;
        *last = Some(file.clone());
    }

    info!("Recording staged: {}", file);

    (StatusCode::OK, Json(StartRecordingResponse { file })).into_response()
}

/// GET /transcribe
/// Replay the fixture transcript. A missing or empty fixture degrades to the
/// contract's failure shape (a body without a transcript field) rather than
/// an error status.
pub async fn get_transcript(State(state): State<AppState>) -> impl IntoResponse {
    match tokio::fs::read_to_string(&state.fixture_transcript).await {
        Ok(text) if !text.trim().is_empty() => {
            let text = text.trim().to_string();
            info!("Serving transcript ({} chars)", text.len());
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    transcript: Some(text),
                }),
            )
                .into_response()
        }
        Ok(_) => {
            warn!("Fixture transcript is empty");
            (StatusCode::OK, Json(TranscribeResponse { transcript: None })).into_response()
        }
        Err(e) => {
            warn!("No transcript available: {}", e);
            (StatusCode::OK, Json(TranscribeResponse { transcript: None })).into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
