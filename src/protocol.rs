//! Wire types for the transcription service contract
//!
//! Shared between the client and the dev server:
//! - POST /start-recording → `StartRecordingResponse`
//! - GET /transcribe → `TranscribeResponse`
//! - error bodies → `ErrorResponse`

use serde::{Deserialize, Serialize};

/// Body of a successful start-recording response
#[derive(Debug, Serialize, Deserialize)]
pub struct StartRecordingResponse {
    /// Server-assigned filename of the recording in progress
    pub file: String,
}

/// Body of a transcribe response
///
/// A missing or empty `transcript` field is the contract's failure shape;
/// it serializes as `{}` rather than `{"transcript": null}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscribeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

/// Error body returned by the dev server
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
