//! HTTP client for the voice-transcription service
//!
//! This module provides the recorder client used by the CLI frontend:
//! - POST /start-recording - Trigger a server-side recording
//! - GET /transcribe - Fetch the transcript for the last recording
//! - GET /uploads/:file - Download the recorded audio for playback
//!
//! Both operations return explicit results instead of failing silently, and
//! the filename threaded between them lives in an explicit `RecorderState`
//! rather than a page-global variable.

mod recorder;
mod state;

pub use recorder::{RecorderClient, StartedRecording, TranscriptOutcome};
pub use state::{RecorderPhase, RecorderState};
