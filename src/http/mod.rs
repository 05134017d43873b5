//! Fixture-backed HTTP server implementing the transcription service contract
//!
//! Stands in for the real capture/STT backend during development and tests:
//! - POST /start-recording - Stage a recording, return its filename
//! - GET /transcribe - Replay the fixture transcript
//! - GET /uploads/:file - Serve recorded audio
//! - GET /health - Health check
//!
//! No audio is captured and no speech-to-text runs here; start stages a
//! pre-recorded fixture under a fresh name, and transcribe reads a text file.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
