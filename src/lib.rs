pub mod audio;
pub mod client;
pub mod config;
pub mod http;
pub mod protocol;

pub use audio::AudioFile;
pub use client::{
    RecorderClient, RecorderPhase, RecorderState, StartedRecording, TranscriptOutcome,
};
pub use config::Config;
pub use http::{create_router, AppState};
pub use protocol::{ErrorResponse, StartRecordingResponse, TranscribeResponse};
