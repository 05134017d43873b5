use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Directory recordings are staged into and served from
    pub uploads_dir: PathBuf,

    /// Pre-recorded WAV copied on each start request
    pub fixture_recording: PathBuf,

    /// Transcript text replayed by the transcribe endpoint
    pub fixture_transcript: PathBuf,

    /// Filename assigned by the most recent start request
    pub last_file: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new(
        uploads_dir: impl Into<PathBuf>,
        fixture_recording: impl Into<PathBuf>,
        fixture_transcript: impl Into<PathBuf>,
    ) -> Self {
        Self {
            uploads_dir: uploads_dir.into(),
            fixture_recording: fixture_recording.into(),
            fixture_transcript: fixture_transcript.into(),
            last_file: Arc::new(RwLock::new(None)),
        }
    }
}
