use chrono::{DateTime, Utc};

/// Where the client believes the server-side recorder is.
///
/// Tracked for callers that want the stricter Idle → Recording → Ready
/// sequencing; the operations themselves do not enforce it, so calling
/// `fetch_transcript` on an idle client is allowed and yields the
/// empty-state playback URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderPhase {
    /// No recording has been started
    Idle,
    /// A start request succeeded; server-side capture is presumed active
    Recording,
    /// A transcript fetch completed for the current recording
    Ready,
}

/// Explicit client-side state for the two recorder operations
///
/// Replaces the page's global mutable filename string: the filename, the
/// recording indicator, and the last displayed transcript all live here and
/// are only mutated by the owning client.
#[derive(Debug, Clone)]
pub struct RecorderState {
    phase: RecorderPhase,
    audio_file: Option<String>,
    started_at: Option<DateTime<Utc>>,
    last_transcript: Option<String>,
}

impl RecorderState {
    pub fn new() -> Self {
        Self {
            phase: RecorderPhase::Idle,
            audio_file: None,
            started_at: None,
            last_transcript: None,
        }
    }

    pub fn phase(&self) -> RecorderPhase {
        self.phase
    }

    /// Server-assigned filename of the most recently started recording
    pub fn audio_file(&self) -> Option<&str> {
        self.audio_file.as_deref()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Last transcript received, cleared when a new recording starts
    pub fn last_transcript(&self) -> Option<&str> {
        self.last_transcript.as_deref()
    }

    /// A start request is in flight: show the indicator, clear the display.
    /// The filename is untouched until the server answers.
    pub(crate) fn begin_recording(&mut self) {
        self.phase = RecorderPhase::Recording;
        self.last_transcript = None;
    }

    /// The server answered the start request with a filename
    pub(crate) fn recording_started(&mut self, file: String, started_at: DateTime<Utc>) {
        self.audio_file = Some(file);
        self.started_at = Some(started_at);
    }

    /// A transcript fetch is underway: hide the indicator whatever happens
    pub(crate) fn leave_recording(&mut self) {
        if self.phase == RecorderPhase::Recording {
            self.phase = RecorderPhase::Ready;
        }
    }

    pub(crate) fn transcript_received(&mut self, text: &str) {
        self.last_transcript = Some(text.to_string());
    }

    /// Adopt a filename obtained by an earlier client (e.g. a previous CLI
    /// invocation), as if the start call had happened here.
    pub(crate) fn attach_recording(&mut self, file: String) {
        self.phase = RecorderPhase::Recording;
        self.audio_file = Some(file);
        self.last_transcript = None;
    }
}

impl Default for RecorderState {
    fn default() -> Self {
        Self::new()
    }
}
