use super::state::RecorderState;
use crate::protocol::{StartRecordingResponse, TranscribeResponse};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use futures::stream::StreamExt;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of a successful start call
#[derive(Debug, Clone)]
pub struct StartedRecording {
    /// Server-assigned filename for the recording in progress
    pub file: String,

    /// When the start request was acknowledged
    pub started_at: DateTime<Utc>,
}

/// Outcome of a transcript fetch, surfaced to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptOutcome {
    /// The service produced a transcript; `playback_url` points at the
    /// recorded audio (`<base>/uploads/<file>`)
    Transcribed { text: String, playback_url: String },

    /// The service answered without a usable transcript
    Failed,
}

impl TranscriptOutcome {
    /// User-visible message shown when transcription did not produce text
    pub const FAILED_MESSAGE: &'static str = "Transcription failed.";

    /// Text to display: the transcript, or the fixed failure message
    pub fn message(&self) -> &str {
        match self {
            Self::Transcribed { text, .. } => text,
            Self::Failed => Self::FAILED_MESSAGE,
        }
    }
}

/// Client for the transcription service's recording endpoints
///
/// Operations take `&mut self`, so a single client cannot race itself: the
/// filename captured by `start_recording` is the one `fetch_transcript`
/// builds its playback URL from.
pub struct RecorderClient {
    http: reqwest::Client,
    base_url: String,
    state: RecorderState,
}

impl RecorderClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            state: RecorderState::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    /// Thread a filename from an earlier start call (e.g. a previous CLI
    /// invocation) into this client
    pub fn attach_recording(&mut self, file: impl Into<String>) {
        self.state.attach_recording(file.into());
    }

    /// Trigger a server-side recording
    ///
    /// Clears any previous transcript from the state, issues exactly one
    /// POST to the start endpoint, and stores the server-assigned filename.
    /// Network and decode failures are returned, not swallowed.
    pub async fn start_recording(&mut self) -> Result<StartedRecording> {
        self.state.begin_recording();

        info!("Requesting recording start");

        let response = self
            .http
            .post(format!("{}/start-recording", self.base_url))
            .send()
            .await
            .context("start-recording request failed")?
            .error_for_status()
            .context("start-recording returned an error status")?;

        let body: StartRecordingResponse = response
            .json()
            .await
            .context("Failed to decode start-recording response")?;

        let started_at = Utc::now();
        self.state.recording_started(body.file.clone(), started_at);

        info!("Recording started: {}", body.file);

        Ok(StartedRecording {
            file: body.file,
            started_at,
        })
    }

    /// Fetch the transcript for the most recent recording
    ///
    /// The recording indicator is considered dismissed whether or not the
    /// fetch succeeds. A missing or empty `transcript` field in the response
    /// is the service's failure shape and yields `TranscriptOutcome::Failed`.
    pub async fn fetch_transcript(&mut self) -> Result<TranscriptOutcome> {
        self.state.leave_recording();

        let response = self
            .http
            .get(format!("{}/transcribe", self.base_url))
            .send()
            .await
            .context("transcribe request failed")?
            .error_for_status()
            .context("transcribe returned an error status")?;

        let body: TranscribeResponse = response
            .json()
            .await
            .context("Failed to decode transcribe response")?;

        match body.transcript {
            Some(text) if !text.is_empty() => {
                let playback_url = self.playback_url();
                self.state.transcript_received(&text);
                info!("Transcript received ({} chars)", text.len());
                Ok(TranscriptOutcome::Transcribed { text, playback_url })
            }
            _ => {
                warn!("Service answered without a transcript");
                Ok(TranscriptOutcome::Failed)
            }
        }
    }

    /// Playback URL for the most recent recording
    ///
    /// Before any recording has started this is the bare uploads root, the
    /// empty-state equivalent of the page's unguarded `/uploads/undefined`.
    pub fn playback_url(&self) -> String {
        format!(
            "{}/uploads/{}",
            self.base_url,
            self.state.audio_file().unwrap_or("")
        )
    }

    /// Download a recording to `dest`, returning the number of bytes written
    pub async fn fetch_audio(&self, file: &str, dest: impl AsRef<Path>) -> Result<u64> {
        let dest = dest.as_ref();
        let url = format!("{}/uploads/{}", self.base_url, file);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?
            .error_for_status()
            .with_context(|| format!("Audio fetch for {} returned an error status", file))?;

        let mut out = tokio::fs::File::create(dest)
            .await
            .with_context(|| format!("Failed to create {}", dest.display()))?;

        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.context("Audio download interrupted")?;
            out.write_all(&chunk)
                .await
                .context("Failed to write audio to disk")?;
            written += chunk.len() as u64;
        }

        out.flush().await.context("Failed to flush audio file")?;

        info!("Downloaded {} ({} bytes) to {}", file, written, dest.display());

        Ok(written)
    }
}
