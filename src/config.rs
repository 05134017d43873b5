use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub client: ClientConfig,
    pub fixtures: FixtureConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,

    /// Directory the server serves at `/uploads/<file>`
    pub uploads_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the transcription service
    pub base_url: String,

    /// Per-request timeout (no retries are attempted)
    pub request_timeout_secs: u64,

    /// Where downloaded recordings are written
    pub download_dir: String,

    /// Optional command handed the downloaded recording for playback
    pub player_command: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureConfig {
    /// Pre-recorded WAV the dev server stages on each start request
    pub recording_path: String,

    /// Transcript text the dev server replays
    pub transcript_path: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
