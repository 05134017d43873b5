use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use voice_scribe::{create_router, AppState, AudioFile, Config, RecorderClient, TranscriptOutcome};

#[derive(Parser)]
#[command(name = "voice-scribe", version, about = "Client and dev server for a voice-transcription service")]
struct Cli {
    /// Config file, without extension (loaded via the config crate)
    #[arg(long, default_value = "config/voice-scribe")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the fixture-backed dev server
    Serve,

    /// Trigger a server-side recording and print the assigned filename
    Record,

    /// Fetch the transcript for the last recording
    Transcript {
        /// Filename from an earlier `record` invocation
        #[arg(long)]
        file: Option<String>,

        /// Download the recording and hand it to the configured player
        #[arg(long)]
        download: bool,
    },

    /// Record, wait, then fetch the transcript in one go
    Run {
        /// Seconds to leave the recorder running before asking for a transcript
        #[arg(long, default_value_t = 5)]
        wait_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Serve => serve(cfg).await,
        Command::Record => record(cfg).await,
        Command::Transcript { file, download } => transcript(cfg, file, download).await,
        Command::Run { wait_secs } => run(cfg, wait_secs).await,
    }
}

async fn serve(cfg: Config) -> Result<()> {
    match AudioFile::open(&cfg.fixtures.recording_path) {
        Ok(audio) => info!(
            "Fixture recording: {:.1}s, {}Hz, {} channels",
            audio.duration_seconds, audio.sample_rate, audio.channels
        ),
        Err(e) => warn!("Fixture recording not readable: {}", e),
    }

    let state = AppState::new(
        &cfg.service.http.uploads_path,
        &cfg.fixtures.recording_path,
        &cfg.fixtures.transcript_path,
    );

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, create_router(state))
        .await
        .context("HTTP server failed")?;

    Ok(())
}

fn client_for(cfg: &Config) -> Result<RecorderClient> {
    RecorderClient::with_timeout(
        &cfg.client.base_url,
        Duration::from_secs(cfg.client.request_timeout_secs),
    )
}

async fn record(cfg: Config) -> Result<()> {
    let mut client = client_for(&cfg)?;
    let started = client.start_recording().await?;

    println!("{}", started.file);

    Ok(())
}

async fn transcript(cfg: Config, file: Option<String>, download: bool) -> Result<()> {
    let mut client = client_for(&cfg)?;

    if let Some(file) = file {
        client.attach_recording(file);
    }

    let outcome = client.fetch_transcript().await?;
    println!("{}", outcome.message());

    if download {
        if let TranscriptOutcome::Transcribed { .. } = outcome {
            download_and_play(&cfg, &client).await?;
        }
    }

    Ok(())
}

async fn run(cfg: Config, wait_secs: u64) -> Result<()> {
    let mut client = client_for(&cfg)?;

    let started = client.start_recording().await?;
    info!("Recording as {}, waiting {}s", started.file, wait_secs);
    tokio::time::sleep(Duration::from_secs(wait_secs)).await;

    let outcome = client.fetch_transcript().await?;
    println!("{}", outcome.message());

    if let TranscriptOutcome::Transcribed { .. } = outcome {
        download_and_play(&cfg, &client).await?;
    }

    Ok(())
}

/// Fetch the recording behind the playback URL and hand it to the configured
/// player command, if any. The page equivalent is setting the audio element's
/// src and calling play().
async fn download_and_play(cfg: &Config, client: &RecorderClient) -> Result<()> {
    let Some(file) = client.state().audio_file() else {
        warn!("No recording to download");
        return Ok(());
    };

    tokio::fs::create_dir_all(&cfg.client.download_dir)
        .await
        .with_context(|| format!("Failed to create {}", cfg.client.download_dir))?;

    let dest = PathBuf::from(&cfg.client.download_dir).join(file);
    client.fetch_audio(file, &dest).await?;

    match AudioFile::open(&dest) {
        Ok(audio) => info!(
            "Recording: {:.1}s, {}Hz, {} channels",
            audio.duration_seconds, audio.sample_rate, audio.channels
        ),
        Err(e) => warn!("Downloaded audio not readable as WAV: {}", e),
    }

    if let Some(player) = &cfg.client.player_command {
        info!("Playing {} with {}", dest.display(), player);

        let status = tokio::process::Command::new(player)
            .arg(&dest)
            .status()
            .await
            .with_context(|| format!("Failed to launch {}", player))?;

        if !status.success() {
            warn!("Player exited with {}", status);
        }
    }

    Ok(())
}
