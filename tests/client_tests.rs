// Integration tests for the recorder client against mock service endpoints.
//
// Each test spins up a real axum server on an ephemeral port with canned
// responses, so the client's HTTP behavior is exercised end to end.

use anyhow::Result;
use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use voice_scribe::{RecorderClient, RecorderPhase, TranscriptOutcome};

async fn spawn_server(router: Router) -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(format!("http://{}", addr))
}

#[tokio::test]
async fn start_issues_one_post_and_stores_filename() -> Result<()> {
    let posts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&posts);

    let router = Router::new().route(
        "/start-recording",
        post(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "file": "rec1.wav" }))
            }
        }),
    );

    let base = spawn_server(router).await?;
    let mut client = RecorderClient::new(&base)?;

    let started = client.start_recording().await?;

    assert_eq!(started.file, "rec1.wav");
    assert_eq!(posts.load(Ordering::SeqCst), 1);
    assert_eq!(client.state().audio_file(), Some("rec1.wav"));
    assert_eq!(client.state().phase(), RecorderPhase::Recording);
    assert!(client.state().started_at().is_some());

    Ok(())
}

#[tokio::test]
async fn transcript_yields_text_and_playback_url() -> Result<()> {
    let router = Router::new()
        .route(
            "/start-recording",
            post(|| async { Json(json!({ "file": "rec1.wav" })) }),
        )
        .route(
            "/transcribe",
            get(|| async { Json(json!({ "transcript": "hello world" })) }),
        );

    let base = spawn_server(router).await?;
    let mut client = RecorderClient::new(&base)?;

    client.start_recording().await?;
    let outcome = client.fetch_transcript().await?;

    assert_eq!(
        outcome,
        TranscriptOutcome::Transcribed {
            text: "hello world".to_string(),
            playback_url: format!("{}/uploads/rec1.wav", base),
        }
    );
    assert_eq!(outcome.message(), "hello world");
    assert_eq!(client.state().phase(), RecorderPhase::Ready);
    assert_eq!(client.state().last_transcript(), Some("hello world"));

    Ok(())
}

#[tokio::test]
async fn missing_transcript_field_is_failure() -> Result<()> {
    let router = Router::new().route("/transcribe", get(|| async { Json(json!({})) }));

    let base = spawn_server(router).await?;
    let mut client = RecorderClient::new(&base)?;

    let outcome = client.fetch_transcript().await?;

    assert_eq!(outcome, TranscriptOutcome::Failed);
    assert_eq!(outcome.message(), "Transcription failed.");
    assert!(client.state().last_transcript().is_none());

    Ok(())
}

#[tokio::test]
async fn empty_transcript_field_is_failure() -> Result<()> {
    let router = Router::new().route(
        "/transcribe",
        get(|| async { Json(json!({ "transcript": "" })) }),
    );

    let base = spawn_server(router).await?;
    let mut client = RecorderClient::new(&base)?;

    assert_eq!(client.fetch_transcript().await?, TranscriptOutcome::Failed);

    Ok(())
}

#[tokio::test]
async fn transcript_before_start_uses_empty_state_url() -> Result<()> {
    let router = Router::new().route(
        "/transcribe",
        get(|| async { Json(json!({ "transcript": "hello" })) }),
    );

    let base = spawn_server(router).await?;
    let mut client = RecorderClient::new(&base)?;

    // No recording was ever started, so the playback URL has no filename.
    let outcome = client.fetch_transcript().await?;

    assert_eq!(
        outcome,
        TranscriptOutcome::Transcribed {
            text: "hello".to_string(),
            playback_url: format!("{}/uploads/", base),
        }
    );
    assert_eq!(client.state().phase(), RecorderPhase::Idle);

    Ok(())
}

#[tokio::test]
async fn starting_again_clears_previous_transcript() -> Result<()> {
    let router = Router::new()
        .route(
            "/start-recording",
            post(|| async { Json(json!({ "file": "rec2.wav" })) }),
        )
        .route(
            "/transcribe",
            get(|| async { Json(json!({ "transcript": "first take" })) }),
        );

    let base = spawn_server(router).await?;
    let mut client = RecorderClient::new(&base)?;

    client.start_recording().await?;
    client.fetch_transcript().await?;
    assert_eq!(client.state().last_transcript(), Some("first take"));

    client.start_recording().await?;

    assert_eq!(client.state().last_transcript(), None);
    assert_eq!(client.state().phase(), RecorderPhase::Recording);

    Ok(())
}

#[tokio::test]
async fn attached_filename_feeds_the_playback_url() -> Result<()> {
    let router = Router::new().route(
        "/transcribe",
        get(|| async { Json(json!({ "transcript": "resumed" })) }),
    );

    let base = spawn_server(router).await?;
    let mut client = RecorderClient::new(&base)?;

    client.attach_recording("rec7.wav");
    let outcome = client.fetch_transcript().await?;

    assert_eq!(
        outcome,
        TranscriptOutcome::Transcribed {
            text: "resumed".to_string(),
            playback_url: format!("{}/uploads/rec7.wav", base),
        }
    );

    Ok(())
}

#[tokio::test]
async fn network_failure_surfaces_as_error() -> Result<()> {
    // Nothing listens here; both operations must report the failure instead
    // of leaving it unobserved.
    let mut client =
        RecorderClient::with_timeout("http://127.0.0.1:9", Duration::from_secs(2))?;

    assert!(client.start_recording().await.is_err());
    assert!(client.fetch_transcript().await.is_err());

    Ok(())
}

#[tokio::test]
async fn malformed_json_surfaces_as_error() -> Result<()> {
    let router = Router::new().route("/transcribe", get(|| async { "not json" }));

    let base = spawn_server(router).await?;
    let mut client = RecorderClient::new(&base)?;

    assert!(client.fetch_transcript().await.is_err());

    Ok(())
}

#[tokio::test]
async fn error_status_surfaces_as_error() -> Result<()> {
    let router = Router::new().route(
        "/start-recording",
        post(|| async {
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "capture unavailable" })),
            )
        }),
    );

    let base = spawn_server(router).await?;
    let mut client = RecorderClient::new(&base)?;

    assert!(client.start_recording().await.is_err());

    Ok(())
}

#[tokio::test]
async fn fetch_audio_writes_the_served_bytes() -> Result<()> {
    let router = Router::new().route(
        "/uploads/rec1.wav",
        get(|| async { vec![82u8, 73, 70, 70, 0, 0, 0, 0] }),
    );

    let base = spawn_server(router).await?;
    let client = RecorderClient::new(&base)?;

    let dir = tempfile::tempdir()?;
    let dest = dir.path().join("rec1.wav");

    let written = client.fetch_audio("rec1.wav", &dest).await?;

    assert_eq!(written, 8);
    assert_eq!(std::fs::read(&dest)?, vec![82u8, 73, 70, 70, 0, 0, 0, 0]);

    Ok(())
}
