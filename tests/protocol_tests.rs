use voice_scribe::protocol::{ErrorResponse, StartRecordingResponse, TranscribeResponse};

#[test]
fn start_response_round_trips() {
    let msg = StartRecordingResponse {
        file: "rec1.wav".to_string(),
    };

    let json = serde_json::to_string(&msg).unwrap();
    assert_eq!(json, r#"{"file":"rec1.wav"}"#);

    let deserialized: StartRecordingResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.file, "rec1.wav");
}

#[test]
fn transcribe_failure_shape_is_an_empty_object() {
    let msg = TranscribeResponse { transcript: None };

    // The field is omitted entirely, matching the original service's
    // "object lacking transcript" failure shape.
    assert_eq!(serde_json::to_string(&msg).unwrap(), "{}");

    let deserialized: TranscribeResponse = serde_json::from_str("{}").unwrap();
    assert!(deserialized.transcript.is_none());
}

#[test]
fn transcribe_success_carries_the_text() {
    let json = r#"{ "transcript": "hello world" }"#;

    let deserialized: TranscribeResponse = serde_json::from_str(json).unwrap();
    assert_eq!(deserialized.transcript.as_deref(), Some("hello world"));
}

#[test]
fn unknown_fields_are_tolerated() {
    // The original backend also returned extra fields (e.g. a translation);
    // the client only depends on the ones it reads.
    let json = r#"{ "transcript": "text", "processing_time": "1.20 seconds" }"#;

    let deserialized: TranscribeResponse = serde_json::from_str(json).unwrap();
    assert_eq!(deserialized.transcript.as_deref(), Some("text"));
}

#[test]
fn error_body_round_trips() {
    let msg = ErrorResponse {
        error: "Failed to stage recording".to_string(),
    };

    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: ErrorResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.error, "Failed to stage recording");
}
