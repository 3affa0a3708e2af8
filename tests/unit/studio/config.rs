use super::*;

#[test]
fn minimal_json_fills_defaults() {
    let cfg = StudioConfig::from_reader(
        r#"{ "canvas": { "width": 1280, "height": 720 } }"#.as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.canvas, Canvas::new(1280, 720).unwrap());
    assert_eq!(cfg.pattern_id, 0);
    assert!(cfg.cover_url.is_empty());
    assert!(cfg.background_url.is_empty());
    assert_eq!(cfg.participant_defaults, ParticipantDefaults::default());
    cfg.validate().unwrap();
}

#[test]
fn full_json_round_trips() {
    let json = r#"{
        "canvas": { "width": 1920, "height": 1080 },
        "patternId": 5,
        "coverUrl": "https://cdn.example/cover.png",
        "backgroundUrl": "https://cdn.example/bg.png",
        "participantDefaults": { "audio": false, "video": true }
    }"#;
    let cfg = StudioConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.pattern().unwrap(), PatternKind::VerticalTile);
    let back: StudioConfig =
        serde_json::from_str(&serde_json::to_string(&cfg).unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn validate_rejects_bad_values() {
    let mut cfg = StudioConfig::with_canvas(Canvas {
        width: 0,
        height: 720,
    });
    assert!(matches!(cfg.validate(), Err(StudioError::Validation(_))));

    cfg.canvas = Canvas::default();
    cfg.pattern_id = 7;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("patternId"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = StudioConfig::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(matches!(err, StudioError::Serde(_)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = StudioConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
    let StudioError::Other(inner) = &err else {
        panic!("expected an I/O failure, got {err:?}");
    };
    let io = inner.downcast_ref::<std::io::Error>().unwrap();
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
}
