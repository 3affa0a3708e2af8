use super::*;
use crate::foundation::core::TileGeometry;

fn studio() -> Studio {
    Studio::new(Canvas::default()).unwrap()
}

fn key(peer: &str, media: &str) -> MediaKey {
    MediaKey::new(peer, media, format!("{media}-a"), format!("{media}-v"))
}

fn participant(peer: &str, media: &str) -> Participant {
    Participant {
        peer_id: peer.to_string(),
        media_id: media.to_string(),
        display_name: peer.to_uppercase(),
        audio: true,
        video: true,
    }
}

#[test]
fn new_studio_starts_empty_on_main_only() {
    let s = studio();
    assert_eq!((s.width(), s.height()), (1920, 1080));
    assert_eq!(s.pattern_id(), 0);
    assert!(s.layout().is_empty());
    assert!(s.participants().is_empty());
    assert_eq!(s.cover_url(), "");
    assert_eq!(s.background_url(), "");
    assert_eq!(s.patterns().len(), 7);
}

#[test]
fn zero_canvas_is_rejected() {
    let err = Studio::new(Canvas {
        width: 0,
        height: 0,
    })
    .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn oversized_canvas_is_rejected_before_any_layout_work() {
    let err = Studio::new(Canvas {
        width: 4_000_000_000,
        height: 4_000_000_000,
    })
    .unwrap_err();
    assert!(err.is_invalid_argument());

    let mut studio = Studio::new(Canvas {
        width: Canvas::MAX_DIMENSION,
        height: Canvas::MAX_DIMENSION,
    })
    .unwrap();
    studio.set_pattern_id(6).unwrap();
    assert!(studio.add_media(MediaKey::new("p", "m", "a", "v"), 1280, 720));
    assert!(studio.layout()[0].geometry().is_visible());
}

#[test]
fn pattern_switch_recomputes_immediately() {
    let mut s = studio();
    for i in 0..4 {
        s.add_media(key("p", &format!("m{i}")), 1280, 720);
    }
    assert_eq!(s.layout()[1].geometry(), TileGeometry::HIDDEN);

    s.set_pattern_id(1).unwrap();
    let positions: Vec<(i32, i32)> = s
        .layout()
        .iter()
        .map(|i| (i.geometry().pos_x, i.geometry().pos_y))
        .collect();
    assert_eq!(positions, vec![(0, 0), (960, 0), (0, 540), (960, 540)]);
}

#[test]
fn invalid_pattern_id_leaves_state_untouched() {
    let mut s = studio();
    s.add_media(key("p", "m0"), 1280, 720);
    s.set_pattern_id(3).unwrap();
    let before = s.snapshot();
    assert!(s.set_pattern_id(7).unwrap_err().is_invalid_argument());
    assert_eq!(s.snapshot(), before);
}

#[test]
fn participant_updates_never_touch_layout() {
    let mut s = studio();
    s.set_pattern_id(1).unwrap();
    s.add_media(key("alice", "a"), 1280, 720);
    s.add_media(key("bob", "b"), 1280, 720);
    s.add_participant(participant("alice", "a"));
    s.add_participant(participant("bob", "b"));
    let layout_before = s.layout().to_vec();

    assert!(s.update_participant_audio("a", false));
    assert!(!s.participants()[0].audio);
    assert!(s.participants()[1].audio);
    assert!(s.update_participant_video("b", false));
    assert!(!s.participants()[1].video);
    assert!(s.participants()[0].video);
    assert_eq!(s.layout(), layout_before.as_slice());

    assert_eq!(s.delete_participants_by_peer_id("alice"), 1);
    assert!(s.delete_participant_by_media_id("b"));
    assert!(s.participants().is_empty());
    assert_eq!(s.layout(), layout_before.as_slice());
}

#[test]
fn toggle_media_adds_then_removes() {
    let mut s = studio();
    assert!(s.toggle_media(key("p", "m"), 640, 480));
    assert_eq!(s.layout_index_of(&key("p", "m")), Some(0));
    assert!(!s.toggle_media(key("p", "m"), 640, 480));
    assert!(s.layout().is_empty());
}

#[test]
fn delete_peer_drops_tiles_but_keeps_participants() {
    let mut s = studio();
    s.add_media(key("alice", "a1"), 1280, 720);
    s.add_media(key("alice", "a2"), 1280, 720);
    s.add_media(key("bob", "b1"), 1280, 720);
    s.add_participant(participant("alice", "a1"));

    assert_eq!(s.delete_peer("alice"), 2);
    assert_eq!(s.layout().len(), 1);
    assert_eq!(s.layout()[0].geometry().width, 1920);
    assert_eq!(s.participants().len(), 1);
}

#[test]
fn participant_or_default_uses_studio_defaults() {
    let mut cfg = StudioConfig::with_canvas(Canvas::default());
    cfg.participant_defaults = ParticipantDefaults {
        audio: false,
        video: false,
    };
    let mut s = Studio::from_config(&cfg).unwrap();
    let fallback = s.participant_or_default("p", "m", "Guest");
    assert_eq!(fallback.display_name, "Guest");
    assert!(!fallback.audio && !fallback.video);

    s.add_participant(participant("p", "m"));
    let found = s.participant_or_default("p", "m", "Guest");
    assert_eq!(found.display_name, "P");
    assert!(found.audio);
}

#[test]
fn from_config_applies_initial_fields() {
    let cfg = StudioConfig {
        canvas: Canvas::new(1280, 720).unwrap(),
        pattern_id: 4,
        cover_url: "cover.png".to_string(),
        background_url: "bg.png".to_string(),
        participant_defaults: ParticipantDefaults::default(),
    };
    let mut s = Studio::from_config(&cfg).unwrap();
    assert_eq!(s.pattern(), PatternKind::VerticalMain);
    assert_eq!(s.cover_url(), "cover.png");
    assert_eq!(s.background_url(), "bg.png");

    s.add_media(key("p", "m"), 1280, 720);
    // floor(720 * 9 / 16) = 405, centered in 1280.
    assert_eq!(
        s.layout()[0].geometry(),
        TileGeometry::from_px(437, 0, 405, 720)
    );
}

#[test]
fn url_setters_report_change() {
    let mut s = studio();
    assert!(s.set_cover_url("a.png"));
    assert!(!s.set_cover_url("a.png"));
    assert!(s.set_background_url("b.png"));
    assert_eq!(s.cover_url(), "a.png");
    assert_eq!(s.background_url(), "b.png");
}

#[test]
fn snapshot_serializes_client_view() {
    let mut s = studio();
    s.add_media(key("p", "m"), 1280, 720);
    s.add_participant(participant("p", "m"));
    s.set_cover_url("cover.png");

    let json = serde_json::to_value(s.snapshot()).unwrap();
    assert_eq!(json["width"], 1920);
    assert_eq!(json["patternId"], 0);
    assert_eq!(json["patterns"][3]["label"], "p-in-p");
    assert_eq!(json["patterns"][6]["type"], "vertical");
    assert_eq!(json["layout"][0]["mediaId"], "m");
    assert_eq!(json["layout"][0]["height"], 1080);
    assert_eq!(json["participants"][0]["displayName"], "P");
    assert_eq!(json["coverUrl"], "cover.png");
    assert_eq!(json["backgroundUrl"], "");
    assert!(json.get("pattern_id").is_none());
}
