use super::*;

fn participant(peer: &str, media: &str) -> Participant {
    Participant {
        peer_id: peer.to_string(),
        media_id: media.to_string(),
        display_name: format!("{peer}/{media}"),
        audio: true,
        video: true,
    }
}

fn registry() -> ParticipantRegistry {
    let mut reg = ParticipantRegistry::new();
    reg.add(participant("alice", "a-cam"));
    reg.add(participant("alice", "a-screen"));
    reg.add(participant("bob", "b-cam"));
    reg
}

#[test]
fn update_audio_touches_only_the_target() {
    let mut reg = registry();
    let before = reg.as_slice().to_vec();
    assert!(reg.update_audio("a-screen", false));

    for (old, new) in before.iter().zip(reg.iter()) {
        if new.media_id == "a-screen" {
            assert!(!new.audio);
            assert!(new.video);
            assert_eq!(new.display_name, old.display_name);
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn update_video_on_missing_media_is_a_noop() {
    let mut reg = registry();
    let before = reg.as_slice().to_vec();
    assert!(!reg.update_video("ghost", false));
    assert_eq!(reg.as_slice(), before.as_slice());
}

#[test]
fn add_keeps_duplicates() {
    let mut reg = registry();
    reg.add(participant("bob", "b-cam"));
    assert_eq!(reg.len(), 4);
    // Flag updates reach every duplicate.
    assert!(reg.update_video("b-cam", false));
    assert!(reg.iter().filter(|p| p.media_id == "b-cam").all(|p| !p.video));
}

#[test]
fn delete_by_peer_id_removes_all_streams_of_peer() {
    let mut reg = registry();
    assert_eq!(reg.delete_by_peer_id("alice"), 2);
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.delete_by_peer_id("alice"), 0);
}

#[test]
fn delete_by_media_id_is_precise() {
    let mut reg = registry();
    assert!(reg.delete_by_media_id("a-cam"));
    assert!(!reg.delete_by_media_id("a-cam"));
    assert!(reg.get("a-screen").is_some());
    assert!(reg.get("a-cam").is_none());
}

#[test]
fn lookup_returns_record_or_default() {
    let mut reg = registry();
    reg.update_audio("b-cam", false);

    let found = reg.lookup("bob", "b-cam", "ignored", ParticipantDefaults::default());
    assert!(found.is_found());
    assert!(!found.participant().audio);
    assert_eq!(found.participant().display_name, "bob/b-cam");

    let defaults = ParticipantDefaults {
        audio: false,
        video: true,
    };
    let missing = reg.lookup("carol", "c-cam", "Carol", defaults);
    assert!(!missing.is_found());
    let owned = missing.into_owned();
    assert_eq!(owned.display_name, "Carol");
    assert!(!owned.audio);
    assert!(owned.video);
}

#[test]
fn lookup_requires_matching_peer() {
    let reg = registry();
    let res = reg.lookup("mallory", "b-cam", "M", ParticipantDefaults::default());
    assert!(!res.is_found());
}

#[test]
fn defaults_deserialize_missing_fields_as_enabled() {
    let d: ParticipantDefaults = serde_json::from_str(r#"{ "audio": false }"#).unwrap();
    assert_eq!(
        d,
        ParticipantDefaults {
            audio: false,
            video: true
        }
    );
}
