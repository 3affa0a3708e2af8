use crate::{
    foundation::core::Canvas,
    foundation::error::StudioResult,
    layout::store::{LayoutItem, LayoutStore, MediaKey},
    participants::registry::{Participant, ParticipantDefaults, ParticipantRegistry},
    patterns::catalog::{PATTERNS, PatternDescriptor, PatternKind},
    studio::config::StudioConfig,
    studio::snapshot::StudioSnapshot,
};

/// The layout engine of one live room.
///
/// A studio owns its tile layout and participant records exclusively; every change goes
/// through the methods below. Methods take `&mut self`, so calls are serialized by
/// construction and each one finishes its geometry recompute before returning.
#[derive(Clone, Debug)]
pub struct Studio {
    layout: LayoutStore,
    participants: ParticipantRegistry,
    participant_defaults: ParticipantDefaults,
    cover_url: String,
    background_url: String,
}

impl Studio {
    /// New studio on `canvas` with the main-only pattern and nothing in it.
    pub fn new(canvas: Canvas) -> StudioResult<Self> {
        canvas.validate()?;
        tracing::info!(width = canvas.width, height = canvas.height, "studio created");
        Ok(Self {
            layout: LayoutStore::new(canvas),
            participants: ParticipantRegistry::new(),
            participant_defaults: ParticipantDefaults::default(),
            cover_url: String::new(),
            background_url: String::new(),
        })
    }

    /// New studio from a validated config.
    pub fn from_config(config: &StudioConfig) -> StudioResult<Self> {
        config.validate()?;
        let mut studio = Self::new(config.canvas)?;
        studio.layout.set_pattern(config.pattern()?);
        studio.participant_defaults = config.participant_defaults;
        studio.cover_url.clone_from(&config.cover_url);
        studio.background_url.clone_from(&config.background_url);
        Ok(studio)
    }

    /// Canvas width.
    pub fn width(&self) -> u32 {
        self.layout.canvas().width
    }

    /// Canvas height.
    pub fn height(&self) -> u32 {
        self.layout.canvas().height
    }

    /// Canvas dimensions.
    pub fn canvas(&self) -> Canvas {
        self.layout.canvas()
    }

    /// Tiles in display order; index 0 is the hero.
    pub fn layout(&self) -> &[LayoutItem] {
        self.layout.items()
    }

    /// Participant records in insertion order.
    pub fn participants(&self) -> &[Participant] {
        self.participants.as_slice()
    }

    /// Active pattern id.
    pub fn pattern_id(&self) -> u8 {
        self.layout.pattern().id()
    }

    /// Active pattern.
    pub fn pattern(&self) -> PatternKind {
        self.layout.pattern()
    }

    /// Static pattern catalog.
    pub fn patterns(&self) -> &'static [PatternDescriptor] {
        &PATTERNS
    }

    /// Cover image URL.
    pub fn cover_url(&self) -> &str {
        &self.cover_url
    }

    /// Background image URL.
    pub fn background_url(&self) -> &str {
        &self.background_url
    }

    /// Defaults used for streams with no participant record.
    pub fn participant_defaults(&self) -> ParticipantDefaults {
        self.participant_defaults
    }

    /// Add a tile unless one with the same identity is present. Returns whether it was added.
    pub fn add_media(&mut self, key: MediaKey, video_width: u32, video_height: u32) -> bool {
        self.layout.add_media(key, video_width, video_height)
    }

    /// Remove the tile with exactly this identity. Returns whether one was removed.
    pub fn delete_media(&mut self, key: &MediaKey) -> bool {
        self.layout.delete_media(key)
    }

    /// Add the tile if absent, remove it if present. Returns whether it is now in the layout.
    pub fn toggle_media(&mut self, key: MediaKey, video_width: u32, video_height: u32) -> bool {
        if self.layout.contains(&key) {
            self.layout.delete_media(&key);
            false
        } else {
            self.layout.add_media(key, video_width, video_height)
        }
    }

    /// Promote the tile at `index` to hero. Fails when `index` is out of range.
    pub fn to_main(&mut self, index: usize) -> StudioResult<()> {
        self.layout.to_main(index)
    }

    /// Remove every tile of `peer_id`. Returns how many were removed.
    pub fn delete_peer(&mut self, peer_id: &str) -> usize {
        self.layout.delete_peer(peer_id)
    }

    /// Index of the tile with identity `key`, if shown.
    pub fn layout_index_of(&self, key: &MediaKey) -> Option<usize> {
        self.layout.position_of(key)
    }

    /// Switch to pattern `id` (0..=6) and recompute immediately.
    pub fn set_pattern_id(&mut self, id: u8) -> StudioResult<()> {
        let pattern = PatternKind::from_id(id).inspect_err(|_| {
            tracing::warn!(pattern_id = id, "rejected unknown pattern id");
        })?;
        self.set_pattern(pattern);
        Ok(())
    }

    /// Switch to `pattern` and recompute immediately.
    pub fn set_pattern(&mut self, pattern: PatternKind) {
        tracing::info!(from = %self.layout.pattern(), to = %pattern, "pattern switched");
        self.layout.set_pattern(pattern);
    }

    /// Force a geometry recompute with the current pattern.
    pub fn recalculate(&mut self) {
        self.layout.recompute();
    }

    /// Register a participant. No duplicate check is made on `media_id`.
    pub fn add_participant(&mut self, participant: Participant) {
        self.participants.add(participant);
    }

    /// Set the audio flag of `media_id`. Returns whether a record matched.
    pub fn update_participant_audio(&mut self, media_id: &str, audio: bool) -> bool {
        self.participants.update_audio(media_id, audio)
    }

    /// Set the video flag of `media_id`. Returns whether a record matched.
    pub fn update_participant_video(&mut self, media_id: &str, video: bool) -> bool {
        self.participants.update_video(media_id, video)
    }

    /// Remove every participant record of `peer_id`. Returns how many were removed.
    pub fn delete_participants_by_peer_id(&mut self, peer_id: &str) -> usize {
        self.participants.delete_by_peer_id(peer_id)
    }

    /// Remove the participant record of `media_id`. Returns whether one was removed.
    pub fn delete_participant_by_media_id(&mut self, media_id: &str) -> bool {
        self.participants.delete_by_media_id(media_id)
    }

    /// Participant record for a displayed stream, falling back to the studio defaults.
    pub fn participant_or_default(
        &self,
        peer_id: &str,
        media_id: &str,
        display_name: &str,
    ) -> Participant {
        self.participants
            .lookup(peer_id, media_id, display_name, self.participant_defaults)
            .into_owned()
    }

    /// Set the cover image URL. Returns whether it changed.
    pub fn set_cover_url(&mut self, url: impl Into<String>) -> bool {
        replace_if_changed(&mut self.cover_url, url.into())
    }

    /// Set the background image URL. Returns whether it changed.
    pub fn set_background_url(&mut self, url: impl Into<String>) -> bool {
        replace_if_changed(&mut self.background_url, url.into())
    }

    /// Capture the current state for broadcast.
    pub fn snapshot(&self) -> StudioSnapshot {
        StudioSnapshot {
            width: self.width(),
            height: self.height(),
            pattern_id: self.pattern_id(),
            patterns: PATTERNS.to_vec(),
            cover_url: self.cover_url.clone(),
            background_url: self.background_url.clone(),
            layout: self.layout.items().to_vec(),
            participants: self.participants.as_slice().to_vec(),
        }
    }
}

fn replace_if_changed(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
#[path = "../../tests/unit/studio/session.rs"]
mod tests;
