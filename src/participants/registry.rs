/// Metadata of one participant stream, independent of its tile.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Owning peer.
    pub peer_id: String,
    /// Media stream id; unique within a session by caller contract.
    pub media_id: String,
    /// Name shown on the tile.
    pub display_name: String,
    /// Microphone enabled.
    pub audio: bool,
    /// Camera enabled.
    pub video: bool,
}

/// Flags assumed for a stream that has no participant record yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParticipantDefaults {
    /// Default microphone state.
    #[serde(default = "default_true")]
    pub audio: bool,
    /// Default camera state.
    #[serde(default = "default_true")]
    pub video: bool,
}

impl Default for ParticipantDefaults {
    fn default() -> Self {
        Self {
            audio: true,
            video: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Result of [`ParticipantRegistry::lookup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParticipantLookup<'a> {
    /// A record exists for the stream.
    Found(&'a Participant),
    /// No record exists; a record built from [`ParticipantDefaults`].
    Default(Participant),
}

impl ParticipantLookup<'_> {
    /// The found or synthesized record.
    pub fn participant(&self) -> &Participant {
        match self {
            Self::Found(p) => p,
            Self::Default(p) => p,
        }
    }

    /// True when a stored record was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Take an owned copy of the record.
    pub fn into_owned(self) -> Participant {
        match self {
            Self::Found(p) => p.clone(),
            Self::Default(p) => p,
        }
    }
}

/// Participant records of one studio, in insertion order.
///
/// Mutations here never touch the layout or its geometry.
#[derive(Clone, Debug, Default)]
pub struct ParticipantRegistry {
    entries: Vec<Participant>,
}

impl ParticipantRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in insertion order.
    pub fn as_slice(&self) -> &[Participant] {
        &self.entries
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.entries.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no record exists.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First record for `media_id`.
    pub fn get(&self, media_id: &str) -> Option<&Participant> {
        self.entries.iter().find(|p| p.media_id == media_id)
    }

    /// Append a record. Uniqueness by `media_id` is the caller's responsibility.
    pub fn add(&mut self, participant: Participant) {
        if self.get(&participant.media_id).is_some() {
            tracing::debug!(
                media_id = %participant.media_id,
                "participant media id already registered; appending anyway"
            );
        }
        self.entries.push(participant);
    }

    /// Set the audio flag of the records for `media_id`. Returns whether any matched.
    pub fn update_audio(&mut self, media_id: &str, audio: bool) -> bool {
        self.update(media_id, |p| p.audio = audio)
    }

    /// Set the video flag of the records for `media_id`. Returns whether any matched.
    pub fn update_video(&mut self, media_id: &str, video: bool) -> bool {
        self.update(media_id, |p| p.video = video)
    }

    /// Remove every record of `peer_id`. Returns how many were removed.
    pub fn delete_by_peer_id(&mut self, peer_id: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|p| p.peer_id != peer_id);
        before - self.entries.len()
    }

    /// Remove the record(s) for `media_id`. Returns whether any were removed.
    pub fn delete_by_media_id(&mut self, media_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p.media_id != media_id);
        self.entries.len() != before
    }

    /// Find the record for a displayed stream, or build one from `defaults`.
    pub fn lookup<'a>(
        &'a self,
        peer_id: &str,
        media_id: &str,
        display_name: &str,
        defaults: ParticipantDefaults,
    ) -> ParticipantLookup<'a> {
        match self
            .entries
            .iter()
            .find(|p| p.peer_id == peer_id && p.media_id == media_id)
        {
            Some(p) => ParticipantLookup::Found(p),
            None => ParticipantLookup::Default(Participant {
                peer_id: peer_id.to_string(),
                media_id: media_id.to_string(),
                display_name: display_name.to_string(),
                audio: defaults.audio,
                video: defaults.video,
            }),
        }
    }

    fn update(&mut self, media_id: &str, mut apply: impl FnMut(&mut Participant)) -> bool {
        let mut matched = false;
        for p in self.entries.iter_mut().filter(|p| p.media_id == media_id) {
            apply(p);
            matched = true;
        }
        if !matched {
            tracing::trace!(media_id, "no participant to update");
        }
        matched
    }
}

#[cfg(test)]
#[path = "../../tests/unit/participants/registry.rs"]
mod tests;
