//! Serializable commands a session owner issues against a [`Studio`].
//!
//! The room layer receives signaling events (stream published, peer left, mic toggled, ...)
//! and turns them into [`StudioCommand`] values. Applying them in order is the only way the
//! engine state changes, which makes a session reproducible from its command log.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{StudioError, StudioResult},
    layout::store::MediaKey,
    participants::registry::Participant,
    studio::config::StudioConfig,
    studio::session::Studio,
};

/// One mutation of a studio.
///
/// On the wire the `op` tag is snake_case and the fields are camelCase, matching the
/// snapshot: `{"op": "delete_peer", "peerId": "p1"}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum StudioCommand {
    /// Add a tile (no-op if present).
    AddMedia {
        /// Tile identity.
        #[serde(flatten)]
        key: MediaKey,
        /// Source width.
        #[serde(default)]
        video_width: u32,
        /// Source height.
        #[serde(default)]
        video_height: u32,
    },
    /// Remove a tile by full identity.
    DeleteMedia {
        /// Tile identity.
        #[serde(flatten)]
        key: MediaKey,
    },
    /// Add the tile if absent, remove it otherwise.
    ToggleMedia {
        /// Tile identity.
        #[serde(flatten)]
        key: MediaKey,
        /// Source width.
        #[serde(default)]
        video_width: u32,
        /// Source height.
        #[serde(default)]
        video_height: u32,
    },
    /// Promote the tile at `index` to hero.
    ToMain {
        /// Current layout index.
        index: usize,
    },
    /// Remove every tile of a peer.
    DeletePeer {
        /// Peer to remove.
        peer_id: String,
    },
    /// Switch pattern.
    SetPatternId {
        /// Pattern id (0..=6).
        pattern_id: u8,
    },
    /// Register a participant.
    AddParticipant(Participant),
    /// Set a participant's audio flag.
    UpdateParticipantAudio {
        /// Target stream.
        media_id: String,
        /// New flag.
        audio: bool,
    },
    /// Set a participant's video flag.
    UpdateParticipantVideo {
        /// Target stream.
        media_id: String,
        /// New flag.
        video: bool,
    },
    /// Remove every participant record of a peer.
    DeleteParticipantsByPeerId {
        /// Peer to remove.
        peer_id: String,
    },
    /// Remove one participant record.
    DeleteParticipantByMediaId {
        /// Stream to remove.
        media_id: String,
    },
    /// Set the cover image URL.
    SetCoverUrl {
        /// New URL.
        url: String,
    },
    /// Set the background image URL.
    SetBackgroundUrl {
        /// New URL.
        url: String,
    },
}

impl Studio {
    /// Apply one command. `Ok(true)` when state changed, `Ok(false)` for a no-op.
    ///
    /// Only caller-contract violations (bad index, unknown pattern id) are errors.
    pub fn apply(&mut self, cmd: &StudioCommand) -> StudioResult<bool> {
        let changed = match cmd {
            StudioCommand::AddMedia {
                key,
                video_width,
                video_height,
            } => self.add_media(key.clone(), *video_width, *video_height),
            StudioCommand::DeleteMedia { key } => self.delete_media(key),
            StudioCommand::ToggleMedia {
                key,
                video_width,
                video_height,
            } => {
                self.toggle_media(key.clone(), *video_width, *video_height);
                true
            }
            StudioCommand::ToMain { index } => {
                self.to_main(*index)?;
                true
            }
            StudioCommand::DeletePeer { peer_id } => self.delete_peer(peer_id) > 0,
            StudioCommand::SetPatternId { pattern_id } => {
                let changed = self.pattern_id() != *pattern_id;
                self.set_pattern_id(*pattern_id)?;
                changed
            }
            StudioCommand::AddParticipant(p) => {
                self.add_participant(p.clone());
                true
            }
            StudioCommand::UpdateParticipantAudio { media_id, audio } => {
                self.update_participant_audio(media_id, *audio)
            }
            StudioCommand::UpdateParticipantVideo { media_id, video } => {
                self.update_participant_video(media_id, *video)
            }
            StudioCommand::DeleteParticipantsByPeerId { peer_id } => {
                self.delete_participants_by_peer_id(peer_id) > 0
            }
            StudioCommand::DeleteParticipantByMediaId { media_id } => {
                self.delete_participant_by_media_id(media_id)
            }
            StudioCommand::SetCoverUrl { url } => self.set_cover_url(url.as_str()),
            StudioCommand::SetBackgroundUrl { url } => self.set_background_url(url.as_str()),
        };
        if !changed {
            tracing::debug!(?cmd, "command was a no-op");
        }
        Ok(changed)
    }
}

/// A studio config plus an ordered command log.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CommandScript {
    /// Session settings.
    #[serde(default)]
    pub config: StudioConfig,
    /// Commands applied in order.
    #[serde(default)]
    pub commands: Vec<StudioCommand>,
}

/// Outcome of [`CommandScript::run`].
#[derive(Debug)]
pub struct ScriptReport {
    /// Final studio state.
    pub studio: Studio,
    /// Number of commands that changed state.
    pub applied: usize,
    /// Number of commands that were no-ops.
    pub noops: usize,
}

impl CommandScript {
    /// Parse a script from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StudioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StudioError::serde(format!("parse command script JSON: {e}")))
    }

    /// Parse a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StudioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open command script '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Build a studio from `config` and apply every command, stopping at the first failure.
    #[tracing::instrument(skip(self), fields(commands = self.commands.len()))]
    pub fn run(&self) -> StudioResult<ScriptReport> {
        let mut studio = Studio::from_config(&self.config)?;
        let (mut applied, mut noops) = (0, 0);
        for (step, cmd) in self.commands.iter().enumerate() {
            if studio.apply(cmd).map_err(|e| e.at_step(step))? {
                applied += 1;
            } else {
                noops += 1;
            }
        }
        tracing::info!(applied, noops, "command script finished");
        Ok(ScriptReport {
            studio,
            applied,
            noops,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/studio/command.rs"]
mod tests;
