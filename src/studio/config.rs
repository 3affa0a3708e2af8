use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::core::Canvas,
    foundation::error::{StudioError, StudioResult},
    participants::registry::ParticipantDefaults,
    patterns::catalog::PatternKind,
};

/// Session-level settings a studio is created from.
///
/// Only `canvas` is required in JSON; everything else falls back to the same defaults as
/// [`crate::Studio::new`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioConfig {
    /// Output canvas, fixed for the session.
    pub canvas: Canvas,
    /// Initial pattern id.
    #[serde(default)]
    pub pattern_id: u8,
    /// Initial cover image URL.
    #[serde(default)]
    pub cover_url: String,
    /// Initial background image URL.
    #[serde(default)]
    pub background_url: String,
    /// Flags assumed for streams without a participant record.
    #[serde(default)]
    pub participant_defaults: ParticipantDefaults,
}

impl StudioConfig {
    /// Config for `canvas` with every other field defaulted.
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StudioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StudioError::serde(format!("parse studio config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StudioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open studio config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check canvas size and pattern id.
    pub fn validate(&self) -> StudioResult<()> {
        self.canvas
            .validate()
            .map_err(|e| StudioError::validation(format!("config canvas: {e}")))?;
        PatternKind::from_id(self.pattern_id)
            .map_err(|e| StudioError::validation(format!("config patternId: {e}")))?;
        Ok(())
    }

    /// Validated initial pattern.
    pub fn pattern(&self) -> StudioResult<PatternKind> {
        PatternKind::from_id(self.pattern_id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/studio/config.rs"]
mod tests;
