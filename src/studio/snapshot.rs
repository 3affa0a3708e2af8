use crate::{
    layout::store::LayoutItem, participants::registry::Participant,
    patterns::catalog::PatternDescriptor,
};

/// Read-only view of a studio for broadcast to clients.
///
/// Field names are camelCase on the wire (`patternId`, `coverUrl`, tile `posX`/`peerId`),
/// the names browser clients read.
///
/// Captured by [`crate::Studio::snapshot`]; geometry reflects the last mutation applied.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioSnapshot {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Active pattern id.
    pub pattern_id: u8,
    /// Pattern catalog.
    pub patterns: Vec<PatternDescriptor>,
    /// Cover image URL.
    pub cover_url: String,
    /// Background image URL.
    pub background_url: String,
    /// Tiles in display order with geometry.
    pub layout: Vec<LayoutItem>,
    /// Participant records.
    pub participants: Vec<Participant>,
}

impl StudioSnapshot {
    /// Encode as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> crate::StudioResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::StudioError::serde(format!("encode studio snapshot: {e}")))
    }
}
