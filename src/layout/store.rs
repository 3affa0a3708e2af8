use crate::{
    foundation::core::{Canvas, TileGeometry},
    foundation::error::{StudioError, StudioResult},
    patterns::catalog::PatternKind,
    patterns::geometry::compute_geometry,
};

/// Identity of one tile: a peer's media stream and the producers feeding it.
///
/// Two tiles are the same iff all four fields match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaKey {
    /// Owning peer.
    pub peer_id: String,
    /// Media stream id within the session.
    pub media_id: String,
    /// Audio producer feeding the tile.
    pub audio_producer_id: String,
    /// Video producer feeding the tile.
    pub video_producer_id: String,
}

impl MediaKey {
    /// Build a key from its four parts.
    pub fn new(
        peer_id: impl Into<String>,
        media_id: impl Into<String>,
        audio_producer_id: impl Into<String>,
        video_producer_id: impl Into<String>,
    ) -> Self {
        Self {
            peer_id: peer_id.into(),
            media_id: media_id.into(),
            audio_producer_id: audio_producer_id.into(),
            video_producer_id: video_producer_id.into(),
        }
    }
}

/// One tile of the composed canvas.
///
/// `geometry` is derived state: only the owning [`LayoutStore`] writes it, on every recompute.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutItem {
    #[serde(flatten)]
    key: MediaKey,
    video_width: u32,
    video_height: u32,
    #[serde(flatten)]
    geometry: TileGeometry,
}

impl LayoutItem {
    fn new(key: MediaKey, video_width: u32, video_height: u32) -> Self {
        Self {
            key,
            video_width,
            video_height,
            geometry: TileGeometry::HIDDEN,
        }
    }

    /// Tile identity.
    pub fn key(&self) -> &MediaKey {
        &self.key
    }

    /// Source video size as reported by the producer.
    pub fn video_size(&self) -> (u32, u32) {
        (self.video_width, self.video_height)
    }

    /// Placement from the last recompute.
    pub fn geometry(&self) -> TileGeometry {
        self.geometry
    }
}

/// Ordered tiles of one studio plus the pattern that places them.
///
/// Index 0 is the hero tile. Every structural or pattern change recomputes geometry before
/// returning, so [`LayoutStore::items`] always reflects the latest mutation.
#[derive(Clone, Debug)]
pub struct LayoutStore {
    canvas: Canvas,
    pattern: PatternKind,
    items: Vec<LayoutItem>,
}

impl LayoutStore {
    /// Empty store placing tiles on `canvas` with [`PatternKind::MainOnly`].
    pub fn new(canvas: Canvas) -> Self {
        Self::with_pattern(canvas, PatternKind::default())
    }

    /// Empty store with an explicit starting pattern.
    pub fn with_pattern(canvas: Canvas, pattern: PatternKind) -> Self {
        Self {
            canvas,
            pattern,
            items: Vec::new(),
        }
    }

    /// Tiles in display order.
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    /// Number of tiles, visible or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no tile is present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Active pattern.
    pub fn pattern(&self) -> PatternKind {
        self.pattern
    }

    /// Canvas the tiles are placed on.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Current index of the tile with identity `key`.
    pub fn position_of(&self, key: &MediaKey) -> Option<usize> {
        self.items.iter().position(|item| item.key == *key)
    }

    /// True when a tile with identity `key` is present.
    pub fn contains(&self, key: &MediaKey) -> bool {
        self.position_of(key).is_some()
    }

    /// Append a tile unless one with the same identity exists. Returns whether it was added.
    pub fn add_media(&mut self, key: MediaKey, video_width: u32, video_height: u32) -> bool {
        if self.contains(&key) {
            tracing::trace!(media_id = %key.media_id, "media already in layout");
            return false;
        }
        self.items.push(LayoutItem::new(key, video_width, video_height));
        self.recompute();
        true
    }

    /// Remove the tile with identity `key`. Returns whether a tile was removed.
    pub fn delete_media(&mut self, key: &MediaKey) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.key != *key);
        let removed = self.items.len() != before;
        self.recompute();
        removed
    }

    /// Move the tile at `index` to the hero slot, keeping the others in order.
    pub fn to_main(&mut self, index: usize) -> StudioResult<()> {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "to_main index out of range");
            return Err(StudioError::invalid_argument(format!(
                "layout index {index} is out of range (len {})",
                self.items.len()
            )));
        }
        self.items[..=index].rotate_right(1);
        self.recompute();
        Ok(())
    }

    /// Remove every tile owned by `peer_id`. Returns how many were removed.
    pub fn delete_peer(&mut self, peer_id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.key.peer_id != peer_id);
        let removed = before - self.items.len();
        self.recompute();
        removed
    }

    /// Switch pattern and recompute immediately. Membership and order are untouched.
    pub fn set_pattern(&mut self, pattern: PatternKind) {
        self.pattern = pattern;
        self.recompute();
    }

    /// Rewrite every tile's geometry from the active pattern. No-op on an empty layout.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn recompute(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let placements = compute_geometry(self.pattern, self.canvas, self.items.len());
        debug_assert_eq!(placements.len(), self.items.len());
        for (item, geometry) in self.items.iter_mut().zip(placements) {
            item.geometry = geometry;
        }
        tracing::debug!(
            pattern = %self.pattern,
            tiles = self.items.len(),
            visible = self.items.iter().filter(|i| i.geometry.is_visible()).count(),
            "layout recomputed"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/store.rs"]
mod tests;
