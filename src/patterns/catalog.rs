use crate::foundation::core::Orientation;
use crate::foundation::error::{StudioError, StudioResult};

/// One of the seven tiling strategies a studio can use.
///
/// The discriminant is the wire-level pattern id (`0..=6`).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum PatternKind {
    /// Hero fills the canvas; everything else hidden.
    #[default]
    MainOnly = 0,
    /// Square-ish grid of equal cells.
    Tile = 1,
    /// Large hero on the left, column of six small tiles on the right.
    LargeAndSmall = 2,
    /// Hero fills the canvas, up to five thumbnails along the bottom edge.
    PictureInPicture = 3,
    /// Hero cropped to 9:16 and centered.
    VerticalMain = 4,
    /// Grid inside a centered 9:16 sub-canvas.
    VerticalTile = 5,
    /// Portrait hero with four corner thumbnails.
    VerticalPictureInPicture = 6,
}

/// Static description of a pattern, as exposed to clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PatternDescriptor {
    /// Pattern id.
    pub id: u8,
    /// Human-readable label.
    pub label: &'static str,
    /// Target orientation, serialized as `"type"`.
    #[serde(rename = "type")]
    pub orientation: Orientation,
}

/// The full pattern catalog, indexed by pattern id.
pub const PATTERNS: [PatternDescriptor; 7] = [
    PatternKind::MainOnly.descriptor(),
    PatternKind::Tile.descriptor(),
    PatternKind::LargeAndSmall.descriptor(),
    PatternKind::PictureInPicture.descriptor(),
    PatternKind::VerticalMain.descriptor(),
    PatternKind::VerticalTile.descriptor(),
    PatternKind::VerticalPictureInPicture.descriptor(),
];

impl PatternKind {
    /// Every pattern in id order.
    pub const ALL: [Self; 7] = [
        Self::MainOnly,
        Self::Tile,
        Self::LargeAndSmall,
        Self::PictureInPicture,
        Self::VerticalMain,
        Self::VerticalTile,
        Self::VerticalPictureInPicture,
    ];

    /// Resolve a raw pattern id; ids outside `0..=6` are an invalid argument.
    pub fn from_id(id: u8) -> StudioResult<Self> {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .ok_or_else(|| {
                StudioError::invalid_argument(format!(
                    "pattern id {id} is out of range 0..={}",
                    Self::ALL.len() - 1
                ))
            })
    }

    /// Raw pattern id.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Label shown to operators.
    pub const fn label(self) -> &'static str {
        match self {
            Self::MainOnly => "main only",
            Self::Tile => "tile",
            Self::LargeAndSmall => "large and small",
            Self::PictureInPicture => "p-in-p",
            Self::VerticalMain => "vertical-main",
            Self::VerticalTile => "vertical-tile",
            Self::VerticalPictureInPicture => "vertical-p-in-p",
        }
    }

    /// Output orientation the pattern is designed for.
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::MainOnly | Self::Tile | Self::LargeAndSmall | Self::PictureInPicture => {
                Orientation::Horizontal
            }
            Self::VerticalMain | Self::VerticalTile | Self::VerticalPictureInPicture => {
                Orientation::Vertical
            }
        }
    }

    /// Maximum number of visible tiles, or `None` when every tile gets a cell.
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Self::MainOnly | Self::VerticalMain => Some(1),
            Self::Tile | Self::VerticalTile => None,
            Self::LargeAndSmall => Some(7),
            Self::PictureInPicture => Some(6),
            Self::VerticalPictureInPicture => Some(5),
        }
    }

    /// Catalog entry for this pattern.
    pub const fn descriptor(self) -> PatternDescriptor {
        PatternDescriptor {
            id: self.id(),
            label: self.label(),
            orientation: self.orientation(),
        }
    }
}

impl TryFrom<u8> for PatternKind {
    type Error = StudioError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_id(value)
    }
}

impl From<PatternKind> for u8 {
    fn from(value: PatternKind) -> Self {
        value.id()
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.id())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/catalog.rs"]
mod tests;
