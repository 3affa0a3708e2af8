use crate::foundation::error::{StudioError, StudioResult};

pub use kurbo::Rect;

/// Output canvas dimensions in pixels. Fixed for the lifetime of a studio session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
}

impl Canvas {
    /// Largest accepted width or height. Keeps products of two dimensions well inside `i64`
    /// and every position inside `i32`.
    pub const MAX_DIMENSION: u32 = 65_535;

    /// Build a canvas, rejecting zero-sized or oversized dimensions.
    pub fn new(width: u32, height: u32) -> StudioResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check that both dimensions are in `1..=MAX_DIMENSION`.
    pub fn validate(self) -> StudioResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(StudioError::invalid_argument(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > Self::MAX_DIMENSION || self.height > Self::MAX_DIMENSION {
            return Err(StudioError::invalid_argument(format!(
                "canvas must be at most {max}x{max}, got {}x{}",
                self.width,
                self.height,
                max = Self::MAX_DIMENSION
            )));
        }
        Ok(())
    }

    pub(crate) fn w(self) -> i64 {
        i64::from(self.width)
    }

    pub(crate) fn h(self) -> i64 {
        i64::from(self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Whether a pattern targets a landscape or a portrait (9:16) output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Landscape output.
    Horizontal,
    /// Portrait output centered inside the canvas.
    Vertical,
}

/// Pixel placement of one tile on the canvas.
///
/// Tiles beyond a pattern's capacity are [`TileGeometry::HIDDEN`]: they stay in the layout
/// but occupy no pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileGeometry {
    /// Left edge.
    pub pos_x: i32,
    /// Top edge.
    pub pos_y: i32,
    /// Tile width.
    pub width: u32,
    /// Tile height.
    pub height: u32,
}

impl TileGeometry {
    /// Zero-sized placement for tiles a pattern does not show.
    pub const HIDDEN: Self = Self {
        pos_x: 0,
        pos_y: 0,
        width: 0,
        height: 0,
    };

    /// Build a placement from intermediate `i64` pixel math, saturating at the target types.
    pub(crate) fn from_px(pos_x: i64, pos_y: i64, width: i64, height: i64) -> Self {
        Self {
            pos_x: to_i32(pos_x),
            pos_y: to_i32(pos_y),
            width: to_u32(width),
            height: to_u32(height),
        }
    }

    /// True when the tile occupies at least one pixel.
    pub fn is_visible(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Rectangle in canvas coordinates, for compositors working in `kurbo` space.
    pub fn to_rect(self) -> Rect {
        let x0 = f64::from(self.pos_x);
        let y0 = f64::from(self.pos_y);
        Rect::new(
            x0,
            y0,
            x0 + f64::from(self.width),
            y0 + f64::from(self.height),
        )
    }
}

/// Floor division; `den` must be positive.
pub(crate) fn floor_div(num: i64, den: i64) -> i64 {
    num.div_euclid(den)
}

fn to_i32(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

fn to_u32(v: i64) -> u32 {
    u32::try_from(v.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
