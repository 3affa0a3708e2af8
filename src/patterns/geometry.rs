//! Tile geometry for each layout pattern.
//!
//! Every calculator is a pure function of the canvas and the tile count: it returns exactly
//! `count` placements in tile order, with [`TileGeometry::HIDDEN`] for tiles beyond the
//! pattern's capacity. All pixel math is integer floor arithmetic.

use crate::foundation::core::{Canvas, TileGeometry, floor_div};
use crate::patterns::catalog::PatternKind;

/// Signature shared by all pattern calculators.
pub type GeometryFn = fn(Canvas, usize) -> Vec<TileGeometry>;

/// Number of rows in the right-hand column of [`PatternKind::LargeAndSmall`].
const LARGE_AND_SMALL_SUBS: i64 = 6;

/// Number of thumbnail slots along the bottom of [`PatternKind::PictureInPicture`].
const PINP_SLOTS: i64 = 5;

/// Horizontal inset of [`PatternKind::VerticalPictureInPicture`] thumbnails.
const VPINP_OFFSET_X: i64 = 25;
/// Distance from the canvas top to the first row of vertical p-in-p thumbnails.
const VPINP_OFFSET_Y: i64 = 125;
/// Vertical gap between the two rows of vertical p-in-p thumbnails.
const VPINP_ROW_GAP: i64 = 15;

impl PatternKind {
    /// Calculator implementing this pattern.
    ///
    /// The returned function expects a canvas that passed [`Canvas::validate`];
    /// [`compute_geometry`] checks that before dispatching.
    pub fn calculator(self) -> GeometryFn {
        match self {
            Self::MainOnly => main_only,
            Self::Tile => tile,
            Self::LargeAndSmall => large_and_small,
            Self::PictureInPicture => picture_in_picture,
            Self::VerticalMain => vertical_main,
            Self::VerticalTile => vertical_tile,
            Self::VerticalPictureInPicture => vertical_picture_in_picture,
        }
    }
}

/// Compute placements for `count` tiles under `kind`.
///
/// A canvas that fails [`Canvas::validate`] (empty, or larger than
/// [`Canvas::MAX_DIMENSION`]) yields `count` hidden tiles.
pub fn compute_geometry(kind: PatternKind, canvas: Canvas, count: usize) -> Vec<TileGeometry> {
    if canvas.validate().is_err() {
        return vec![TileGeometry::HIDDEN; count];
    }
    (kind.calculator())(canvas, count)
}

fn main_only(canvas: Canvas, count: usize) -> Vec<TileGeometry> {
    (0..count)
        .map(|i| match i {
            0 => TileGeometry::from_px(0, 0, canvas.w(), canvas.h()),
            _ => TileGeometry::HIDDEN,
        })
        .collect()
}

fn tile(canvas: Canvas, count: usize) -> Vec<TileGeometry> {
    grid(count, canvas.w(), canvas.h(), 0)
}

fn vertical_tile(canvas: Canvas, count: usize) -> Vec<TileGeometry> {
    let sub_w = portrait_width(canvas);
    let pad_x = floor_div(canvas.w() - sub_w, 2);
    grid(count, sub_w, canvas.h(), pad_x)
}

/// Row-major grid of `count` equal cells over a `w x h` area shifted right by `pad_x`.
///
/// The grid is `cols x cols` or `cols x (cols - 1)`; a short grid is centered vertically by
/// half a cell.
fn grid(count: usize, w: i64, h: i64, pad_x: i64) -> Vec<TileGeometry> {
    if count == 0 {
        return Vec::new();
    }
    let n = i64::try_from(count).unwrap_or(i64::MAX);
    let cols = ceil_sqrt(n);
    let rows = if n > cols * (cols - 1) { cols } else { cols - 1 };

    let cell_w = floor_div(w, cols);
    let cell_h = floor_div(h, cols);
    let pad_y = if rows < cols { floor_div(cell_h, 2) } else { 0 };

    (0..n)
        .map(|idx| {
            let (row, col) = (idx / cols, idx % cols);
            TileGeometry::from_px(col * cell_w + pad_x, row * cell_h + pad_y, cell_w, cell_h)
        })
        .collect()
}

fn large_and_small(canvas: Canvas, count: usize) -> Vec<TileGeometry> {
    let (w, h) = (canvas.w(), canvas.h());
    let k = LARGE_AND_SMALL_SUBS;
    let column_x = floor_div(w * (k - 1), k);

    (0..count)
        .map(|i| {
            let i = i64::try_from(i).unwrap_or(i64::MAX);
            if i > k {
                return TileGeometry::HIDDEN;
            }
            if i == 0 {
                let hero_h = floor_div(h * (k - 1), k);
                let hero_w = floor_div(w * hero_h, h);
                return TileGeometry::from_px(0, floor_div(h - hero_h, 2), hero_w, hero_h);
            }
            let sub_h = floor_div(h, k);
            let sub_w = floor_div(w * sub_h, h);
            TileGeometry::from_px(column_x, (i - 1) * sub_h, sub_w, sub_h)
        })
        .collect()
}

fn picture_in_picture(canvas: Canvas, count: usize) -> Vec<TileGeometry> {
    let (w, h) = (canvas.w(), canvas.h());
    let sub_h = thumbnail_height(canvas);
    let sub_w = floor_div(w * sub_h, h);
    let slot_w = floor_div(w, PINP_SLOTS);
    // floor((w / slots - sub_w) / 2) without the fractional slot width.
    let inset_x = floor_div(w - PINP_SLOTS * sub_w, 2 * PINP_SLOTS);
    let sub_y = h - sub_h - floor_div(h, 25);

    (0..count)
        .map(|i| {
            let i = i64::try_from(i).unwrap_or(i64::MAX);
            match i {
                0 => TileGeometry::from_px(0, 0, w, h),
                i if i <= PINP_SLOTS => {
                    TileGeometry::from_px(slot_w * (i - 1) + inset_x, sub_y, sub_w, sub_h)
                }
                _ => TileGeometry::HIDDEN,
            }
        })
        .collect()
}

fn vertical_main(canvas: Canvas, count: usize) -> Vec<TileGeometry> {
    let hero_w = portrait_width(canvas);
    let pad_x = floor_div(canvas.w() - hero_w, 2);
    (0..count)
        .map(|i| match i {
            0 => TileGeometry::from_px(pad_x, 0, hero_w, canvas.h()),
            _ => TileGeometry::HIDDEN,
        })
        .collect()
}

fn vertical_picture_in_picture(canvas: Canvas, count: usize) -> Vec<TileGeometry> {
    let (w, h) = (canvas.w(), canvas.h());
    // Side of the centered square region (h * h / w), and its left edge.
    let side = floor_div(h * h, w);
    let pad_x = floor_div(w * w - h * h, 2 * w);

    let sub_h = thumbnail_height(canvas);
    let sub_w = floor_div(sub_h * h, w);
    let left_x = pad_x + VPINP_OFFSET_X;
    let right_x = pad_x + side - sub_w - VPINP_OFFSET_X;
    let upper_y = VPINP_OFFSET_Y;
    let lower_y = sub_h + VPINP_OFFSET_Y + VPINP_ROW_GAP;

    (0..count)
        .map(|i| match i {
            0 => TileGeometry::from_px(pad_x, 0, side, h),
            1 => TileGeometry::from_px(left_x, upper_y, sub_w, sub_h),
            2 => TileGeometry::from_px(right_x, upper_y, sub_w, sub_h),
            3 => TileGeometry::from_px(left_x, lower_y, sub_w, sub_h),
            4 => TileGeometry::from_px(right_x, lower_y, sub_w, sub_h),
            _ => TileGeometry::HIDDEN,
        })
        .collect()
}

/// Width of a full-height 9:16 region.
fn portrait_width(canvas: Canvas) -> i64 {
    floor_div(canvas.h() * 9, 16)
}

/// Thumbnail height used by both picture-in-picture patterns: 90% of a fifth of the height.
fn thumbnail_height(canvas: Canvas) -> i64 {
    floor_div(canvas.h() * 9, 50)
}

fn ceil_sqrt(n: i64) -> i64 {
    let mut root = (n as f64).sqrt() as i64;
    while root * root < n {
        root += 1;
    }
    while root > 0 && (root - 1) * (root - 1) >= n {
        root -= 1;
    }
    root
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/geometry.rs"]
mod tests;
