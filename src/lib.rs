//! vstudio is the layout engine of a multi-party live-video studio.
//!
//! Participant streams are composited onto one canvas. Which stream is the hero, how many
//! tiles are shown and where they sit is decided here, by a server-held [`Studio`] that a
//! room (the session owner) drives with mutation calls and reads back as a
//! [`StudioSnapshot`] to broadcast.
//!
//! # Model
//!
//! - **Layout**: an ordered list of [`LayoutItem`]s identified by a [`MediaKey`]. Index 0 is
//!   the hero tile.
//! - **Patterns**: seven tiling strategies ([`PatternKind`]); each maps the ordered tiles and
//!   the canvas to pixel placements ([`TileGeometry`]) with integer floor arithmetic.
//! - **Participants**: display name and audio/video flags per stream, kept apart from
//!   geometry.
//!
//! Every layout or pattern mutation recomputes geometry before returning, so a snapshot
//! taken after a call always reflects it. Tiles beyond a pattern's capacity stay in the
//! layout with zero size.
//!
//! # Constraints
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO in the engine**: only [`StudioConfig`] and [`CommandScript`] loaders touch files.
//! - **Single owner**: a [`Studio`] takes `&mut self` for every mutation and does no locking;
//!   a concurrent host serializes calls per room.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod participants;
mod patterns;
mod studio;

pub use foundation::core::{Canvas, Orientation, Rect, TileGeometry};
pub use foundation::error::{StudioError, StudioResult};
pub use layout::store::{LayoutItem, LayoutStore, MediaKey};
pub use participants::registry::{
    Participant, ParticipantDefaults, ParticipantLookup, ParticipantRegistry,
};
pub use patterns::catalog::{PATTERNS, PatternDescriptor, PatternKind};
pub use patterns::geometry::{GeometryFn, compute_geometry};
pub use studio::command::{CommandScript, ScriptReport, StudioCommand};
pub use studio::config::StudioConfig;
pub use studio::session::Studio;
pub use studio::snapshot::StudioSnapshot;
