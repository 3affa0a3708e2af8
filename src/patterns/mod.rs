//! Pattern catalog and the geometry calculator behind each pattern.

pub(crate) mod catalog;
pub(crate) mod geometry;
