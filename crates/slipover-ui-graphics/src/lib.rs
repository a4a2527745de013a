//! Pure math/data for geometry in Slipover
//!
//! This crate contains the geometry primitives shared by the layout,
//! input, and controller crates. It has no dependencies.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
