//! Layout contracts for Slipover
//!
//! Vertical anchor relations for the secondary view's three named
//! positions, size-class keyed edge offsets, and the derived metrics the
//! transition math runs on.

mod anchor;
mod size_class;

pub use anchor::*;
pub use size_class::*;

pub mod prelude {
    pub use crate::anchor::{AnchorEdge, AnchorSet, OverlayPosition, VerticalAnchor};
    pub use crate::size_class::{EdgeOffsets, OverlayMetrics, SizeClass};
}
