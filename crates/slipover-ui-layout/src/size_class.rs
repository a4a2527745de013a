//! Size classes and the metrics derived from them.

use slipover_ui_graphics::Size;

/// Horizontal layout environment of the hosting container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    Compact,
    Regular,
}

/// Edge offset reserved for the secondary view, keyed by size class.
///
/// The offset is the inset left at the container top while presented and
/// the peek height left at the bottom while deferred. Offsets must stay
/// positive; a regular offset at least as large as the compact one is the
/// expected shape but is not enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeOffsets {
    pub compact: f32,
    pub regular: f32,
}

impl EdgeOffsets {
    pub fn new(compact: f32, regular: f32) -> Self {
        debug_assert!(compact > 0.0 && regular > 0.0, "edge offsets must be positive");
        Self { compact, regular }
    }

    pub fn resolve(&self, size_class: SizeClass) -> f32 {
        match size_class {
            SizeClass::Compact => self.compact,
            SizeClass::Regular => self.regular,
        }
    }
}

/// Container size plus the resolved edge offset for the current size
/// class. Everything the blend and gesture math needs to place the
/// secondary view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayMetrics {
    pub container: Size,
    pub edge_offset: f32,
}

impl OverlayMetrics {
    pub fn new(container: Size, edge_offset: f32) -> Self {
        Self {
            container,
            edge_offset,
        }
    }

    /// Top edge of the secondary while fully presented.
    pub fn presented_top(&self) -> f32 {
        self.edge_offset
    }

    /// Top edge of the secondary while deferred (peeking at the bottom).
    pub fn deferred_top(&self) -> f32 {
        self.container.height - self.edge_offset
    }

    /// Top edge of the secondary when fully below the container.
    pub fn offscreen_top(&self) -> f32 {
        self.container.height
    }

    /// Vertical distance between the presented and deferred top edges.
    pub fn travel(&self) -> f32 {
        self.container.height - 2.0 * self.edge_offset
    }

    /// Height of the secondary view. Fixed at presentation size; the view
    /// is clipped while deferred, never resized.
    pub fn secondary_height(&self) -> f32 {
        self.container.height - self.edge_offset
    }
}

#[cfg(test)]
#[path = "tests/size_class_tests.rs"]
mod tests;
