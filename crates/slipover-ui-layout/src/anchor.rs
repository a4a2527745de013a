//! Vertical anchor relations for the secondary view.
//!
//! The secondary has three named positions, each expressed as a relation
//! between one of its edges and a container edge. Exactly one relation is
//! active at a time; switching positions deactivates the old relation and
//! activates the new one rather than rebuilding anything, so an animated
//! block can keep interpolating the active value.

/// Container reference edge a [`VerticalAnchor`] measures from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorEdge {
    Top,
    Bottom,
}

/// One vertical relation: secondary top edge = container edge ± constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalAnchor {
    pub edge: AnchorEdge,
    pub constant: f32,
    pub active: bool,
}

impl VerticalAnchor {
    pub fn new(edge: AnchorEdge, constant: f32) -> Self {
        Self {
            edge,
            constant,
            active: false,
        }
    }

    /// Resolve to a concrete top-edge position for the given container
    /// height.
    pub fn resolve(&self, container_height: f32) -> f32 {
        match self.edge {
            AnchorEdge::Top => self.constant,
            AnchorEdge::Bottom => container_height - self.constant,
        }
    }
}

/// The named position an [`AnchorSet`] is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPosition {
    /// Top inset by the edge offset from the container top.
    Presented,
    /// Peeking by the edge offset above the container bottom.
    Deferred,
    /// Free variable driven directly by the transition percent.
    Transitional,
}

/// The per-secondary bundle of positional relations.
///
/// Created whole when a secondary is presented and dropped whole when it
/// is destroyed, so there is never a partially-live set of relations.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorSet {
    presented: VerticalAnchor,
    deferred: VerticalAnchor,
    transitional: VerticalAnchor,
    active: OverlayPosition,
}

impl AnchorSet {
    /// Build the three relations for the given edge offset, with the
    /// transitional relation active at `initial_top`.
    pub fn new(edge_offset: f32, initial_top: f32) -> Self {
        let mut set = Self {
            presented: VerticalAnchor::new(AnchorEdge::Top, edge_offset),
            deferred: VerticalAnchor::new(AnchorEdge::Bottom, edge_offset),
            transitional: VerticalAnchor::new(AnchorEdge::Top, initial_top),
            active: OverlayPosition::Transitional,
        };
        set.transitional.active = true;
        set
    }

    pub fn active_position(&self) -> OverlayPosition {
        self.active
    }

    /// Deactivate the current relation and activate the one for
    /// `position`.
    pub fn activate(&mut self, position: OverlayPosition) {
        self.anchor_mut(self.active).active = false;
        self.anchor_mut(position).active = true;
        self.active = position;
    }

    /// Drive the transitional relation's free variable. Does not change
    /// which relation is active.
    pub fn set_transitional_top(&mut self, top: f32) {
        self.transitional.constant = top;
    }

    /// Update the presented/deferred constants in place after an edge
    /// offset change. The transitional free variable is left alone; the
    /// caller re-applies it from the current percent.
    pub fn update_edge_offset(&mut self, edge_offset: f32) {
        self.presented.constant = edge_offset;
        self.deferred.constant = edge_offset;
    }

    /// Top edge of the secondary per the active relation.
    pub fn resolve(&self, container_height: f32) -> f32 {
        self.anchor(self.active).resolve(container_height)
    }

    fn anchor(&self, position: OverlayPosition) -> &VerticalAnchor {
        match position {
            OverlayPosition::Presented => &self.presented,
            OverlayPosition::Deferred => &self.deferred,
            OverlayPosition::Transitional => &self.transitional,
        }
    }

    fn anchor_mut(&mut self, position: OverlayPosition) -> &mut VerticalAnchor {
        match position {
            OverlayPosition::Presented => &mut self.presented,
            OverlayPosition::Deferred => &mut self.deferred,
            OverlayPosition::Transitional => &mut self.transitional,
        }
    }

    /// Each relation's active flag, for invariant checks.
    pub fn active_flags(&self) -> [bool; 3] {
        [
            self.presented.active,
            self.deferred.active,
            self.transitional.active,
        ]
    }
}

#[cfg(test)]
#[path = "tests/anchor_tests.rs"]
mod tests;
