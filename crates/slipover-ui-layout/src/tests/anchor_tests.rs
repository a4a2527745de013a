use super::*;

#[test]
fn new_set_starts_transitional() {
    let set = AnchorSet::new(44.0, 800.0);
    assert_eq!(set.active_position(), OverlayPosition::Transitional);
    assert_eq!(set.active_flags(), [false, false, true]);
    assert_eq!(set.resolve(800.0), 800.0);
}

#[test]
fn exactly_one_relation_is_active_after_switching() {
    let mut set = AnchorSet::new(44.0, 800.0);
    set.activate(OverlayPosition::Presented);
    assert_eq!(set.active_flags(), [true, false, false]);
    set.activate(OverlayPosition::Deferred);
    assert_eq!(set.active_flags(), [false, true, false]);
    set.activate(OverlayPosition::Transitional);
    assert_eq!(set.active_flags(), [false, false, true]);
}

#[test]
fn resolve_matches_named_positions() {
    let mut set = AnchorSet::new(44.0, 800.0);
    set.activate(OverlayPosition::Presented);
    assert_eq!(set.resolve(800.0), 44.0);
    set.activate(OverlayPosition::Deferred);
    assert_eq!(set.resolve(800.0), 756.0);
}

#[test]
fn transitional_free_variable_drives_resolution() {
    let mut set = AnchorSet::new(44.0, 800.0);
    set.set_transitional_top(123.5);
    assert_eq!(set.resolve(800.0), 123.5);
    // Driving the free variable never flips activation.
    assert_eq!(set.active_position(), OverlayPosition::Transitional);
}

#[test]
fn edge_offset_update_rewrites_constants_in_place() {
    let mut set = AnchorSet::new(44.0, 800.0);
    set.activate(OverlayPosition::Deferred);
    set.update_edge_offset(32.0);
    assert_eq!(set.resolve(800.0), 768.0);
    set.activate(OverlayPosition::Presented);
    assert_eq!(set.resolve(800.0), 32.0);
}

#[test]
fn anchors_resolve_against_new_container_height() {
    let mut set = AnchorSet::new(44.0, 800.0);
    set.activate(OverlayPosition::Deferred);
    assert_eq!(set.resolve(600.0), 556.0);
}
