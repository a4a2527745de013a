use super::*;

use slipover_ui_graphics::Size;

fn metrics() -> OverlayMetrics {
    OverlayMetrics::new(Size::new(400.0, 800.0), 44.0)
}

fn config() -> OverlayConfig {
    OverlayConfig::default()
}

#[test]
fn percent_zero_is_presented_look() {
    let v = blend(0.0, &config(), &metrics());
    assert_eq!(v.primary_scale, 0.9);
    assert_eq!(v.primary_alpha, 0.5);
    assert_eq!(v.secondary_top, 44.0);
    assert_eq!(v, presented_visuals(&config(), &metrics()));
}

#[test]
fn percent_one_is_deferred_look() {
    let v = blend(1.0, &config(), &metrics());
    assert_eq!(v.primary_scale, 1.0);
    assert_eq!(v.primary_alpha, 1.0);
    assert_eq!(v.secondary_top, 756.0);
    assert_eq!(v, deferred_visuals(&config(), &metrics()));
}

#[test]
fn midpoint_blends_all_properties_together() {
    let v = blend(0.5, &config(), &metrics());
    assert!((v.primary_scale - 0.95).abs() < 1e-6);
    assert!((v.primary_alpha - 0.75).abs() < 1e-6);
    assert!((v.secondary_top - 400.0).abs() < 1e-6);
}

#[test]
fn blend_is_pure_and_idempotent() {
    let config = config();
    let metrics = metrics();
    let first = blend(0.7, &config, &metrics);
    let _ = blend(0.0, &config, &metrics);
    let again = blend(0.7, &config, &metrics);
    assert_eq!(first, again);
}

#[test]
fn blend_extrapolates_past_the_endpoints() {
    let v = blend(1.1, &config(), &metrics());
    assert!(v.secondary_top > 756.0);
    let v = blend(-0.1, &config(), &metrics());
    assert!(v.secondary_top < 44.0);
}

#[test]
fn dismissed_setpoint_is_identity_and_offscreen() {
    let v = dismissed_visuals(&metrics());
    assert_eq!(v.primary_scale, 1.0);
    assert_eq!(v.primary_alpha, 1.0);
    assert_eq!(v.secondary_top, 800.0);
}

#[test]
fn visual_state_lerps_fieldwise() {
    let from = blend(0.0, &config(), &metrics());
    let to = blend(1.0, &config(), &metrics());
    let mid = slipover_animation::Lerp::lerp(&from, &to, 0.5);
    assert_eq!(mid, blend(0.5, &config(), &metrics()));
}

#[test]
fn spring_metric_tracks_the_secondary_top() {
    use slipover_animation::SpringValue;
    let v = blend(0.25, &config(), &metrics());
    assert_eq!(v.metric(), v.secondary_top);
}
