use super::*;
use crate::effects::tuning::Tuning;

#[test]
fn envelopes_are_band_specific() {
    let c = Tuning::DEFAULT.clamp;
    let top = ClampEnvelope::for_band(Band::Top, 1.0, &c);
    let bottom = ClampEnvelope::for_band(Band::Bottom, 1.0, &c);
    let center = ClampEnvelope::for_band(Band::Center, 1.0, &c);
    assert!(top.y_max > -top.y_min);
    assert!(-bottom.y_min > bottom.y_max);
    assert_eq!(center.y_max, -center.y_min);
    assert_eq!(top.x_max, 150.0);
    assert_eq!(bottom.x_min, -150.0);
}

#[test]
fn clamps_each_axis_and_scales_with_base_unit() {
    let c = Tuning::DEFAULT.clamp;
    let out = clamp_offset(Vec2::new(900.0, -900.0), Band::Top, 2.0, &c);
    assert_eq!(out, Vec2::new(300.0, -120.0));
    let inside = Vec2::new(10.0, 10.0);
    assert_eq!(clamp_offset(inside, Band::Center, 1.0, &c), inside);
}

#[test]
fn non_finite_offsets_collapse_to_anchor() {
    let c = Tuning::DEFAULT.clamp;
    let out = clamp_offset(Vec2::new(f64::NAN, f64::INFINITY), Band::Center, 1.0, &c);
    assert_eq!(out, Vec2::new(0.0, 0.0));
}
