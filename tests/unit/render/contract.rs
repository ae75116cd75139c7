use super::*;
use crate::{
    effects::catalog::EffectSet,
    layout::position::TextPosition,
    overlay::model::{MediaRef, OverlayRequest},
};

fn overlay(captions: &[&str], effects: &[&str], position: TextPosition) -> Overlay {
    let mut req = OverlayRequest::new(MediaRef::Video("bg.mp4".into()), captions.iter().copied());
    req.effects = EffectSet::from_tokens(effects.iter().copied());
    req.style.text_position = position;
    Overlay::new(req).unwrap()
}

#[test]
fn frames_outside_every_scene_have_no_contract() {
    let ov = overlay(&["A", "B"], &[], TextPosition::Center);
    assert!(ov.contract_at(FrameIndex(299)).is_some());
    assert!(ov.contract_at(FrameIndex(300)).is_none());

    let empty = overlay(&[], &["glow"], TextPosition::Center);
    assert!(empty.contract_at(FrameIndex(0)).is_none());
}

#[test]
fn neutral_contract_mid_scene() {
    let ov = overlay(&["Hello"], &[], TextPosition::Center);
    let c = ov.contract_at(FrameIndex(60)).unwrap();
    assert_eq!(c.scene, 0);
    assert_eq!(c.local_frame, FrameIndex(60));
    assert_eq!(c.text, "Hello");
    assert_eq!(c.opacity, 1.0);
    assert_eq!(c.filter, "none");
    assert_eq!(c.text_shadow, "");
    assert!(c.ghosts.is_empty());
    assert!(!c.glitching);
    assert_eq!(c.perspective_px, None);
    assert_eq!(
        c.transform_css,
        "translate(-50%, -50%) translate(0px, 0px) translateZ(0px) rotateX(0deg) rotateY(0deg) rotate(0deg) scale(1)"
    );
}

#[test]
fn anchor_sits_on_band_fraction() {
    let ov = overlay(&["A"], &[], TextPosition::Bottom);
    let c = ov.contract_at(FrameIndex(10)).unwrap();
    assert_eq!(c.anchor.band, Band::Bottom);
    assert_eq!(c.anchor.x_px, 540.0);
    assert!((c.anchor.y_px - 1920.0 * 0.68).abs() < 1e-9);
}

#[test]
fn envelope_scales_contract_opacity() {
    let ov = overlay(&["A", "B", "C"], &[], TextPosition::Center);
    let c = ov.contract_at(FrameIndex(160)).unwrap();
    assert_eq!(c.scene, 1);
    assert_eq!(c.text, "B");
    assert!((c.opacity - 10.0 / 24.0).abs() < 1e-9);
}

#[test]
fn entrance_scale_starts_at_zero() {
    let ov = overlay(&["A"], &[], TextPosition::Center);
    let c = ov.contract_at(FrameIndex(0)).unwrap();
    assert_eq!(c.transform.last(), Some(&TransformOp::Scale { s: 0.0 }));
}

#[test]
fn perspective_only_with_3d_effects() {
    let ov = overlay(&["A"], &["rotate3d"], TextPosition::Center);
    let c = ov.contract_at(FrameIndex(40)).unwrap();
    assert_eq!(c.perspective_px, Some(800.0));
}

#[test]
fn font_scales_with_base_unit() {
    let mut req = OverlayRequest::new(MediaRef::Image("bg.png".into()), ["A"]);
    req.canvas.width = 540;
    req.canvas.height = 960;
    let ov = Overlay::new(req).unwrap();
    let c = ov.contract_at(FrameIndex(30)).unwrap();
    assert_eq!(c.font.family, "Inter");
    assert_eq!(c.font.size_px, 36.0);
    assert_eq!(c.font.color, Color::WHITE);
}

#[test]
fn offsets_never_leave_the_envelope() {
    let all = [
        "drift", "wave", "bounce", "spiral", "swing", "slide", "orbit", "float", "shake",
    ];
    for position in [TextPosition::Top, TextPosition::Center, TextPosition::Bottom] {
        let ov = overlay(&["A", "B"], &all, position);
        for f in 0..300 {
            let c = ov.contract_at(FrameIndex(f)).unwrap();
            let Some(TransformOp::Translate { x, y }) = c.transform.get(1).copied() else {
                panic!("translate op missing at frame {f}");
            };
            assert!(x.abs() <= 150.0 + 1e-9, "x={x} at frame {f}");
            let (lo, hi) = match c.anchor.band {
                Band::Top => (-60.0, 200.0),
                Band::Center => (-150.0, 150.0),
                Band::Bottom => (-200.0, 60.0),
            };
            assert!(y >= lo - 1e-9 && y <= hi + 1e-9, "y={y} at frame {f}");
        }
    }
}

#[test]
fn affine_is_identity_for_settled_neutral_frame() {
    let ov = overlay(&["A"], &[], TextPosition::Center);
    let c = ov.contract_at(FrameIndex(75)).unwrap();
    assert_eq!(c.affine(), Affine::IDENTITY);
}
