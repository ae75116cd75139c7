use super::*;
use crate::{
    effects::catalog::EffectSet,
    layout::position::TextPosition,
    overlay::model::MediaRef,
};

fn request(captions: &[&str]) -> OverlayRequest {
    OverlayRequest::new(MediaRef::Video("bg.mp4".into()), captions.iter().copied())
}

#[test]
fn duration_defaults_to_all_scenes() {
    let ov = Overlay::new(request(&["A", "B", "C"])).unwrap();
    assert_eq!(ov.sequencer().scene_frames(), 150);
    assert_eq!(ov.duration_frames(), 450);
    assert_eq!(ov.frame_range().len_frames(), 450);
}

#[test]
fn explicit_duration_wins() {
    let mut req = request(&["A", "B", "C"]);
    req.duration = Some(200);
    let ov = Overlay::new(req).unwrap();
    assert_eq!(ov.duration_frames(), 200);
    // Scene C is never reached but still exists on the sequencer.
    assert_eq!(ov.sequencer().scenes().len(), 3);
}

#[test]
fn scene_secs_overrides_tuning() {
    let mut req = request(&["A", "B"]);
    req.scene_secs = 2.0;
    let ov = Overlay::new(req).unwrap();
    assert_eq!(ov.sequencer().scene_frames(), 60);
    assert_eq!(ov.tuning().timing.scene_secs, 2.0);
}

#[test]
fn fixed_position_gives_one_band_for_every_scene() {
    let mut req = request(&["A", "B", "C", "D"]);
    req.style.text_position = TextPosition::Bottom;
    let ov = Overlay::new(req).unwrap();
    for i in 0..4 {
        assert_eq!(ov.band(i), Some(Band::Bottom));
    }
    assert_eq!(ov.band(4), None);
}

#[test]
fn random_position_is_stable_per_scene() {
    let a = Overlay::new(request(&["A", "B", "C", "D", "E"])).unwrap();
    let b = Overlay::new(request(&["A", "B", "C", "D", "E"])).unwrap();
    for i in 0..5 {
        assert_eq!(a.band(i), b.band(i));
    }
}

#[test]
fn flags_come_from_tokens() {
    let mut req = request(&["A"]);
    req.effects = EffectSet::from_tokens(["glow", "nope"]);
    let ov = Overlay::new(req).unwrap();
    assert_eq!(ov.flags(), EffectFlags::GLOW);
}

#[test]
fn invalid_request_does_not_compile() {
    let mut req = request(&["A"]);
    req.canvas.width = 0;
    assert!(Overlay::new(req).is_err());
}

#[test]
fn base_unit_follows_canvas_width() {
    let mut req = request(&["A"]);
    req.canvas.width = 2160;
    req.canvas.height = 3840;
    let ov = Overlay::new(req).unwrap();
    assert_eq!(ov.base_unit(), 2.0);
}

#[test]
fn frames_past_duration_have_no_contract() {
    let mut req = request(&["A", "B", "C"]);
    req.duration = Some(150);
    let ov = Overlay::new(req).unwrap();
    assert!(ov.contract_at(FrameIndex(149)).is_some());
    assert!(ov.contract_at(FrameIndex(150)).is_none());
    assert!(ov.contract_at(FrameIndex(200)).is_none());
}

#[test]
fn duration_longer_than_scenes_leaves_tail_empty() {
    let mut req = request(&["A"]);
    req.duration = Some(200);
    let ov = Overlay::new(req).unwrap();
    assert!(ov.contract_at(FrameIndex(149)).is_some());
    assert!(ov.contract_at(FrameIndex(150)).is_none());
}
