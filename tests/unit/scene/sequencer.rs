use super::*;
use crate::effects::tuning::Tuning;

fn abc() -> SceneSequencer {
    SceneSequencer::new(["A", "B", "C"], Fps::new(30, 1).unwrap(), Tuning::DEFAULT.timing)
}

#[test]
fn windows_are_contiguous_and_equal() {
    let seq = abc();
    assert_eq!(seq.scene_frames(), 150);
    assert_eq!(seq.total_frames(), 450);
    for (i, s) in seq.scenes().iter().enumerate() {
        assert_eq!(s.index, i);
        assert_eq!(s.range.start.0, i as u64 * 150);
        assert_eq!(s.range.end.0, (i as u64 + 1) * 150);
        assert_eq!(s.seed, i as f64 * 50.0);
    }
}

#[test]
fn every_frame_maps_to_exactly_one_scene() {
    let seq = abc();
    for f in 0..450u64 {
        let active = seq.scene_at(FrameIndex(f)).unwrap();
        assert!(active.scene.range.contains(FrameIndex(f)));
        let owners = seq
            .scenes()
            .iter()
            .filter(|s| s.range.contains(FrameIndex(f)))
            .count();
        assert_eq!(owners, 1);
    }
    assert!(seq.scene_at(FrameIndex(450)).is_none());
    assert!(seq.scene_at(FrameIndex(u64::MAX)).is_none());
}

#[test]
fn frame_160_is_scene_b_local_10() {
    let seq = abc();
    let active = seq.scene_at(FrameIndex(160)).unwrap();
    assert_eq!(active.scene.index, 1);
    assert_eq!(active.scene.text, "B");
    assert_eq!(active.local, FrameIndex(10));
    assert!((seq.opacity(active.local) - 10.0 / 24.0).abs() < 1e-12);
}

#[test]
fn opacity_envelope_shape() {
    let seq = abc();
    assert_eq!(seq.opacity(FrameIndex(0)), 0.0);
    assert_eq!(seq.opacity(FrameIndex(24)), 1.0);
    assert_eq!(seq.opacity(FrameIndex(149)), 0.0);

    let values: Vec<f64> = (0..150).map(|l| seq.opacity(FrameIndex(l))).collect();
    let peak = values.iter().position(|v| *v == 1.0).unwrap();
    assert!(values[..=peak].windows(2).all(|w| w[0] <= w[1]));
    assert!(values[peak..].windows(2).all(|w| w[0] >= w[1]));
    assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn entrance_scale_springs_to_one() {
    let seq = abc();
    assert_eq!(seq.entrance_scale(FrameIndex(0)), 0.0);
    assert_eq!(seq.entrance_scale(FrameIndex(24)), 1.0);
    assert_eq!(seq.entrance_scale(FrameIndex(100)), 1.0);
    let overshoot = (1..24).any(|l| seq.entrance_scale(FrameIndex(l)) > 1.0);
    assert!(overshoot);
}

#[test]
fn empty_caption_list_has_no_scenes() {
    let seq = SceneSequencer::new(Vec::<String>::new(), Fps::default(), Tuning::DEFAULT.timing);
    assert_eq!(seq.total_frames(), 0);
    assert!(seq.scene_at(FrameIndex(0)).is_none());
}

#[test]
fn zero_length_windows_never_match() {
    let mut timing = Tuning::DEFAULT.timing;
    timing.scene_secs = 0.0;
    let seq = SceneSequencer::new(["A"], Fps::default(), timing);
    assert!(seq.scene_at(FrameIndex(0)).is_none());
    assert_eq!(envelope_opacity(FrameIndex(0), 0, Fps::default(), &timing), 0.0);
}
