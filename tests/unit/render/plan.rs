use super::*;
use crate::{effects::catalog::EffectSet, overlay::model::OverlayRequest};

fn overlay() -> Overlay {
    let mut req = OverlayRequest::new(MediaRef::Video("bg.mp4".into()), ["One", "Two"]);
    req.effects = EffectSet::from_tokens(["drift", "glitch", "typewriter", "rotate3d"]);
    Overlay::new(req).unwrap()
}

#[test]
fn empty_range_is_rejected() {
    let ov = overlay();
    let r = FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap();
    assert!(plan_frames(&ov, r, &PlanThreading::default()).is_err());
}

#[test]
fn range_past_duration_is_rejected() {
    let ov = overlay();
    let r = FrameRange::new(FrameIndex(0), FrameIndex(301)).unwrap();
    assert!(plan_frames(&ov, r, &PlanThreading::default()).is_err());
}

#[test]
fn zero_threads_is_rejected() {
    let ov = overlay();
    let threading = PlanThreading {
        parallel: true,
        chunk_size: 8,
        threads: Some(0),
    };
    assert!(plan_frames(&ov, ov.frame_range(), &threading).is_err());
}

#[test]
fn sequential_plan_matches_contract_at() {
    let ov = overlay();
    let r = FrameRange::new(FrameIndex(140), FrameIndex(170)).unwrap();
    let (frames, stats) = plan_frames(&ov, r, &PlanThreading::default()).unwrap();
    assert_eq!(frames.len(), 30);
    assert_eq!(stats.frames_total, 30);
    assert_eq!(stats.frames_with_text, 30);
    for (i, c) in frames.iter().enumerate() {
        assert_eq!(c, &ov.contract_at(FrameIndex(140 + i as u64)));
    }
}

#[test]
fn chunking_counts_and_zero_chunk_size() {
    let ov = overlay();
    let r = FrameRange::new(FrameIndex(0), FrameIndex(10)).unwrap();
    let threading = PlanThreading {
        chunk_size: 0,
        ..PlanThreading::default()
    };
    let (_, stats) = plan_frames(&ov, r, &threading).unwrap();
    assert_eq!(stats.chunks, 10);
}

#[test]
fn parallel_matches_sequential() {
    let ov = overlay();
    let (seq, seq_stats) = plan_frames(&ov, ov.frame_range(), &PlanThreading::default()).unwrap();
    let threading = PlanThreading {
        parallel: true,
        chunk_size: 17,
        threads: Some(3),
    };
    let (par, par_stats) = plan_frames(&ov, ov.frame_range(), &threading).unwrap();
    assert_eq!(seq, par);
    assert_eq!(seq_stats.frames_total, par_stats.frames_total);
    assert_eq!(seq_stats.frames_with_text, par_stats.frames_with_text);
}

#[test]
fn overlay_plan_covers_duration() {
    let ov = overlay();
    let plan = OverlayPlan::build(&ov, &PlanThreading::default()).unwrap();
    assert_eq!(plan.duration, 300);
    assert_eq!(plan.frames.len(), 300);
    assert_eq!(plan.background, MediaRef::Video("bg.mp4".into()));
}

#[test]
fn overlay_plan_without_captions_is_empty() {
    let req = OverlayRequest::new(MediaRef::Image("bg.png".into()), Vec::<String>::new());
    let ov = Overlay::new(req).unwrap();
    let plan = OverlayPlan::build(&ov, &PlanThreading::default()).unwrap();
    assert_eq!(plan.duration, 0);
    assert!(plan.frames.is_empty());
}

#[test]
fn frames_past_last_scene_plan_to_none() {
    let mut req = OverlayRequest::new(MediaRef::Video("bg.mp4".into()), ["Only"]);
    req.duration = Some(160);
    let ov = Overlay::new(req).unwrap();
    let (frames, stats) = plan_frames(&ov, ov.frame_range(), &PlanThreading::default()).unwrap();
    assert_eq!(stats.frames_with_text, 150);
    assert!(frames[150..].iter().all(Option::is_none));
}

#[test]
fn huge_chunk_size_with_offset_start_does_not_overflow() {
    let ov = overlay();
    let r = FrameRange::new(FrameIndex(10), FrameIndex(20)).unwrap();
    for parallel in [false, true] {
        let threading = PlanThreading {
            parallel,
            chunk_size: usize::MAX,
            threads: Some(2),
        };
        let (frames, stats) = plan_frames(&ov, r, &threading).unwrap();
        assert_eq!(frames.len(), 10);
        assert_eq!(stats.chunks, 1);
        assert_eq!(frames[0], ov.contract_at(FrameIndex(10)));
    }
}
