use crate::{
    animation::ease::Ease,
    effects::tuning::TimingTuning,
    foundation::core::{Fps, FrameIndex, FrameRange},
};

/// One caption's window on the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextScene {
    /// Position in the caption list.
    pub index: usize,
    pub text: String,
    /// Timeline placement `[start, end)`.
    pub range: FrameRange,
    /// Deterministic per-scene seed; a pure function of `index`.
    pub seed: f64,
}

/// The scene covering a given frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveScene<'a> {
    pub scene: &'a TextScene,
    /// Frame offset inside the scene.
    pub local: FrameIndex,
}

/// Fixed-length, contiguous caption windows plus their entrance/exit envelopes.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSequencer {
    scenes: Vec<TextScene>,
    scene_frames: u64,
    fps: Fps,
    timing: TimingTuning,
}

impl SceneSequencer {
    /// Lay out one window of `timing.scene_secs` per caption, in order.
    pub fn new<I, S>(captions: I, fps: Fps, timing: TimingTuning) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scene_frames = fps.secs_to_frames_floor(timing.scene_secs);
        let scenes = captions
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let start = scene_frames.saturating_mul(index as u64);
                TextScene {
                    index,
                    text: text.into(),
                    range: FrameRange {
                        start: FrameIndex(start),
                        end: FrameIndex(start.saturating_add(scene_frames)),
                    },
                    seed: index as f64 * timing.seed_stride,
                }
            })
            .collect();

        Self {
            scenes,
            scene_frames,
            fps,
            timing,
        }
    }

    /// All scenes in timeline order.
    pub fn scenes(&self) -> &[TextScene] {
        &self.scenes
    }

    /// Frames per scene window.
    pub fn scene_frames(&self) -> u64 {
        self.scene_frames
    }

    /// Frames covered by every scene together.
    pub fn total_frames(&self) -> u64 {
        self.scene_frames.saturating_mul(self.scenes.len() as u64)
    }

    /// The scene covering `frame`, if any. Frames past the last window map to none.
    pub fn scene_at(&self, frame: FrameIndex) -> Option<ActiveScene<'_>> {
        if self.scene_frames == 0 {
            return None;
        }
        let index = usize::try_from(frame.0 / self.scene_frames).ok()?;
        let scene = self.scenes.get(index)?;
        Some(ActiveScene {
            scene,
            local: FrameIndex(frame.0 % self.scene_frames),
        })
    }

    /// Structural opacity envelope for a scene-local frame.
    pub fn opacity(&self, local: FrameIndex) -> f64 {
        envelope_opacity(local, self.scene_frames, self.fps, &self.timing)
    }

    /// Structural entrance scale for a scene-local frame.
    pub fn entrance_scale(&self, local: FrameIndex) -> f64 {
        entrance_scale(local, self.fps, &self.timing)
    }
}

/// Linear 0→1 over the entrance window, hold, 1→0 over the exit window ending on
/// the scene's last frame. Always inside `[0, 1]`.
pub fn envelope_opacity(local: FrameIndex, scene_frames: u64, fps: Fps, timing: &TimingTuning) -> f64 {
    if scene_frames == 0 {
        return 0.0;
    }
    let local = local.0.min(scene_frames - 1);
    let in_frames = fps.secs_to_frames_floor(timing.entrance_secs);
    let out_frames = fps.secs_to_frames_floor(timing.exit_secs);

    let fade_in = if in_frames == 0 {
        1.0
    } else {
        local as f64 / in_frames as f64
    };
    let fade_out = if out_frames == 0 {
        1.0
    } else {
        (scene_frames - 1 - local) as f64 / out_frames as f64
    };
    fade_in.min(fade_out).clamp(0.0, 1.0)
}

/// Springy 0→1 scale-in over the entrance window, 1 afterwards.
pub fn entrance_scale(local: FrameIndex, fps: Fps, timing: &TimingTuning) -> f64 {
    if timing.entrance_scale_secs <= 0.0 {
        return 1.0;
    }
    Ease::OutBack.apply(fps.frames_to_secs(local.0) / timing.entrance_scale_secs)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sequencer.rs"]
mod tests;
