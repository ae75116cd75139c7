use std::f64::consts::TAU;

use crate::{
    animation::noise::{self, NoiseChannel},
    effects::tuning::Tuning,
    foundation::{
        color::Color,
        core::{Fps, FrameIndex},
        math::fract,
    },
};

/// Everything an effect may read for one frame. Nothing else is visible to it.
#[derive(Clone, Copy, Debug)]
pub struct EffectCtx<'a> {
    /// Absolute timeline frame; keys every noise lookup.
    pub frame: FrameIndex,
    /// Frame within the active scene; drives cyclic phase and reveal timing.
    pub local: FrameIndex,
    /// Scene seed.
    pub seed: f64,
    pub fps: Fps,
    /// Output width ÷ 1080.
    pub base_unit: f64,
    /// Full caption text.
    pub text: &'a str,
    pub glow_color: Color,
    pub tuning: &'a Tuning,
}

impl EffectCtx<'_> {
    /// Scene-local time in seconds.
    pub fn local_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.local.0)
    }

    /// Absolute frame as a float, for noise coordinates.
    pub fn frame_f64(&self) -> f64 {
        self.frame.0 as f64
    }

    /// Position in the shared repeat cycle, offset per seed so scenes desynchronize.
    /// Grows without bound; callers take `fract` or feed it to periodic functions.
    pub fn cycle(&self) -> f64 {
        let period = self.tuning.timing.repeat_period_secs.max(f64::EPSILON);
        self.local_secs() / period + noise::hash01(NoiseChannel::Phase, 0, self.seed)
    }

    /// Fraction of the current cycle in `[0, 1)`.
    pub fn cycle_frac(&self) -> f64 {
        fract(self.cycle())
    }

    /// `sin(TAU · cycle · cycles + shift)`.
    pub fn osc(&self, cycles: f64, shift: f64) -> f64 {
        (TAU * self.cycle() * cycles + shift).sin()
    }

    /// 1 until the fade window, linear to 0 across it, 0 afterwards.
    pub fn fade(&self) -> f64 {
        let t = &self.tuning.timing;
        let span = t.fade_end_secs - t.fade_start_secs;
        if span <= 0.0 {
            return if self.local_secs() < t.fade_end_secs {
                1.0
            } else {
                0.0
            };
        }
        1.0 - ((self.local_secs() - t.fade_start_secs) / span).clamp(0.0, 1.0)
    }

    /// Reference-pixel amplitude scaled to output pixels and faded.
    pub fn amp(&self, px: f64) -> f64 {
        px * self.base_unit * self.fade()
    }

    /// Reference pixels scaled to output pixels, without fading.
    pub fn px(&self, px: f64) -> f64 {
        px * self.base_unit
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/context.rs"]
mod tests;
