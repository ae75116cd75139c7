//! Filter-chain and ghost-layer effects.

use smallvec::smallvec;

use crate::{
    animation::noise::{self, NoiseChannel},
    effects::{
        context::EffectCtx,
        values::{Contribution, FilterOp, GhostBlend, GhostLayer, GhostRole, ShadowLayer},
    },
    foundation::{color::Color, core::Vec2},
};

const MAGENTA: Color = Color::rgba(1.0, 0.0, 1.0, 1.0);
const CYAN: Color = Color::rgba(0.0, 1.0, 1.0, 1.0);
const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
const GREEN: Color = Color::rgba(0.0, 1.0, 0.0, 1.0);
const BLUE: Color = Color::rgba(0.0, 0.0, 1.0, 1.0);

pub(crate) fn glitch(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let n = noise::value01(NoiseChannel::Glitch, ctx.frame_f64() * e.glitch_rate, ctx.seed);
    if n <= e.glitch_threshold {
        return Contribution::default();
    }

    let jitter = noise::hash01(NoiseChannel::GlitchJitter, ctx.frame.0 as i64, ctx.seed) * 2.0 - 1.0;
    let spread = ctx.px(e.glitch_ghost_offset);
    Contribution {
        offset: Vec2::new(jitter * ctx.px(e.glitch_jitter), 0.0),
        ghosts: smallvec![
            ghost(GhostRole::GlitchLeft, MAGENTA, -spread, e.glitch_ghost_opacity),
            ghost(GhostRole::GlitchRight, CYAN, spread, e.glitch_ghost_opacity),
        ],
        glitching: true,
        ..Contribution::default()
    }
}

pub(crate) fn blur(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let strength = 0.5 - 0.5 * ctx.osc(1.0, std::f64::consts::FRAC_PI_2);
    Contribution {
        filters: smallvec![FilterOp::Blur {
            px: ctx.amp(e.blur_max_px) * strength,
        }],
        ..Contribution::default()
    }
}

pub(crate) fn chromatic(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let m = ctx.amp(e.chromatic_min + e.chromatic_swing * ctx.osc(1.0, 0.0).abs());
    let a = e.chromatic_ghost_opacity;
    Contribution {
        ghosts: smallvec![
            ghost(GhostRole::ChromaticRed, RED, -m, a),
            ghost(GhostRole::ChromaticGreen, GREEN, 0.0, a),
            ghost(GhostRole::ChromaticBlue, BLUE, m, a),
        ],
        ..Contribution::default()
    }
}

pub(crate) fn hologram(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let flicker = noise::value01(NoiseChannel::Hologram, ctx.frame_f64() * e.hologram_rate, ctx.seed);
    Contribution {
        opacity: e.hologram_floor + (1.0 - e.hologram_floor) * flicker,
        shadows: smallvec![ShadowLayer::halo(ctx.px(10.0), CYAN.with_alpha(0.7))],
        filters: smallvec![
            FilterOp::HueRotate {
                deg: e.hologram_hue_deg,
            },
            FilterOp::Brightness { amount: 1.2 },
        ],
        ..Contribution::default()
    }
}

/// Stepped blur plus hard contrast, approximating coarse pixels.
pub(crate) fn pixelate(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let step = (ctx.cycle_frac() * e.pixelate_steps).floor();
    Contribution {
        filters: smallvec![
            FilterOp::Blur {
                px: ctx.px(e.pixelate_min_px + step) * 0.5,
            },
            FilterOp::Contrast {
                amount: e.pixelate_contrast,
            },
        ],
        ..Contribution::default()
    }
}

pub(crate) fn rainbow(ctx: &EffectCtx<'_>) -> Contribution {
    Contribution {
        filters: smallvec![FilterOp::HueRotate {
            deg: 360.0 * ctx.cycle_frac(),
        }],
        ..Contribution::default()
    }
}

fn ghost(role: GhostRole, color: Color, dx: f64, opacity: f64) -> GhostLayer {
    GhostLayer {
        role,
        color,
        offset: Vec2::new(dx, 0.0),
        opacity,
        blend: GhostBlend::Additive,
    }
}
