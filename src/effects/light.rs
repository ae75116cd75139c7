//! Halo, extrusion and opacity-flicker effects.

use smallvec::SmallVec;

use crate::{
    animation::noise::{self, NoiseChannel},
    effects::{
        context::EffectCtx,
        values::{Contribution, ShadowLayer},
    },
};

pub(crate) fn glow(ctx: &EffectCtx<'_>) -> Contribution {
    let radii = ctx.tuning.effects.glow_radii;
    Contribution {
        shadows: halos(ctx, &radii),
        ..Contribution::default()
    }
}

pub(crate) fn pulse(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let swing = 1.0 + e.pulse_depth * ctx.osc(1.0, 0.0) * ctx.fade();
    let r = e.pulse_radius * swing;
    Contribution {
        shadows: halos(ctx, &[r, 2.0 * r]),
        ..Contribution::default()
    }
}

pub(crate) fn neon(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let n = noise::value01(NoiseChannel::Neon, ctx.frame_f64() * e.neon_rate, ctx.seed + 7.0);
    Contribution {
        shadows: halos(ctx, &e.neon_radii),
        opacity: if n > e.neon_flicker_threshold {
            e.neon_flicker_opacity
        } else {
            1.0
        },
        ..Contribution::default()
    }
}

/// Staircase of progressively darker copies along a fixed direction.
pub(crate) fn extrude(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let steps = e.extrude_steps.max(1);
    let (sin, cos) = e.extrude_angle_deg.to_radians().sin_cos();
    let shadows = (1..=steps)
        .map(|i| {
            let k = f64::from(i);
            let d = ctx.px(e.extrude_step_px) * k;
            ShadowLayer {
                dx: d * cos,
                dy: d * sin,
                blur: 0.0,
                color: ctx
                    .glow_color
                    .darken(e.extrude_max_darken * k / f64::from(steps)),
            }
        })
        .collect();
    Contribution {
        shadows,
        ..Contribution::default()
    }
}

/// Rare single-frame opacity drop.
pub(crate) fn strobe(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let roll = noise::hash01(NoiseChannel::Strobe, ctx.frame.0 as i64, ctx.seed);
    Contribution {
        opacity: if roll < e.strobe_chance {
            e.strobe_opacity
        } else {
            1.0
        },
        ..Contribution::default()
    }
}

fn halos(ctx: &EffectCtx<'_>, radii: &[f64]) -> SmallVec<[ShadowLayer; 5]> {
    radii
        .iter()
        .map(|r| ShadowLayer::halo(ctx.px(*r), ctx.glow_color))
        .collect()
}
