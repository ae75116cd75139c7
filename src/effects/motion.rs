//! Planar motion: offsets, planar rotation and scale.

use std::f64::consts::{PI, TAU};

use crate::{
    animation::noise::{self, NoiseChannel},
    effects::{context::EffectCtx, values::Contribution},
    foundation::core::Vec2,
};

pub(crate) fn drift(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let coord = ctx.frame_f64() * e.drift_rate;
    Contribution {
        offset: Vec2::new(
            noise::signed(NoiseChannel::DriftX, coord, ctx.seed) * ctx.amp(e.drift_x),
            noise::signed(NoiseChannel::DriftY, coord, ctx.seed + 100.0) * ctx.amp(e.drift_y),
        ),
        ..Contribution::default()
    }
}

pub(crate) fn wave(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    Contribution {
        offset: Vec2::new(0.0, ctx.osc(e.wave_cycles, 0.0) * ctx.amp(e.wave_y)),
        ..Contribution::default()
    }
}

pub(crate) fn bounce(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    // |sin(πx)| has period 1, so `bounce_cycles` hops per repeat cycle; always upward.
    let hop = (PI * ctx.cycle() * e.bounce_cycles).sin().abs();
    Contribution {
        offset: Vec2::new(0.0, -hop * ctx.amp(e.bounce_y)),
        ..Contribution::default()
    }
}

pub(crate) fn spiral(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let radius = ctx.amp(e.spiral_radius) * (0.5 + 0.5 * ctx.osc(1.0, 0.0));
    let angle = TAU * ctx.cycle() * e.spiral_turns;
    Contribution {
        offset: Vec2::new(angle.cos() * radius, angle.sin() * radius),
        rotate_deg: ctx.osc(1.0, 0.0) * e.spiral_tilt_deg * ctx.fade(),
        ..Contribution::default()
    }
}

pub(crate) fn swing(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let s = ctx.osc(1.0, 0.0);
    Contribution {
        offset: Vec2::new(s * ctx.amp(e.swing_x), 0.0),
        rotate_deg: s * e.swing_deg * ctx.fade(),
        ..Contribution::default()
    }
}

pub(crate) fn slide(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    Contribution {
        offset: Vec2::new(ctx.osc(1.0, 0.0) * ctx.amp(e.slide_x), 0.0),
        ..Contribution::default()
    }
}

pub(crate) fn orbit(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let angle = TAU * ctx.cycle();
    Contribution {
        offset: Vec2::new(
            angle.cos() * ctx.amp(e.orbit_x),
            angle.sin() * ctx.amp(e.orbit_y),
        ),
        ..Contribution::default()
    }
}

pub(crate) fn float(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    Contribution {
        offset: Vec2::new(0.0, ctx.osc(1.0, 0.0) * ctx.amp(e.float_y)),
        rotate_deg: ctx.osc(1.0, 0.5) * e.float_tilt_deg * ctx.fade(),
        ..Contribution::default()
    }
}

pub(crate) fn shake(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let coord = ctx.frame_f64() * e.shake_rate;
    let a = ctx.amp(e.shake);
    Contribution {
        offset: Vec2::new(
            noise::signed(NoiseChannel::ShakeX, coord, ctx.seed) * a,
            noise::signed(NoiseChannel::ShakeY, coord, ctx.seed + 50.0) * a,
        ),
        ..Contribution::default()
    }
}

pub(crate) fn zoom(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    Contribution {
        scale: 1.0 + e.zoom_depth * ctx.osc(1.0, 0.0) * ctx.fade(),
        ..Contribution::default()
    }
}

pub(crate) fn spin(ctx: &EffectCtx<'_>) -> Contribution {
    Contribution {
        rotate_deg: 360.0 * ctx.cycle_frac() * ctx.fade(),
        ..Contribution::default()
    }
}

pub(crate) fn elastic(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let u = ctx.cycle_frac();
    // Damped wobble that is zero at both ends of every cycle.
    let wobble = (TAU * u * e.elastic_cycles).sin() * (1.0 - u).powi(2);
    Contribution {
        scale: 1.0 + e.elastic_depth * wobble * ctx.fade(),
        ..Contribution::default()
    }
}
