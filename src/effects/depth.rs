//! 3D effects: rotation around X/Y and Z translation.

use crate::{
    animation::ease::Ease,
    effects::{context::EffectCtx, values::Contribution},
};

pub(crate) fn rotate3d(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let f = ctx.fade();
    Contribution {
        rotate_x_deg: ctx.osc(1.0, 0.0) * e.rotate3d_x_deg * f,
        rotate_y_deg: ctx.osc(1.0, std::f64::consts::FRAC_PI_2) * e.rotate3d_y_deg * f,
        ..Contribution::default()
    }
}

/// One-shot push from behind the screen plane during the first second.
pub(crate) fn zoom_in(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let rest = 1.0 - entrance(ctx.local_secs(), e.zoom_in_secs);
    Contribution {
        translate_z: -ctx.px(e.zoom_in_depth) * rest,
        ..Contribution::default()
    }
}

/// One-shot flip from lying flat to upright.
pub(crate) fn flip_up(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let rest = 1.0 - entrance(ctx.local_secs(), e.flip_up_secs);
    Contribution {
        rotate_x_deg: e.flip_up_deg * rest,
        translate_z: -ctx.px(e.flip_up_depth) * rest,
        ..Contribution::default()
    }
}

pub(crate) fn spiral3d(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let f = ctx.fade();
    Contribution {
        rotate_y_deg: 360.0 * ctx.cycle_frac() * f,
        rotate_deg: ctx.osc(1.0, 0.0) * e.spiral3d_tilt_deg * f,
        translate_z: ctx.osc(1.0, 0.0) * ctx.amp(e.spiral3d_depth),
        ..Contribution::default()
    }
}

pub(crate) fn wave3d(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let f = ctx.fade();
    Contribution {
        rotate_x_deg: ctx.osc(1.0, 0.0) * e.wave3d_x_deg * f,
        rotate_y_deg: ctx.osc(1.0, std::f64::consts::FRAC_PI_2) * e.wave3d_y_deg * f,
        translate_z: ctx.osc(2.0, 0.0) * ctx.amp(e.wave3d_depth),
        ..Contribution::default()
    }
}

pub(crate) fn tumble(ctx: &EffectCtx<'_>) -> Contribution {
    let e = &ctx.tuning.effects;
    let f = ctx.fade();
    Contribution {
        rotate_x_deg: ctx.osc(1.0, 0.0) * e.tumble_deg * f,
        rotate_y_deg: ctx.osc(1.0, 1.3) * e.tumble_deg * f,
        rotate_deg: ctx.osc(2.0, 0.0) * e.tumble_roll_deg * f,
        translate_z: ctx.osc(1.0, 0.0).abs() * ctx.amp(e.tumble_depth),
        ..Contribution::default()
    }
}

fn entrance(t_secs: f64, over_secs: f64) -> f64 {
    if over_secs <= 0.0 {
        return 1.0;
    }
    Ease::OutCubic.apply(t_secs / over_secs)
}
