//! Effect registry and the single reducer that folds contributions into [`EffectValues`].

use crate::effects::{
    catalog::{EffectFlags, EffectKind},
    context::EffectCtx,
    depth, distort, light, motion, reveal,
    values::{Contribution, EffectValues, GhostLayer, ShadowLayer, merge_ghosts},
};
use crate::foundation::{color::Color, math::finite_or};

/// A pure per-effect contribution function.
pub type ContributionFn = fn(&EffectCtx<'_>) -> Contribution;

/// Look up the contribution function for a catalog entry.
pub fn contribution_fn(kind: EffectKind) -> ContributionFn {
    match kind {
        EffectKind::Drift => motion::drift,
        EffectKind::Rotate3d => depth::rotate3d,
        EffectKind::Glitch => distort::glitch,
        EffectKind::Strobe => light::strobe,
        EffectKind::Glow => light::glow,
        EffectKind::Pulse => light::pulse,
        EffectKind::Wave => motion::wave,
        EffectKind::Zoom => motion::zoom,
        EffectKind::Blur => distort::blur,
        EffectKind::Chromatic => distort::chromatic,
        EffectKind::Hologram => distort::hologram,
        EffectKind::Pixelate => distort::pixelate,
        EffectKind::Rainbow => distort::rainbow,
        EffectKind::Bounce => motion::bounce,
        EffectKind::Spin => motion::spin,
        EffectKind::Spiral => motion::spiral,
        EffectKind::Swing => motion::swing,
        EffectKind::Slide => motion::slide,
        EffectKind::Orbit => motion::orbit,
        EffectKind::ZoomIn => depth::zoom_in,
        EffectKind::FlipUp => depth::flip_up,
        EffectKind::Spiral3d => depth::spiral3d,
        EffectKind::Wave3d => depth::wave3d,
        EffectKind::Tumble => depth::tumble,
        EffectKind::Extrude => light::extrude,
        EffectKind::Typewriter => reveal::typewriter,
        EffectKind::Shake => motion::shake,
        EffectKind::Neon => light::neon,
        EffectKind::Float => motion::float,
        EffectKind::Elastic => motion::elastic,
    }
}

/// Contribution of a single effect, independent of every other flag.
pub fn contribution(kind: EffectKind, ctx: &EffectCtx<'_>) -> Contribution {
    contribution_fn(kind)(ctx)
}

/// Compute every active effect for one frame and fold the results.
///
/// Pure and total: the same `(flags, ctx)` always yields the same values, and an
/// empty flag set yields [`EffectValues::neutral`].
pub fn compute_effect_values(flags: EffectFlags, ctx: &EffectCtx<'_>) -> EffectValues {
    let mut acc = Reducer::new();
    for kind in flags.kinds() {
        acc.fold(contribution(kind, ctx));
    }
    acc.finish(ctx)
}

struct Reducer {
    values: EffectValues,
    ghosts: Vec<GhostLayer>,
    reveal_chars: Option<(usize, bool)>,
}

impl Reducer {
    fn new() -> Self {
        Self {
            values: EffectValues::neutral(""),
            ghosts: Vec::new(),
            reveal_chars: None,
        }
    }

    fn fold(&mut self, c: Contribution) {
        let v = &mut self.values;
        v.offset += c.offset;
        v.rotate_x_deg += c.rotate_x_deg;
        v.rotate_y_deg += c.rotate_y_deg;
        v.rotate_deg += c.rotate_deg;
        v.translate_z += c.translate_z;
        v.depth += c.translate_z.abs();
        v.scale *= c.scale;
        v.opacity *= c.opacity;
        v.shadows.extend(c.shadows);
        v.filters.extend(c.filters);
        v.glitching |= c.glitching;
        self.ghosts.extend(c.ghosts);
        if let Some(r) = c.reveal {
            self.reveal_chars = Some(match self.reveal_chars {
                Some((chars, caret)) if chars <= r.chars => (chars, caret),
                _ => (r.chars, r.caret),
            });
        }
    }

    fn finish(mut self, ctx: &EffectCtx<'_>) -> EffectValues {
        let e = &ctx.tuning.effects;
        let v = &mut self.values;

        if v.depth > 0.0 {
            // Back to reference pixels so the shadow's darkness is resolution-independent.
            let strength = v.depth / ctx.base_unit.max(f64::EPSILON);
            let d = ctx.px(strength * e.depth_shadow_per_z);
            let alpha = (strength * e.depth_shadow_alpha_per_z).min(e.depth_shadow_max_alpha);
            v.shadows.push(ShadowLayer {
                dx: 0.0,
                dy: d,
                blur: 2.0 * d,
                color: Color::BLACK.with_alpha(alpha),
            });
        }

        v.ghosts = merge_ghosts(self.ghosts);
        v.text = match self.reveal_chars {
            Some((chars, caret)) => {
                let mut s = reveal::prefix(ctx.text, chars).to_owned();
                if caret {
                    s.push('|');
                }
                s
            }
            None => ctx.text.to_owned(),
        };

        v.offset.x = finite_or(v.offset.x, 0.0);
        v.offset.y = finite_or(v.offset.y, 0.0);
        v.rotate_x_deg = finite_or(v.rotate_x_deg, 0.0);
        v.rotate_y_deg = finite_or(v.rotate_y_deg, 0.0);
        v.rotate_deg = finite_or(v.rotate_deg, 0.0);
        v.translate_z = finite_or(v.translate_z, 0.0);
        v.scale = finite_or(v.scale, 1.0);
        v.opacity = finite_or(v.opacity, 1.0).clamp(0.0, 1.0);
        self.values
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/registry.rs"]
mod tests;
