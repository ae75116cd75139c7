//! Per-frame render contract: the one declarative description a renderer paints.

use smallvec::SmallVec;

use crate::{
    effects::{
        context::EffectCtx,
        registry::compute_effect_values,
        values::{FilterOp, GhostLayer, ShadowLayer},
    },
    foundation::{
        color::Color,
        core::{Affine, FrameIndex},
        math::finite_or,
    },
    layout::{clamp::clamp_offset, position::Band},
    overlay::compiled::Overlay,
    transform::ops::{TransformOp, TransformParts, compose_transform, flatten_to_affine, to_css},
};

/// Where the text box's center is pinned, in output pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Anchor {
    pub band: Band,
    pub x_px: f64,
    pub y_px: f64,
}

/// Resolved typography.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FontSpec {
    pub family: String,
    /// Output pixels (request size × base unit).
    pub size_px: f64,
    pub color: Color,
}

/// Everything needed to paint the caption layer for one frame.
///
/// Transform, shadow and filter come both structured and as CSS strings so a
/// browser-style compositor and a native one can consume the same contract.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderContract {
    pub frame: FrameIndex,
    /// Index of the active scene.
    pub scene: usize,
    pub local_frame: FrameIndex,
    pub anchor: Anchor,
    pub transform: Vec<TransformOp>,
    pub transform_css: String,
    /// Set only when a 3D effect is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective_px: Option<f64>,
    /// Envelope × every effect multiplier, in `[0, 1]`.
    pub opacity: f64,
    pub shadows: Vec<ShadowLayer>,
    pub text_shadow: String,
    pub filters: Vec<FilterOp>,
    pub filter: String,
    pub text: String,
    pub font: FontSpec,
    pub ghosts: SmallVec<[GhostLayer; 3]>,
    pub glitching: bool,
}

impl RenderContract {
    /// The transform flattened to 2D about the anchor.
    pub fn affine(&self) -> Affine {
        flatten_to_affine(&self.transform, self.perspective_px.unwrap_or(0.0))
    }
}

/// Fold scene timing, effect values, placement and clamping into one contract.
///
/// `None` when `frame` is past the overlay duration or no scene covers it.
pub fn assemble_contract(overlay: &Overlay, frame: FrameIndex) -> Option<RenderContract> {
    if frame.0 >= overlay.duration_frames() {
        return None;
    }
    let sequencer = overlay.sequencer();
    let active = sequencer.scene_at(frame)?;
    let scene = active.scene;
    let request = overlay.request();
    let tuning = overlay.tuning();
    let base_unit = overlay.base_unit();

    let ctx = EffectCtx {
        frame,
        local: active.local,
        seed: scene.seed,
        fps: request.fps,
        base_unit,
        text: &scene.text,
        glow_color: request.style.glow_color,
        tuning,
    };
    let values = compute_effect_values(overlay.flags(), &ctx);

    let band = overlay.band(scene.index)?;
    let offset = clamp_offset(values.offset, band, base_unit, &tuning.clamp);
    let scale = finite_or(sequencer.entrance_scale(active.local) * values.scale, 1.0);
    let transform = compose_transform(TransformParts {
        offset,
        translate_z: values.translate_z,
        rotate_x_deg: values.rotate_x_deg,
        rotate_y_deg: values.rotate_y_deg,
        rotate_deg: values.rotate_deg,
        scale,
    });

    let canvas = request.canvas;
    let anchor = Anchor {
        band,
        x_px: f64::from(canvas.width) * 0.5,
        y_px: f64::from(canvas.height) * band.fraction(&tuning.bands),
    };
    let opacity = (sequencer.opacity(active.local) * values.opacity).clamp(0.0, 1.0);

    Some(RenderContract {
        frame,
        scene: scene.index,
        local_frame: active.local,
        anchor,
        transform_css: to_css(&transform),
        transform,
        perspective_px: overlay
            .flags()
            .any_3d()
            .then(|| tuning.effects.perspective_px * base_unit),
        opacity,
        text_shadow: values.text_shadow(),
        filter: values.filter(),
        shadows: values.shadows,
        filters: values.filters,
        text: values.text,
        font: FontSpec {
            family: request.style.font_family.clone(),
            size_px: request.style.font_size * base_unit,
            color: request.style.base_color,
        },
        ghosts: values.ghosts,
        glitching: values.glitching,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/contract.rs"]
mod tests;
