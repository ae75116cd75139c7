//! The caption transform as an explicit, fixed-order operation list.

use crate::foundation::{
    core::{Affine, Vec2},
    math::fmt_num,
};

/// One transform step. Lists apply left to right, CSS style.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformOp {
    /// Move the text box so its own center sits on the anchor.
    CenterOnAnchor,
    /// Planar offset in output pixels.
    Translate { x: f64, y: f64 },
    /// Depth offset in output pixels; negative is away from the viewer.
    TranslateZ { z: f64 },
    RotateX { deg: f64 },
    RotateY { deg: f64 },
    /// Planar rotation.
    Rotate { deg: f64 },
    Scale { s: f64 },
}

impl std::fmt::Display for TransformOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::CenterOnAnchor => f.write_str("translate(-50%, -50%)"),
            Self::Translate { x, y } => write!(f, "translate({}px, {}px)", fmt_num(x), fmt_num(y)),
            Self::TranslateZ { z } => write!(f, "translateZ({}px)", fmt_num(z)),
            Self::RotateX { deg } => write!(f, "rotateX({}deg)", fmt_num(deg)),
            Self::RotateY { deg } => write!(f, "rotateY({}deg)", fmt_num(deg)),
            Self::Rotate { deg } => write!(f, "rotate({}deg)", fmt_num(deg)),
            Self::Scale { s } => write!(f, "scale({})", fmt_num(s)),
        }
    }
}

/// Inputs to [`compose_transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformParts {
    pub offset: Vec2,
    pub translate_z: f64,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub rotate_deg: f64,
    pub scale: f64,
}

/// Build the op list: center → offset → Z → rotateX → rotateY → rotate → scale.
///
/// Centering comes first so every rotation and the scale pivot on the text's own center.
pub fn compose_transform(parts: TransformParts) -> Vec<TransformOp> {
    vec![
        TransformOp::CenterOnAnchor,
        TransformOp::Translate {
            x: parts.offset.x,
            y: parts.offset.y,
        },
        TransformOp::TranslateZ {
            z: parts.translate_z,
        },
        TransformOp::RotateX {
            deg: parts.rotate_x_deg,
        },
        TransformOp::RotateY {
            deg: parts.rotate_y_deg,
        },
        TransformOp::Rotate {
            deg: parts.rotate_deg,
        },
        TransformOp::Scale { s: parts.scale },
    ]
}

/// Space-joined CSS `transform` value.
pub fn to_css(ops: &[TransformOp]) -> String {
    ops.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten the op list into a 2D affine about the anchor, for compositors without 3D.
///
/// X/Y rotations foreshorten the opposite axis by their cosine; Z depth scales by
/// `perspective / (perspective - z)`. The text-box centering is left to the caller,
/// so the result maps text-center-relative coordinates to anchor-relative ones.
pub fn flatten_to_affine(ops: &[TransformOp], perspective_px: f64) -> Affine {
    let mut out = Affine::IDENTITY;
    for op in ops {
        let step = match *op {
            TransformOp::CenterOnAnchor => Affine::IDENTITY,
            TransformOp::Translate { x, y } => Affine::translate((x, y)),
            TransformOp::TranslateZ { z } => {
                let denom = perspective_px - z;
                if perspective_px > 0.0 && denom > 0.0 {
                    Affine::scale(perspective_px / denom)
                } else {
                    Affine::IDENTITY
                }
            }
            TransformOp::RotateX { deg } => Affine::scale_non_uniform(1.0, deg.to_radians().cos()),
            TransformOp::RotateY { deg } => Affine::scale_non_uniform(deg.to_radians().cos(), 1.0),
            TransformOp::Rotate { deg } => Affine::rotate(deg.to_radians()),
            TransformOp::Scale { s } => Affine::scale(s),
        };
        out *= step;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/transform/ops.rs"]
mod tests;
