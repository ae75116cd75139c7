use smallvec::SmallVec;

use crate::foundation::{color::Color, core::Vec2, math::fmt_num};

/// One `text-shadow` layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ShadowLayer {
    /// Horizontal offset in output pixels.
    pub dx: f64,
    /// Vertical offset in output pixels.
    pub dy: f64,
    /// Blur radius in output pixels.
    pub blur: f64,
    /// Shadow color.
    pub color: Color,
}

impl ShadowLayer {
    /// Centered halo of the given radius.
    pub fn halo(radius: f64, color: Color) -> Self {
        Self {
            dx: 0.0,
            dy: 0.0,
            blur: radius,
            color,
        }
    }
}

impl std::fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}",
            fmt_num(self.dx),
            fmt_num(self.dy),
            fmt_num(self.blur),
            self.color
        )
    }
}

/// One entry of a CSS-like filter chain.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FilterOp {
    /// Gaussian blur radius in output pixels.
    Blur { px: f64 },
    /// Hue rotation.
    HueRotate { deg: f64 },
    /// Contrast multiplier.
    Contrast { amount: f64 },
    /// Saturation multiplier.
    Saturate { amount: f64 },
    /// Brightness multiplier.
    Brightness { amount: f64 },
}

impl std::fmt::Display for FilterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Blur { px } => write!(f, "blur({}px)", fmt_num(px)),
            Self::HueRotate { deg } => write!(f, "hue-rotate({}deg)", fmt_num(deg)),
            Self::Contrast { amount } => write!(f, "contrast({})", fmt_num(amount)),
            Self::Saturate { amount } => write!(f, "saturate({})", fmt_num(amount)),
            Self::Brightness { amount } => write!(f, "brightness({})", fmt_num(amount)),
        }
    }
}

/// Which effect produced a ghost layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GhostRole {
    GlitchLeft,
    GlitchRight,
    ChromaticRed,
    ChromaticGreen,
    ChromaticBlue,
}

impl GhostRole {
    fn is_glitch(self) -> bool {
        matches!(self, Self::GlitchLeft | Self::GlitchRight)
    }
}

/// How a ghost layer combines with what is beneath it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GhostBlend {
    /// Channel-wise add (`screen` / `plus-lighter`).
    #[default]
    Additive,
}

/// A tinted copy of the caption drawn behind the main layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GhostLayer {
    pub role: GhostRole,
    pub color: Color,
    /// Offset from the main layer, output pixels.
    pub offset: Vec2,
    pub opacity: f64,
    pub blend: GhostBlend,
}

/// Typewriter state: how many characters show and whether the caret is lit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub chars: usize,
    pub caret: bool,
}

/// What a single effect adds for one frame.
///
/// [`Contribution::default`] is the identity: folding it changes nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Contribution {
    pub offset: Vec2,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub rotate_deg: f64,
    pub translate_z: f64,
    pub scale: f64,
    pub opacity: f64,
    pub shadows: SmallVec<[ShadowLayer; 5]>,
    pub filters: SmallVec<[FilterOp; 2]>,
    pub ghosts: SmallVec<[GhostLayer; 3]>,
    pub glitching: bool,
    pub reveal: Option<Reveal>,
}

impl Default for Contribution {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            rotate_deg: 0.0,
            translate_z: 0.0,
            scale: 1.0,
            opacity: 1.0,
            shadows: SmallVec::new(),
            filters: SmallVec::new(),
            ghosts: SmallVec::new(),
            glitching: false,
            reveal: None,
        }
    }
}

/// All effect contributions for one frame, folded.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EffectValues {
    /// Summed planar offset before clamping, output pixels.
    pub offset: Vec2,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub rotate_deg: f64,
    /// Summed Z translation, output pixels (negative is away from the viewer).
    pub translate_z: f64,
    /// Sum of every effect's |Z| magnitude; drives the depth shadow.
    pub depth: f64,
    pub scale: f64,
    /// Product of every effect's opacity multiplier (envelope not included).
    pub opacity: f64,
    pub shadows: Vec<ShadowLayer>,
    pub filters: Vec<FilterOp>,
    pub ghosts: SmallVec<[GhostLayer; 3]>,
    pub glitching: bool,
    /// Displayed caption (typewriter prefix plus caret, or the full text).
    pub text: String,
}

impl EffectValues {
    /// Identity values for `text`.
    pub fn neutral(text: &str) -> Self {
        Self {
            offset: Vec2::ZERO,
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            rotate_deg: 0.0,
            translate_z: 0.0,
            depth: 0.0,
            scale: 1.0,
            opacity: 1.0,
            shadows: Vec::new(),
            filters: Vec::new(),
            ghosts: SmallVec::new(),
            glitching: false,
            text: text.to_owned(),
        }
    }

    /// Comma-joined shadow layers; empty when there are none.
    pub fn text_shadow(&self) -> String {
        self.shadows
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Space-joined filter chain; `"none"` when empty.
    pub fn filter(&self) -> String {
        if self.filters.is_empty() {
            return "none".to_owned();
        }
        self.filters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Keep at most three ghosts. Chromatic layers win; while glitching they are pushed
/// further apart by the glitch ghost spread instead of adding two more layers.
pub(crate) fn merge_ghosts(ghosts: Vec<GhostLayer>) -> SmallVec<[GhostLayer; 3]> {
    let (glitch, mut rest): (Vec<_>, Vec<_>) = ghosts.into_iter().partition(|g| g.role.is_glitch());
    if rest.is_empty() {
        return glitch.into_iter().take(3).collect();
    }

    let spread = glitch
        .iter()
        .map(|g| g.offset.x.abs())
        .fold(0.0_f64, f64::max);
    if spread > 0.0 {
        for g in &mut rest {
            match g.role {
                GhostRole::ChromaticRed => g.offset.x -= spread,
                GhostRole::ChromaticBlue => g.offset.x += spread,
                _ => {}
            }
        }
    }
    rest.into_iter().take(3).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/values.rs"]
mod tests;
