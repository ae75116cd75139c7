//! Kinetext computes what a caption overlay looks like on any given frame.
//!
//! Given a background reference, an ordered list of captions, a style and a set of
//! effect names, the engine answers one question per frame: which caption is on
//! screen, where, how transformed, with what shadows, filters, ghost layers and
//! opacity. Painting and encoding are left to an external compositor.
//!
//! # Pipeline overview
//!
//! 1. **Compile**: `OverlayRequest -> Overlay` (validate, lay out scenes, resolve flags and bands)
//! 2. **Sequence**: `FrameIndex -> ActiveScene` (caption window, scene-local frame, seed)
//! 3. **Evaluate**: `EffectFlags + EffectCtx -> EffectValues` (one contribution per effect, folded)
//! 4. **Assemble**: clamp offsets, compose the transform, emit a `RenderContract`
//!
//! Every step is a pure function of its inputs. Frames can be computed in any order,
//! on any thread, and always come out bit-identical.
#![forbid(unsafe_code)]

mod animation;
mod effects;
mod foundation;
mod layout;
mod overlay;
mod render;
mod scene;
mod transform;

pub use animation::ease::Ease;
pub use animation::noise::{NoiseChannel, Rng64, hash01, signed, value01};
pub use effects::catalog::{EffectFlags, EffectKind, EffectSet, resolve_flags};
pub use effects::context::EffectCtx;
pub use effects::registry::{ContributionFn, compute_effect_values, contribution, contribution_fn};
pub use effects::tuning::{
    BandTuning, ClampTuning, EffectTuning, TimingTuning, Tuning, YEnvelope,
};
pub use effects::values::{
    Contribution, EffectValues, FilterOp, GhostBlend, GhostLayer, GhostRole, Reveal, ShadowLayer,
};
pub use foundation::color::Color;
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, REFERENCE_WIDTH_PX, Vec2,
};
pub use foundation::error::{KinetextError, KinetextResult};
pub use layout::clamp::{ClampEnvelope, clamp_offset};
pub use layout::position::{Band, TextPosition, resolve_band};
pub use overlay::compiled::Overlay;
pub use overlay::model::{MediaRef, OverlayRequest, StyleConfig};
pub use render::contract::{Anchor, FontSpec, RenderContract, assemble_contract};
pub use render::plan::{OverlayPlan, PlanStats, PlanThreading, plan_frames};
pub use scene::sequencer::{
    ActiveScene, SceneSequencer, TextScene, entrance_scale, envelope_opacity,
};
pub use transform::ops::{TransformOp, TransformParts, compose_transform, flatten_to_affine, to_css};
