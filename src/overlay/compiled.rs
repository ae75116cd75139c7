use crate::{
    effects::{catalog::EffectFlags, tuning::Tuning},
    foundation::{
        core::{FrameIndex, FrameRange},
        error::KinetextResult,
    },
    layout::position::{Band, resolve_band},
    overlay::model::OverlayRequest,
    render::contract::{RenderContract, assemble_contract},
    scene::sequencer::SceneSequencer,
};

/// A validated request with everything frame-independent resolved once.
///
/// Immutable after construction; share it across threads freely.
#[derive(Clone, Debug)]
pub struct Overlay {
    request: OverlayRequest,
    sequencer: SceneSequencer,
    flags: EffectFlags,
    bands: Vec<Band>,
    base_unit: f64,
    duration: u64,
    tuning: Tuning,
}

impl Overlay {
    /// Validate and compile with the stock tuning table.
    pub fn new(request: OverlayRequest) -> KinetextResult<Self> {
        Self::with_tuning(request, Tuning::DEFAULT)
    }

    /// Validate and compile. The request's `scene_secs` overrides the table's.
    #[tracing::instrument(skip(request, tuning), fields(captions = request.captions.len()))]
    pub fn with_tuning(request: OverlayRequest, mut tuning: Tuning) -> KinetextResult<Self> {
        request.validate()?;
        tuning.timing.scene_secs = request.scene_secs;

        let flags = request.effects.flags();
        let sequencer = SceneSequencer::new(request.captions.iter().cloned(), request.fps, tuning.timing);
        let bands = sequencer
            .scenes()
            .iter()
            .map(|s| resolve_band(request.style.text_position, s.seed))
            .collect();
        let duration = request.duration.unwrap_or_else(|| sequencer.total_frames());

        let shown = sequencer
            .scenes()
            .iter()
            .filter(|s| s.range.start.0 < duration)
            .count();
        if shown < sequencer.scenes().len() {
            tracing::debug!(
                shown,
                total = sequencer.scenes().len(),
                duration,
                "scenes beyond the overlay duration are never shown"
            );
        }
        tracing::debug!(?flags, scene_frames = sequencer.scene_frames(), duration, "compiled overlay");

        Ok(Self {
            base_unit: request.canvas.base_unit(),
            request,
            sequencer,
            flags,
            bands,
            duration,
            tuning,
        })
    }

    pub fn request(&self) -> &OverlayRequest {
        &self.request
    }

    pub fn sequencer(&self) -> &SceneSequencer {
        &self.sequencer
    }

    /// Effects resolved from the request's tokens.
    pub fn flags(&self) -> EffectFlags {
        self.flags
    }

    /// Output width ÷ 1080.
    pub fn base_unit(&self) -> f64 {
        self.base_unit
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Rendered length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.duration
    }

    /// `[0, duration)`.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration),
        }
    }

    /// Anchor band of scene `index`, fixed for the scene's whole window.
    pub fn band(&self, index: usize) -> Option<Band> {
        self.bands.get(index).copied()
    }

    /// Render contract for `frame`; `None` past the duration or when no scene covers it.
    pub fn contract_at(&self, frame: FrameIndex) -> Option<RenderContract> {
        assemble_contract(self, frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/compiled.rs"]
mod tests;
