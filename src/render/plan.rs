use rayon::prelude::*;

use crate::{
    foundation::{
        core::{Canvas, Fps, FrameIndex, FrameRange},
        error::{KinetextError, KinetextResult},
    },
    overlay::{compiled::Overlay, model::MediaRef},
    render::contract::RenderContract,
};

/// Threading and chunking controls for multi-frame planning.
#[derive(Clone, Debug)]
pub struct PlanThreading {
    /// Plan chunks on a rayon pool when `true`.
    pub parallel: bool,
    /// Chunk size in frames.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for PlanThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Aggregated planning counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PlanStats {
    /// Frames requested.
    pub frames_total: u64,
    /// Frames covered by a scene.
    pub frames_with_text: u64,
    /// Chunks processed.
    pub chunks: u64,
}

/// Contracts for every frame in `range`, in frame order.
///
/// Sequential and parallel modes return identical output.
#[tracing::instrument(skip(overlay, threading), fields(start = range.start.0, end = range.end.0, parallel = threading.parallel))]
pub fn plan_frames(
    overlay: &Overlay,
    range: FrameRange,
    threading: &PlanThreading,
) -> KinetextResult<(Vec<Option<RenderContract>>, PlanStats)> {
    if range.is_empty() {
        return Err(KinetextError::validation("plan range must be non-empty"));
    }
    if range.end.0 > overlay.duration_frames() {
        return Err(KinetextError::validation(format!(
            "plan range end {} exceeds overlay duration {}",
            range.end.0,
            overlay.duration_frames()
        )));
    }

    let len = range.len_frames();
    let mut out = Vec::with_capacity(len.min(4096) as usize);
    let mut stats = PlanStats::default();
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| KinetextError::evaluation(format!("invalid chunk range: {e}")))?;
        let contracts = match &pool {
            Some(pool) => plan_chunk_parallel(overlay, chunk, pool),
            None => plan_chunk_sequential(overlay, chunk),
        };

        stats.frames_total += chunk.len_frames();
        stats.frames_with_text += contracts.iter().filter(|c| c.is_some()).count() as u64;
        stats.chunks += 1;
        out.extend(contracts);
        chunk_start = chunk_end;
    }

    tracing::debug!(?stats, "planned frames");
    Ok((out, stats))
}

fn plan_chunk_sequential(overlay: &Overlay, range: FrameRange) -> Vec<Option<RenderContract>> {
    (range.start.0..range.end.0)
        .map(|f| overlay.contract_at(FrameIndex(f)))
        .collect()
}

fn plan_chunk_parallel(
    overlay: &Overlay,
    range: FrameRange,
    pool: &rayon::ThreadPool,
) -> Vec<Option<RenderContract>> {
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| overlay.contract_at(FrameIndex(f)))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> KinetextResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(KinetextError::validation(
            "plan threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| KinetextError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

/// A whole overlay planned end to end, as written by the CLI.
#[derive(Clone, Debug, serde::Serialize)]
pub struct OverlayPlan {
    pub background: MediaRef,
    pub canvas: Canvas,
    pub fps: Fps,
    pub duration: u64,
    pub stats: PlanStats,
    /// One entry per frame; `null` where no caption is on screen.
    pub frames: Vec<Option<RenderContract>>,
}

impl OverlayPlan {
    /// Plan every frame of `overlay`.
    pub fn build(overlay: &Overlay, threading: &PlanThreading) -> KinetextResult<Self> {
        let request = overlay.request();
        let (frames, stats) = if overlay.duration_frames() == 0 {
            (Vec::new(), PlanStats::default())
        } else {
            plan_frames(overlay, overlay.frame_range(), threading)?
        };
        Ok(Self {
            background: request.background.clone(),
            canvas: request.canvas,
            fps: request.fps,
            duration: overlay.duration_frames(),
            stats,
            frames,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
