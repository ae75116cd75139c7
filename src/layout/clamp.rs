use crate::{
    effects::tuning::ClampTuning,
    foundation::{core::Vec2, math::finite_or},
    layout::position::Band,
};

/// Allowed offset box around the anchor, in output pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ClampEnvelope {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ClampEnvelope {
    /// Envelope for `band`, scaled by the base unit.
    pub fn for_band(band: Band, base_unit: f64, clamp: &ClampTuning) -> Self {
        let y = band.y_envelope(clamp);
        Self {
            x_min: -clamp.x * base_unit,
            x_max: clamp.x * base_unit,
            y_min: -y.up * base_unit,
            y_max: y.down * base_unit,
        }
    }

    /// Clamp each axis independently.
    pub fn apply(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            finite_or(offset.x, 0.0).clamp(self.x_min, self.x_max),
            finite_or(offset.y, 0.0).clamp(self.y_min, self.y_max),
        )
    }

    /// Whether `offset` already lies inside the envelope.
    pub fn contains(&self, offset: Vec2) -> bool {
        (self.x_min..=self.x_max).contains(&offset.x) && (self.y_min..=self.y_max).contains(&offset.y)
    }
}

/// Bound a summed positional offset for `band`.
pub fn clamp_offset(offset: Vec2, band: Band, base_unit: f64, clamp: &ClampTuning) -> Vec2 {
    ClampEnvelope::for_band(band, base_unit, clamp).apply(offset)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/clamp.rs"]
mod tests;
