use crate::{
    animation::noise::{self, NoiseChannel},
    effects::tuning::{BandTuning, ClampTuning, YEnvelope},
};

/// Requested vertical placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    /// One band per scene, picked from the scene seed.
    #[default]
    Random,
    Top,
    Center,
    Bottom,
}

/// One of the three fixed anchor bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Top,
    Center,
    Bottom,
}

impl Band {
    /// Vertical anchor as a fraction of frame height.
    pub fn fraction(self, bands: &BandTuning) -> f64 {
        match self {
            Self::Top => bands.top,
            Self::Center => bands.center,
            Self::Bottom => bands.bottom,
        }
    }

    /// Vertical travel envelope for this band.
    pub fn y_envelope(self, clamp: &ClampTuning) -> YEnvelope {
        match self {
            Self::Top => clamp.top,
            Self::Center => clamp.center,
            Self::Bottom => clamp.bottom,
        }
    }
}

/// Resolve a band for a scene. `Random` depends on the seed only, so a scene keeps
/// its band for every frame.
pub fn resolve_band(position: TextPosition, seed: f64) -> Band {
    match position {
        TextPosition::Top => Band::Top,
        TextPosition::Center => Band::Center,
        TextPosition::Bottom => Band::Bottom,
        TextPosition::Random => {
            let u = noise::hash01(NoiseChannel::Position, 0, seed);
            if u < 1.0 / 3.0 {
                Band::Top
            } else if u < 2.0 / 3.0 {
                Band::Center
            } else {
                Band::Bottom
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/position.rs"]
mod tests;
