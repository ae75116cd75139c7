//! Deterministic value noise keyed by `(channel, coordinate, seed)`.
//!
//! There is no global generator and no wall-clock entropy: every sample is a pure
//! function of its key, so frames can be computed in any order on any thread.

/// Independent noise streams. Two channels never share lattice values for the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseChannel {
    /// Horizontal drift wander.
    DriftX,
    /// Vertical drift wander.
    DriftY,
    /// Glitch trigger.
    Glitch,
    /// Horizontal jitter while glitching.
    GlitchJitter,
    /// Per-frame strobe drop roll.
    Strobe,
    /// Hologram flicker.
    Hologram,
    /// Horizontal shake.
    ShakeX,
    /// Vertical shake.
    ShakeY,
    /// Neon tube flicker.
    Neon,
    /// Per-scene cycle phase offset.
    Phase,
    /// Per-scene random band pick.
    Position,
}

impl NoiseChannel {
    fn salt(self) -> u64 {
        match self {
            Self::DriftX => 0x243F_6A88_85A3_08D3,
            Self::DriftY => 0x1319_8A2E_0370_7344,
            Self::Glitch => 0xA409_3822_299F_31D0,
            Self::GlitchJitter => 0x082E_FA98_EC4E_6C89,
            Self::Strobe => 0x4528_21E6_38D0_1377,
            Self::Hologram => 0xBE54_66CF_34E9_0C6C,
            Self::ShakeX => 0xC0AC_29B7_C97C_50DD,
            Self::ShakeY => 0x3F84_D5B5_B547_0917,
            Self::Neon => 0x9216_D5D9_8979_FB1B,
            Self::Phase => 0xD131_0BA6_98DF_B5AC,
            Self::Position => 0x2FFD_72DB_D01A_DFB7,
        }
    }
}

/// SplitMix64 stream.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Start a stream at `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

fn seed_bits(seed: f64) -> u64 {
    // -0.0 and NaN payloads would otherwise split one logical seed into several streams.
    if seed == 0.0 || !seed.is_finite() {
        0
    } else {
        seed.to_bits()
    }
}

/// Uniform sample in `[0, 1)` for one integer lattice point.
pub fn hash01(channel: NoiseChannel, lattice: i64, seed: f64) -> f64 {
    let key = channel.salt()
        ^ (lattice as u64).wrapping_mul(0xD6E8_FEB8_6659_FD93)
        ^ seed_bits(seed).rotate_left(17);
    Rng64::new(key).next_f64_01()
}

/// Smooth value noise in `[0, 1]`, continuous in `coordinate`.
pub fn value01(channel: NoiseChannel, coordinate: f64, seed: f64) -> f64 {
    let x = if coordinate.is_finite() {
        coordinate
    } else {
        0.0
    };
    let i0 = x.floor();
    let t = x - i0;
    let s = t * t * (3.0 - 2.0 * t);
    let i0 = i0 as i64;

    let a = hash01(channel, i0, seed);
    let b = hash01(channel, i0.wrapping_add(1), seed);
    a + (b - a) * s
}

/// Smooth value noise remapped to `[-1, 1]`.
pub fn signed(channel: NoiseChannel, coordinate: f64, seed: f64) -> f64 {
    value01(channel, coordinate, seed) * 2.0 - 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/noise.rs"]
mod tests;
