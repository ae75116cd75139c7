/// Easing curves over normalized time `t ∈ [0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Cubic ease-out; one-shot 3D entrances.
    OutCubic,
    /// Spring-like ease-out that overshoots ~10% before settling on 1.
    OutBack,
}

impl Ease {
    /// Map `t` (clamped to `[0, 1]`) through the curve. Endpoints are exact.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::OutBack => {
                if t <= 0.0 {
                    return 0.0;
                }
                if t >= 1.0 {
                    return 1.0;
                }
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u.powi(3) + C1 * u.powi(2)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
