/// Fractional part in `[0, 1)`, also for negative inputs.
pub(crate) fn fract(x: f64) -> f64 {
    let f = x - x.floor();
    if f >= 1.0 { 0.0 } else { f }
}

/// Finite-or-zero guard for values that leave the engine.
pub(crate) fn finite_or(x: f64, fallback: f64) -> f64 {
    if x.is_finite() { x } else { fallback }
}

/// Compact decimal for CSS-like strings: at most 3 decimals, no trailing zeros, no `-0`.
pub(crate) fn fmt_num(x: f64) -> String {
    let x = finite_or(x, 0.0);
    let mut s = format!("{x:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
