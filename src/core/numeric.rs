//! Guards for numeric input coming from the host.

/// Returns `value` when finite, otherwise `default`.
pub fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}

/// Clamps a percentage-style fraction into `[0, cap]`, coercing non-finite
/// input to zero.
pub fn clamp_pct(value: f64, cap: f64) -> f64 {
    finite_or(value, 0.0).clamp(0.0, cap.max(0.0))
}

/// Clamps a signed per-tick delta into `[-cap, cap]`.
pub fn clamp_signed(value: f64, cap: f64) -> f64 {
    let cap = cap.abs();
    finite_or(value, 0.0).clamp(-cap, cap)
}
