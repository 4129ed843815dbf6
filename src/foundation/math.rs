pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse lerp of `x` over `[a, b]`, unclamped. Returns `0` when the span is
/// degenerate so callers never divide by zero.
pub(crate) fn inv_lerp(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span == 0.0 { 0.0 } else { (x - a) / span }
}
