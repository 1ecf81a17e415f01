// ─────────────────────────────────────────────────────────────────────
// Harmonic Circle Kernel — Longitude Reduction
// ─────────────────────────────────────────────────────────────────────
//! Degrees → (cos λ, sin λ) with exact zeros on the axis-aligned
//! longitudes that downstream code tests for.

/// Reduce a longitude in degrees to the half-open range [-180, 180).
///
/// `%` on `f64` is the exact IEEE remainder, so whole turns are removed
/// without round-off and `lon` and `lon + 360k` reduce to the same value.
/// A zero remainder is always `+0.0`, whatever the sign of `lon`.
#[inline]
pub fn reduce_degrees(lon: f64) -> f64 {
    let x = lon % 360.0 + 0.0;
    if x >= 180.0 {
        x - 360.0
    } else if x < -180.0 {
        x + 360.0
    } else {
        x
    }
}

/// Cosine and sine of a longitude given in degrees.
///
/// After reduction, `cos` is exactly 0 at ±90° and `sin` is exactly 0
/// at -180° (which is also where +180° lands).
#[inline]
pub fn cossin(lon: f64) -> (f64, f64) {
    let x = reduce_degrees(lon);
    let (s, c) = x.to_radians().sin_cos();
    let cos = if x.abs() == 90.0 { 0.0 } else { c };
    let sin = if x == -180.0 { 0.0 } else { s };
    (cos, sin)
}
