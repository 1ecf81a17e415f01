// ─────────────────────────────────────────────────────────────────────
// Harmonic Circle Kernel — Circular Sum Evaluator
// ─────────────────────────────────────────────────────────────────────
//! Outer (order) sum of a spherical-harmonic series on one circle:
//!
//!   V(λ) = Σ_{m=0..M} wc[m] cos mλ + ws[m] sin mλ
//!
//! and, when derivative coefficients are present, its Cartesian
//! gradient. The per-order coefficients are the longitude-independent
//! inner sums over degree, produced once per circle upstream.
//!
//! Derivative coefficients are stored in the inner-sum engine's basis:
//!   - `wrc/wrs` expand q·∂V/∂q (q = a/r, so ∂V/∂r = −R/r)
//!   - `wtc/wts` expand ∂V/∂θ (θ = colatitude)
//!   - ∂V/∂λ = Σ m (ws[m] cos mλ − wc[m] sin mλ), formed here
//!
//! Circular components (r, θ, λ) = (∂V/∂r, r⁻¹ ∂V/∂θ, (r u)⁻¹ ∂V/∂λ)
//! are rotated into the geocentric x, y, z frame.

use harmonic_types::{CircleConfig, CircleValue, Gradient, Normalization};

use crate::longitude::cossin;
use crate::rotation::OrderRotation;

/// The six per-order coefficient vectors of one circle.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Coefficients {
    pub wc: Vec<f64>,
    pub ws: Vec<f64>,
    pub wrc: Vec<f64>,
    pub wrs: Vec<f64>,
    pub wtc: Vec<f64>,
    pub wts: Vec<f64>,
}

impl Coefficients {
    /// Zero-filled: value vectors of length M+1, derivative vectors of
    /// length M+1 only when `gradient` is set.
    pub fn zeroed(max_order: usize, gradient: bool) -> Self {
        let n = max_order + 1;
        let nd = if gradient { n } else { 0 };
        Self {
            wc: vec![0.0; n],
            ws: vec![0.0; n],
            wrc: vec![0.0; nd],
            wrs: vec![0.0; nd],
            wtc: vec![0.0; nd],
            wts: vec![0.0; nd],
        }
    }

    pub fn all_finite(&self) -> bool {
        [&self.wc, &self.ws, &self.wrc, &self.wrs, &self.wtc, &self.wts]
            .iter()
            .all(|v| v.iter().all(|x| x.is_finite()))
    }
}

/// Derived geometry shared by the builder and the evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RadiusRatio {
    /// a / r.
    pub q: f64,
    /// u · q.
    pub uq: f64,
    /// (u · q)².
    pub uq2: f64,
}

impl RadiusRatio {
    pub fn from_config(config: &CircleConfig) -> Self {
        let q = config.ref_radius / config.point_radius;
        let uq = config.sin_colat * q;
        Self { q, uq, uq2: uq * uq }
    }
}

/// Frozen harmonic sum for one circle of latitude.
///
/// Produced only by [`crate::CircleBuilder::freeze`]. All evaluation
/// takes `&self`, so a populated circle can be shared across threads.
#[derive(Debug, Clone)]
pub struct CircularSum {
    config: CircleConfig,
    ratio: RadiusRatio,
    coeffs: Coefficients,
}

impl CircularSum {
    pub(crate) fn from_parts(config: CircleConfig, ratio: RadiusRatio, coeffs: Coefficients) -> Self {
        Self {
            config,
            ratio,
            coeffs,
        }
    }

    /// Sum at a longitude in degrees.
    pub fn value(&self, lon: f64) -> f64 {
        let (cl, sl) = cossin(lon);
        self.value_cs(cl, sl)
    }

    /// Sum at a longitude given by its cosine and sine.
    pub fn value_cs(&self, cos_lon: f64, sin_lon: f64) -> f64 {
        self.evaluate(false, cos_lon, sin_lon).value
    }

    /// Sum and gradient at a longitude in degrees.
    pub fn value_with_gradient(&self, lon: f64) -> CircleValue {
        let (cl, sl) = cossin(lon);
        self.value_with_gradient_cs(cl, sl)
    }

    /// Sum and gradient at a longitude given by its cosine and sine.
    ///
    /// The gradient is `None` when the circle was built without
    /// derivative coefficients.
    pub fn value_with_gradient_cs(&self, cos_lon: f64, sin_lon: f64) -> CircleValue {
        self.evaluate(true, cos_lon, sin_lon)
    }

    /// Sum at each longitude (degrees) in `lons`.
    pub fn values(&self, lons: &[f64]) -> Vec<f64> {
        lons.iter().map(|&lon| self.value(lon)).collect()
    }

    /// Sum at `n` equally spaced longitudes k·360/n, k = 0..n.
    pub fn sample_uniform(&self, n: usize) -> Vec<f64> {
        let step = 360.0 / n as f64;
        (0..n).map(|k| self.value(k as f64 * step)).collect()
    }

    fn evaluate(&self, want_gradient: bool, cos_lon: f64, sin_lon: f64) -> CircleValue {
        let c = &self.coeffs;
        let orders = OrderRotation::new(cos_lon, sin_lon);

        if !(want_gradient && self.config.include_gradient) {
            let v = c
                .wc
                .iter()
                .zip(&c.ws)
                .zip(orders)
                .fold(0.0, |acc, ((&wc, &ws), (cm, sm))| acc + (wc * cm + ws * sm));
            return CircleValue::value_only(v);
        }

        // v: value, vr: q ∂/∂q, vt: ∂/∂θ, vl: ∂/∂λ
        let (mut v, mut vr, mut vt, mut vl) = (0.0, 0.0, 0.0, 0.0);
        for (m, (cm, sm)) in orders.take(c.wc.len()).enumerate() {
            v += c.wc[m] * cm + c.ws[m] * sm;
            vr += c.wrc[m] * cm + c.wrs[m] * sm;
            vt += c.wtc[m] * cm + c.wts[m] * sm;
            vl += m as f64 * (c.ws[m] * cm - c.wc[m] * sm);
        }

        let RadiusRatio { q, uq, .. } = self.ratio;
        let u = self.config.sin_colat;
        let t = self.config.cos_colat;
        // q / a = 1 / r
        let inv_r = q / self.config.ref_radius;
        let g_r = -inv_r * vr;
        let g_t = inv_r * vt;
        // q / uq = 1 / u; non-finite at the poles
        let g_l = inv_r * q * vl / uq;

        let horizontal = u * g_r + t * g_t;
        let gradient = Gradient::new(
            cos_lon * horizontal - sin_lon * g_l,
            sin_lon * horizontal + cos_lon * g_l,
            t * g_r - u * g_t,
        );
        CircleValue::with_gradient(v, gradient)
    }

    pub fn config(&self) -> &CircleConfig {
        &self.config
    }

    pub fn max_order(&self) -> usize {
        self.config.max_order
    }

    pub fn has_gradient(&self) -> bool {
        self.config.include_gradient
    }

    pub fn normalization(&self) -> Normalization {
        self.config.normalization
    }

    /// Scale the upstream engine applied to the coefficients. Not undone here.
    pub fn scale(&self) -> f64 {
        self.config.scale
    }

    pub fn ref_radius(&self) -> f64 {
        self.config.ref_radius
    }

    pub fn point_radius(&self) -> f64 {
        self.config.point_radius
    }

    pub fn sin_colat(&self) -> f64 {
        self.config.sin_colat
    }

    pub fn cos_colat(&self) -> f64 {
        self.config.cos_colat
    }

    /// Radius ratio a / r.
    pub fn q(&self) -> f64 {
        self.ratio.q
    }

    /// sin θ · a / r.
    pub fn uq(&self) -> f64 {
        self.ratio.uq
    }

    /// (sin θ · a / r)².
    pub fn uq2(&self) -> f64 {
        self.ratio.uq2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CircleBuilder;

    fn value_circle(wc: &[f64], ws: &[f64]) -> CircularSum {
        let cfg = CircleConfig {
            max_order: wc.len() - 1,
            ..CircleConfig::default()
        };
        let mut b = CircleBuilder::new(&cfg);
        for m in 0..wc.len() {
            b.set_coefficients(m, wc[m], ws[m]);
        }
        b.freeze().unwrap()
    }

    #[test]
    fn test_zeroed_lengths() {
        let c = Coefficients::zeroed(4, false);
        assert_eq!(c.wc.len(), 5);
        assert_eq!(c.ws.len(), 5);
        assert!(c.wrc.is_empty() && c.wts.is_empty());
        let g = Coefficients::zeroed(4, true);
        assert_eq!(g.wtc.len(), 5);
    }

    #[test]
    fn test_radius_ratio() {
        let cfg = CircleConfig {
            ref_radius: 2.0,
            point_radius: 4.0,
            sin_colat: 0.6,
            cos_colat: 0.8,
            ..CircleConfig::default()
        };
        let r = RadiusRatio::from_config(&cfg);
        assert_eq!(r.q, 0.5);
        assert!((r.uq - 0.3).abs() < 1e-15);
        assert!((r.uq2 - 0.09).abs() < 1e-15);
    }

    #[test]
    fn test_order_zero_constant() {
        let circle = value_circle(&[2.75], &[-4.0]);
        for &lon in &[-180.0, -33.0, 0.0, 12.5, 90.0, 179.0, 400.0] {
            assert_eq!(circle.value(lon), 2.75, "lon={lon}");
        }
    }

    #[test]
    fn test_fourier_series_matches_direct() {
        let wc = [0.5, -1.25, 0.75, 0.1, -0.3];
        let ws = [9.0, 0.4, -0.2, 1.5, 0.05];
        let circle = value_circle(&wc, &ws);
        for i in 0..36 {
            let lon = -175.0 + 10.0 * i as f64;
            let x: f64 = lon.to_radians();
            let direct: f64 = (0..wc.len())
                .map(|m| wc[m] * (m as f64 * x).cos() + ws[m] * (m as f64 * x).sin())
                .sum();
            let v = circle.value(lon);
            assert!((v - direct).abs() < 1e-13, "lon={lon}: {v} vs {direct}");
        }
    }

    #[test]
    fn test_degrees_and_cos_sin_agree() {
        let circle = value_circle(&[1.0, 2.0, 3.0], &[0.0, -1.0, 0.5]);
        let (c, s) = cossin(37.0);
        assert_eq!(circle.value(37.0), circle.value_cs(c, s));
    }

    #[test]
    fn test_gradient_none_without_derivatives() {
        let circle = value_circle(&[1.0, 2.0], &[0.0, 3.0]);
        let out = circle.value_with_gradient(45.0);
        assert_eq!(out.gradient, None);
        assert_eq!(out.value, circle.value(45.0));
    }

    #[test]
    fn test_sample_uniform() {
        let circle = value_circle(&[0.0, 1.0], &[0.0, 0.0]);
        let samples = circle.sample_uniform(4);
        assert_eq!(samples.len(), 4);
        assert_eq!(samples, vec![1.0, 0.0, -1.0, 0.0]);
        assert!(circle.sample_uniform(0).is_empty());
    }

    #[test]
    fn test_values_batch() {
        let circle = value_circle(&[1.0, 0.0], &[0.0, 2.0]);
        let lons = [0.0, 90.0, -90.0];
        assert_eq!(circle.values(&lons), vec![1.0, 3.0, -1.0]);
    }

    #[test]
    fn test_accessors() {
        let cfg = CircleConfig {
            max_order: 3,
            include_gradient: true,
            normalization: Normalization::Schmidt,
            scale: 1e-280,
            ref_radius: 6371.2,
            point_radius: 7000.0,
            ..CircleConfig::default()
        };
        let mut b = CircleBuilder::new(&cfg);
        for m in 0..=3 {
            b.set_coefficients(m, 0.0, 0.0);
        }
        let circle = b.freeze().unwrap();
        assert_eq!(circle.max_order(), 3);
        assert!(circle.has_gradient());
        assert_eq!(circle.normalization(), Normalization::Schmidt);
        assert_eq!(circle.scale(), 1e-280);
        assert_eq!(circle.q(), 6371.2 / 7000.0);
        assert_eq!(circle.uq(), circle.q());
        assert_eq!(circle.uq2(), circle.q() * circle.q());
        assert_eq!(circle.config(), &cfg);
    }
}
