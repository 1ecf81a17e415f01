// ─────────────────────────────────────────────────────────────────────
// Harmonic Circle Kernel — Circle Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{HarmonicError, HarmonicResult};
use crate::normalization::Normalization;

/// Tolerance on `sin_colat² + cos_colat² = 1` accepted by [`CircleConfig::validate`].
const UNIT_PAIR_TOLERANCE: f64 = 1e-9;

/// Largest series order [`CircleConfig::validate`] accepts.
///
/// Builders allocate `max_order + 1` slots per coefficient array, so an
/// unbounded order read from outside would exhaust memory or overflow.
pub const MAX_ORDER_LIMIT: usize = 1 << 16;

/// Construction parameters for one circle of latitude.
///
/// The circle has radius `sin_colat · point_radius` and lies a distance
/// `cos_colat · point_radius` above the equatorial plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    /// Maximum order M of the series (inclusive).
    pub max_order: usize,

    /// Whether radial and colatitude derivative coefficients are stored.
    pub include_gradient: bool,

    /// Legendre normalization used when the coefficients were generated.
    pub normalization: Normalization,

    /// Overflow-avoidance factor the upstream engine applied to its
    /// coefficients. Recorded only; the outer sum never rescales.
    pub scale: f64,

    /// Reference radius a of the harmonic series.
    pub ref_radius: f64,

    /// Spherical radius r of the points on the circle.
    pub point_radius: f64,

    /// Sine of the spherical colatitude (u).
    pub sin_colat: f64,

    /// Cosine of the spherical colatitude (t).
    pub cos_colat: f64,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            max_order: 0,
            include_gradient: false,
            normalization: Normalization::Full,
            scale: 1.0,
            ref_radius: 1.0,
            point_radius: 1.0,
            sin_colat: 1.0,
            cos_colat: 0.0,
        }
    }
}

impl CircleConfig {
    /// Config for a circle at colatitude `colat_deg` with the given radii.
    pub fn at_colatitude(
        max_order: usize,
        include_gradient: bool,
        ref_radius: f64,
        point_radius: f64,
        colat_deg: f64,
    ) -> Self {
        let (sin_colat, cos_colat) = colat_deg.to_radians().sin_cos();
        Self {
            max_order,
            include_gradient,
            ref_radius,
            point_radius,
            sin_colat,
            cos_colat,
            ..Self::default()
        }
    }

    /// Validate configuration parameters.
    ///
    /// Construction never calls this; it is for callers that accept
    /// circle geometry from outside a trusted engine.
    pub fn validate(&self) -> HarmonicResult<()> {
        if self.max_order > MAX_ORDER_LIMIT {
            return Err(HarmonicError::Config(format!(
                "max_order must be <= {}, got {}",
                MAX_ORDER_LIMIT, self.max_order
            )));
        }
        if !(self.ref_radius.is_finite() && self.ref_radius > 0.0) {
            return Err(HarmonicError::Config(format!(
                "ref_radius must be finite and > 0, got {}",
                self.ref_radius
            )));
        }
        if !(self.point_radius.is_finite() && self.point_radius > 0.0) {
            return Err(HarmonicError::Config(format!(
                "point_radius must be finite and > 0, got {}",
                self.point_radius
            )));
        }
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(HarmonicError::Config(format!(
                "scale must be finite and non-zero, got {}",
                self.scale
            )));
        }
        let norm = self.sin_colat * self.sin_colat + self.cos_colat * self.cos_colat;
        if norm.is_nan() || (norm - 1.0).abs() > UNIT_PAIR_TOLERANCE {
            return Err(HarmonicError::Config(format!(
                "sin_colat² + cos_colat² must equal 1, got {} (sin={}, cos={})",
                norm, self.sin_colat, self.cos_colat
            )));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> HarmonicResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| HarmonicError::Config(format!("JSON parse error: {e}")))
    }
}
