// ─────────────────────────────────────────────────────────────────────
// Harmonic Circle Kernel — Evaluation Result Types
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Cartesian gradient of the harmonic sum.
///
/// Components are in the geocentric frame: x toward longitude 0 on the
/// equator, y toward longitude 90°, z along the polar axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gradient {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Gradient {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean magnitude.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Gradient {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Value of the sum at one longitude, with its gradient when the circle
/// was built with derivative coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleValue {
    /// The harmonic sum V.
    pub value: f64,
    /// ∇V, or `None` for a circle built without gradient data.
    pub gradient: Option<Gradient>,
}

impl CircleValue {
    pub fn value_only(value: f64) -> Self {
        Self {
            value,
            gradient: None,
        }
    }

    pub fn with_gradient(value: f64, gradient: Gradient) -> Self {
        Self {
            value,
            gradient: Some(gradient),
        }
    }
}
