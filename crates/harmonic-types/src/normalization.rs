// ─────────────────────────────────────────────────────────────────────
// Harmonic Circle Kernel — Legendre Normalization Tag
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalization convention of the associated Legendre functions used
/// by the engine that produced a circle's coefficients.
///
/// Carried through for consistency with that engine; the outer sum
/// does not change its arithmetic based on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Fully normalized (geodesy convention, unit mean square over the sphere).
    #[default]
    Full,
    /// Schmidt semi-normalized (geomagnetism convention).
    Schmidt,
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalization::Full => f.write_str("full"),
            Normalization::Schmidt => f.write_str("schmidt"),
        }
    }
}
