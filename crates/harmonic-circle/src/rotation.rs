// ─────────────────────────────────────────────────────────────────────
// Harmonic Circle Kernel — Order Recurrence
// ─────────────────────────────────────────────────────────────────────
//! (cos mλ, sin mλ) for m = 0, 1, 2, … by angle addition:
//!
//!   cos (m+1)λ = cos mλ · cos λ − sin mλ · sin λ
//!   sin (m+1)λ = sin mλ · cos λ + cos mλ · sin λ
//!
//! One complex multiplication per order and no transcendental calls,
//! so a full outer sum costs O(M) flops. Each step is a rotation, which
//! keeps the phase error linear in m; the magnitude is pulled back to 1
//! every [`RENORM_INTERVAL`] steps.

use crate::longitude::cossin;

/// Steps between re-normalizations of the accumulated pair.
pub const RENORM_INTERVAL: usize = 16;

/// Iterator over `(cos mλ, sin mλ)`, starting at m = 0.
///
/// Never terminates on its own; bound it with `take` or `zip`.
#[derive(Debug, Clone)]
pub struct OrderRotation {
    step: (f64, f64),
    current: (f64, f64),
    order: usize,
}

impl OrderRotation {
    /// Start from a precomputed `(cos λ, sin λ)`.
    ///
    /// The pair is expected to lie on the unit circle; it is used as given.
    pub fn new(cos_lon: f64, sin_lon: f64) -> Self {
        Self {
            step: (cos_lon, sin_lon),
            current: (1.0, 0.0),
            order: 0,
        }
    }

    /// Start from a longitude in degrees.
    pub fn from_degrees(lon: f64) -> Self {
        let (c, s) = cossin(lon);
        Self::new(c, s)
    }

    /// Order of the pair the next call to `next` will yield.
    pub fn order(&self) -> usize {
        self.order
    }
}

impl Iterator for OrderRotation {
    type Item = (f64, f64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current;
        let (cl, sl) = self.step;
        let (c, s) = self.current;
        let mut next = (c * cl - s * sl, s * cl + c * sl);
        self.order += 1;
        if self.order % RENORM_INTERVAL == 0 {
            let h = next.0.hypot(next.1);
            if h > 0.0 {
                next = (next.0 / h, next.1 / h);
            }
        }
        self.current = next;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
