// ─────────────────────────────────────────────────────────────────────
// Harmonic Circle Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for the harmonic circle kernel.
///
/// The summation arithmetic itself never fails; these cover the
/// configuration layer and the builder's checked entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarmonicError {
    /// Invalid circle geometry or series parameters.
    #[error("config error: {0}")]
    Config(String),

    /// A checked setter was called with an order beyond the series maximum.
    #[error("order {order} outside 0..={max_order}")]
    OrderOutOfRange { order: usize, max_order: usize },

    /// Freeze requested before every order received its coefficients.
    #[error("incomplete circle: orders {missing:?} never assigned")]
    Incomplete { missing: Vec<usize> },
}

pub type HarmonicResult<T> = Result<T, HarmonicError>;
