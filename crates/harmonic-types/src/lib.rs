// ─────────────────────────────────────────────────────────────────────
// Harmonic Circle Kernel — Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! harmonic circle kernel — the per-longitude outer sum of a
//! spherical-harmonic series evaluated along one circle of latitude.

pub mod config;
pub mod error;
pub mod normalization;
pub mod value;

pub use config::{CircleConfig, MAX_ORDER_LIMIT};
pub use error::{HarmonicError, HarmonicResult};
pub use normalization::Normalization;
pub use value::{CircleValue, Gradient};
