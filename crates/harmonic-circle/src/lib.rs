// ─────────────────────────────────────────────────────────────────────
// Harmonic Circle Kernel — Circular Summation Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Spherical-harmonic sums along a circle of constant latitude and radius.
//!
//! A harmonic sum splits into an inner sum over degree, which depends
//! only on latitude and radius, and an outer sum over order, which
//! carries all the longitude dependence. When many longitudes on the
//! same circle are needed, the inner sums are computed once per order
//! and the outer sum becomes an O(M) Fourier series per point, roughly
//! N/2 times cheaper than a full evaluation at degree N.
//!
//! Architecture:
//!   - `longitude`: degrees → (cos λ, sin λ) with exact axis zeros
//!   - `rotation`: angle-addition recurrence for (cos mλ, sin mλ)
//!   - `CircleBuilder`: zero-filled accumulator populated per order
//!   - `CircularSum`: frozen evaluator, value and Cartesian gradient
//!
//! # Contracts
//!
//! 1. **Populate, freeze, share**: the builder is single-owner and
//!    mutable; `freeze` consumes it and yields a `CircularSum` that is
//!    `Send + Sync` and only ever read.
//!
//! 2. **No error path in the arithmetic**: NaN and Inf in coefficients
//!    or geometry propagate silently into the results.
//!
//! 3. **Gradient arguments are optional**: on a circle built without
//!    gradient data, derivative coefficients passed to the setter are
//!    dropped and gradient queries return `None` for the gradient.

pub mod builder;
pub mod circle;
pub mod longitude;
pub mod rotation;

pub use builder::CircleBuilder;
pub use circle::CircularSum;
pub use harmonic_types::{
    CircleConfig, CircleValue, Gradient, HarmonicError, HarmonicResult, Normalization,
    MAX_ORDER_LIMIT,
};
pub use longitude::{cossin, reduce_degrees};
pub use rotation::OrderRotation;
