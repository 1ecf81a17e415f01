// ─────────────────────────────────────────────────────────────────────
// Harmonic Circle Kernel — Circle Builder
// ─────────────────────────────────────────────────────────────────────
//! Mutable accumulator filled order by order by the inner-sum engine,
//! then frozen into an immutable [`CircularSum`].

use harmonic_types::{CircleConfig, HarmonicError, HarmonicResult};

use crate::circle::{CircularSum, Coefficients, RadiusRatio};

/// Accumulates the per-order inner sums for one circle.
///
/// Coefficient vectors start zero-filled. Each order 0..=M must be
/// assigned (rewrites are allowed) before [`CircleBuilder::freeze`]
/// hands out the evaluator; freezing consumes the builder, so a frozen
/// circle can never be mutated.
#[derive(Debug, Clone)]
pub struct CircleBuilder {
    config: CircleConfig,
    ratio: RadiusRatio,
    coeffs: Coefficients,
    assigned: Vec<bool>,
}

impl CircleBuilder {
    /// Allocate storage for a circle. Geometry is not validated: a zero
    /// `point_radius` simply yields a non-finite q.
    pub fn new(config: &CircleConfig) -> Self {
        log::debug!(
            "circle builder: M={}, gradient={}, norm={}, q={}",
            config.max_order,
            config.include_gradient,
            config.normalization,
            config.ref_radius / config.point_radius
        );
        Self {
            config: config.clone(),
            ratio: RadiusRatio::from_config(config),
            coeffs: Coefficients::zeroed(config.max_order, config.include_gradient),
            assigned: vec![false; config.max_order + 1],
        }
    }

    /// Like [`CircleBuilder::new`] but runs [`CircleConfig::validate`] first.
    pub fn try_new(config: &CircleConfig) -> HarmonicResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Store the cos(mλ) and sin(mλ) coefficients of order `m`.
    ///
    /// # Panics
    ///
    /// If `m > max_order`.
    pub fn set_coefficients(&mut self, m: usize, wc: f64, ws: f64) {
        self.coeffs.wc[m] = wc;
        self.coeffs.ws[m] = ws;
        self.assigned[m] = true;
    }

    /// Store the value coefficients of order `m` together with its radial
    /// (`wrc`, `wrs`) and colatitude (`wtc`, `wts`) derivative coefficients.
    ///
    /// On a circle built without gradient data the derivative arguments
    /// are accepted and dropped, so engines may always pass them.
    ///
    /// # Panics
    ///
    /// If `m > max_order`.
    #[allow(clippy::too_many_arguments)]
    pub fn set_coefficients_with_gradient(
        &mut self,
        m: usize,
        wc: f64,
        ws: f64,
        wrc: f64,
        wrs: f64,
        wtc: f64,
        wts: f64,
    ) {
        self.set_coefficients(m, wc, ws);
        if self.config.include_gradient {
            self.coeffs.wrc[m] = wrc;
            self.coeffs.wrs[m] = wrs;
            self.coeffs.wtc[m] = wtc;
            self.coeffs.wts[m] = wts;
        }
    }

    /// Checked form of [`CircleBuilder::set_coefficients`].
    pub fn try_set_coefficients(&mut self, m: usize, wc: f64, ws: f64) -> HarmonicResult<()> {
        self.check_order(m)?;
        self.set_coefficients(m, wc, ws);
        Ok(())
    }

    /// Checked form of [`CircleBuilder::set_coefficients_with_gradient`].
    #[allow(clippy::too_many_arguments)]
    pub fn try_set_coefficients_with_gradient(
        &mut self,
        m: usize,
        wc: f64,
        ws: f64,
        wrc: f64,
        wrs: f64,
        wtc: f64,
        wts: f64,
    ) -> HarmonicResult<()> {
        self.check_order(m)?;
        self.set_coefficients_with_gradient(m, wc, ws, wrc, wrs, wtc, wts);
        Ok(())
    }

    fn check_order(&self, m: usize) -> HarmonicResult<()> {
        if m > self.config.max_order {
            return Err(HarmonicError::OrderOutOfRange {
                order: m,
                max_order: self.config.max_order,
            });
        }
        Ok(())
    }

    /// Whether order `m` has been assigned. False for `m > max_order`.
    pub fn is_populated(&self, m: usize) -> bool {
        self.assigned.get(m).copied().unwrap_or(false)
    }

    /// Orders not yet assigned, ascending.
    pub fn missing_orders(&self) -> Vec<usize> {
        self.assigned
            .iter()
            .enumerate()
            .filter(|&(_, &done)| !done)
            .map(|(m, _)| m)
            .collect()
    }

    pub fn max_order(&self) -> usize {
        self.config.max_order
    }

    pub fn has_gradient(&self) -> bool {
        self.config.include_gradient
    }

    /// Convert into the read-only evaluator.
    ///
    /// Fails with [`HarmonicError::Incomplete`] if any order was never
    /// assigned. Non-finite coefficients are kept (and logged).
    pub fn freeze(self) -> HarmonicResult<CircularSum> {
        let missing = self.missing_orders();
        if !missing.is_empty() {
            return Err(HarmonicError::Incomplete { missing });
        }
        if !self.coeffs.all_finite() {
            log::warn!(
                "circle frozen with non-finite coefficients (M={}); results will be non-finite",
                self.config.max_order
            );
        }
        log::debug!(
            "circle frozen: M={}, gradient={}, norm={}",
            self.config.max_order,
            self.config.include_gradient,
            self.config.normalization
        );
        Ok(CircularSum::from_parts(self.config, self.ratio, self.coeffs))
    }
}
