//! Calculation options.
//!
//! Everything is optional; missing fields fall back to the defaults, so the
//! struct can be embedded in a caller's TOML or JSON configuration.

use serde::{Deserialize, Serialize};

use crate::error::{LinregResult, RegressionError};
use crate::matrix::SINGULAR_TOLERANCE;

/// Options shared by both solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionOptions {
    /// `|det(XᵗX)|` below this value is reported as a singular design.
    /// Default: 1e-12.
    pub singular_tolerance: f64,
    /// Decimal places used when rendering the fitted equation. Default: 4.
    pub equation_precision: usize,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            singular_tolerance: SINGULAR_TOLERANCE,
            equation_precision: 4,
        }
    }
}

impl RegressionOptions {
    /// Checks option ranges, returning the options unchanged when valid.
    pub fn validated(self) -> LinregResult<Self> {
        if !self.singular_tolerance.is_finite() || self.singular_tolerance < 0.0 {
            return Err(RegressionError::InvalidOption {
                name: "singular_tolerance",
                value: self.singular_tolerance,
            });
        }
        Ok(self)
    }
}
