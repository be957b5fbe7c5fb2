//! Simple linear regression: Ŷ = b₀ + b₁X.
//!
//! # Algorithm
//!
//! ```text
//! Sxx = ΣX² - (ΣX)²/n
//! Syy = ΣY² - (ΣY)²/n
//! Sxy = ΣXY - ΣXΣY/n
//! b₁  = Sxy / Sxx          (0 when x is constant)
//! b₀  = ȳ - b₁·x̄
//! ```
//!
//! TSS is taken as Syy.
//!
//! # References
//!
//! Draper & Smith (1998). "Applied Regression Analysis", 3rd edition.

use tracing::{debug, warn};

use super::inference::{self, Estimate};
use super::result::{CoefficientName, DeviationSums, SimpleResult, SimpleSums};
use crate::config::RegressionOptions;
use crate::summary;

/// Fits the one-predictor model.
///
/// Inputs are assumed validated: equal lengths, non-empty. A constant `x`
/// gives Sxx = 0, which yields b₁ = 0 with zero standard errors rather than
/// an error.
pub(crate) fn fit(y: &[f64], x: &[f64], options: &RegressionOptions) -> SimpleResult {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    let nf = n as f64;
    debug!(n, "fitting simple regression");

    let sum_y = summary::sum(y);
    let sum_x = summary::sum(x);
    let sum_y2 = summary::sum_squares(y);
    let sum_x2 = summary::sum_squares(x);
    let sum_xy = summary::sum_products(x, y);

    // Empty input is rejected by validate_inputs; NaN propagates otherwise.
    let mean_y = summary::mean(y).unwrap_or(f64::NAN);
    let mean_x = summary::mean(x).unwrap_or(f64::NAN);

    // The shortcut formulas leave rounding noise for a constant x that is
    // not exactly representable, so a constant predictor is detected directly.
    let constant_x = x.iter().all(|&v| v == x[0]);
    let (sxx, sxy) = if constant_x {
        (0.0, 0.0)
    } else {
        (
            sum_x2 - sum_x * sum_x / nf,
            sum_xy - sum_x * sum_y / nf,
        )
    };
    let syy = sum_y2 - sum_y * sum_y / nf;

    let slope = if sxx != 0.0 {
        sxy / sxx
    } else {
        warn!(n, "predictor has zero variance; slope set to 0");
        0.0
    };
    let intercept = mean_y - slope * mean_x;

    let fitted: Vec<f64> = x.iter().map(|&xi| intercept + slope * xi).collect();

    // Var(b₀) = σ²(1/n + x̄²/Sxx), Var(b₁) = σ²/Sxx
    let (intercept_factor, slope_factor) = if sxx > 0.0 {
        (1.0 / nf + mean_x * mean_x / sxx, 1.0 / sxx)
    } else {
        (0.0, 0.0)
    };

    let estimates = [
        Estimate {
            name: CoefficientName::Intercept,
            value: intercept,
            variance_factor: intercept_factor,
        },
        Estimate {
            name: CoefficientName::X,
            value: slope,
            variance_factor: slope_factor,
        },
    ];
    let inference = inference::derive(
        y,
        &fitted,
        mean_y,
        syy,
        &estimates,
        options.equation_precision,
    );

    SimpleResult {
        n,
        sums: SimpleSums {
            sum_y,
            sum_x,
            sum_y2,
            sum_x2,
            sum_xy,
            mean_y,
            mean_x,
        },
        deviations: DeviationSums { sxx, syy, sxy },
        inference,
    }
}
