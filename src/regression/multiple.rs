//! Two-predictor regression: Ŷ = b₀ + b₁X₁ + b₂X₂.
//!
//! # Algorithm
//!
//! Builds the design matrix X = [1 | x₁ | x₂], forms the normal equations
//! XᵗXβ = XᵗY and solves them with the closed-form 3×3 inverse:
//!
//! ```text
//! β      = (XᵗX)⁻¹ XᵗY
//! SE(βⱼ) = √(σ² · [(XᵗX)⁻¹]ⱼⱼ)
//! ```
//!
//! A determinant below the singular tolerance (collinear predictors, or
//! fewer than three distinct design rows) is a terminal error.
//!
//! # References
//!
//! Montgomery, Peck & Vining (2012). "Introduction to Linear Regression Analysis", 5th edition.

use tracing::{debug, warn};

use super::inference::{self, Estimate};
use super::result::{CoefficientName, MultipleResult, MultipleSums};
use crate::config::RegressionOptions;
use crate::error::{LinregResult, RegressionError};
use crate::matrix::Matrix;
use crate::summary;

const NAMES: [CoefficientName; 3] = [
    CoefficientName::Intercept,
    CoefficientName::X1,
    CoefficientName::X2,
];

/// Fits the two-predictor model.
///
/// Inputs are assumed to have equal lengths.
///
/// # Errors
///
/// [`RegressionError::SingularDesign`] when XᵗX cannot be inverted, and
/// [`RegressionError::EmptyInput`] for an empty response.
pub(crate) fn fit(
    y: &[f64],
    x1: &[f64],
    x2: &[f64],
    options: &RegressionOptions,
) -> LinregResult<MultipleResult> {
    debug_assert!(x1.len() == y.len() && x2.len() == y.len());
    let n = y.len();
    debug!(n, "fitting multiple regression");

    let mut design = Vec::with_capacity(n * 3);
    for (&a, &b) in x1.iter().zip(x2.iter()) {
        design.extend_from_slice(&[1.0, a, b]);
    }
    let x_mat = Matrix::new(n, 3, design)?;
    let xt = x_mat.transpose();
    let xtx = xt.mul_mat(&x_mat)?;

    let Some(xtx_inv) = xtx.inverse_3x3_with_tolerance(options.singular_tolerance) else {
        let determinant = xtx.determinant_3x3().unwrap_or(0.0);
        warn!(n, determinant, "normal equations are singular");
        return Err(RegressionError::SingularDesign { determinant });
    };

    let xty = xt.mul_mat(&Matrix::column(y))?;
    let beta_col = xtx_inv.mul_mat(&xty)?;
    let beta: Vec<f64> = (0..3).map(|j| beta_col.get(j, 0)).collect();

    let fitted = x_mat.mul_vec(&beta)?;

    let mean_y = summary::mean(y).ok_or(RegressionError::EmptyInput)?;
    let tss = summary::sum_squared_deviations(y, mean_y);

    let estimates: Vec<Estimate> = NAMES
        .iter()
        .zip(beta.iter())
        .zip(xtx_inv.diagonal())
        .map(|((&name, &value), variance_factor)| Estimate {
            name,
            value,
            variance_factor,
        })
        .collect();
    let inference = inference::derive(
        y,
        &fitted,
        mean_y,
        tss,
        &estimates,
        options.equation_precision,
    );

    let sums = MultipleSums {
        sum_y: summary::sum(y),
        sum_x1: summary::sum(x1),
        sum_x2: summary::sum(x2),
        sum_y2: summary::sum_squares(y),
        sum_x1_2: summary::sum_squares(x1),
        sum_x2_2: summary::sum_squares(x2),
        sum_x1y: summary::sum_products(x1, y),
        sum_x2y: summary::sum_products(x2, y),
        sum_x1x2: summary::sum_products(x1, x2),
        mean_y,
        mean_x1: summary::mean(x1).unwrap_or(f64::NAN),
        mean_x2: summary::mean(x2).unwrap_or(f64::NAN),
    };

    Ok(MultipleResult {
        n,
        sums,
        inference,
    })
}
