//! Regression analysis.
//!
//! Ordinary least squares for one predictor and two predictors
//! with the ANOVA decomposition, R², adjusted R², residual
//! variance, F-statistic, and coefficient t-statistics derived in
//! [`inference`].
//!
//! # Examples
//!
//! ```
//! use u_linreg::regression::{ModelType, Regression, RegressionInput};
//!
//! let input = RegressionInput::parse("6, 4, 3, 5", "1 2 3 4", "");
//! let result = Regression::default().calculate(ModelType::Simple, &input).unwrap();
//! assert_eq!(result.n(), 4);
//! assert_eq!(result.equation(), "Ŷ = 5.5000 - 0.4000X");
//! ```

pub mod inference;
mod multiple;
mod result;
mod simple;

pub use result::{
    Anova, Coefficient, CoefficientName, DeviationSums, Inference, ModelType, MultipleResult,
    MultipleSums, RegressionResult, SimpleResult, SimpleSums,
};

use crate::config::RegressionOptions;
use crate::error::{LinregResult, RegressionError};
use crate::parse::parse_input;

/// Parsed observations for one calculation.
///
/// `x2` is ignored by the simple model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegressionInput {
    pub y: Vec<f64>,
    pub x1: Vec<f64>,
    pub x2: Vec<f64>,
}

impl RegressionInput {
    pub fn new(y: Vec<f64>, x1: Vec<f64>, x2: Vec<f64>) -> Self {
        Self { y, x1, x2 }
    }

    /// Parses the three free-text input fields.
    pub fn parse(y_text: &str, x1_text: &str, x2_text: &str) -> Self {
        Self {
            y: parse_input(y_text),
            x1: parse_input(x1_text),
            x2: parse_input(x2_text),
        }
    }
}

/// Checks that the inputs can be handed to the solver for `model`.
///
/// # Errors
///
/// - [`RegressionError::EmptyInput`] if Y or X₁ is empty.
/// - [`RegressionError::LengthMismatch`] if X₁ (or, for the multiple model,
///   X₂) differs in length from Y.
pub fn validate_inputs(model: ModelType, input: &RegressionInput) -> LinregResult<()> {
    if input.y.is_empty() || input.x1.is_empty() {
        return Err(RegressionError::EmptyInput);
    }
    if input.y.len() != input.x1.len() {
        return Err(RegressionError::LengthMismatch {
            name: "X",
            y: input.y.len(),
            x: input.x1.len(),
        });
    }
    if model == ModelType::Multiple && input.x2.len() != input.y.len() {
        return Err(RegressionError::LengthMismatch {
            name: "X₂",
            y: input.y.len(),
            x: input.x2.len(),
        });
    }
    Ok(())
}

/// Regression calculator.
///
/// Holds no state besides its options; each call is independent.
#[derive(Debug, Clone, Default)]
pub struct Regression {
    options: RegressionOptions,
}

impl Regression {
    /// Creates a calculator, rejecting out-of-range options.
    pub fn new(options: RegressionOptions) -> LinregResult<Self> {
        Ok(Self {
            options: options.validated()?,
        })
    }

    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// Fits Ŷ = b₀ + b₁X. Inputs must be non-empty and of equal length.
    pub fn simple(&self, y: &[f64], x: &[f64]) -> RegressionResult {
        RegressionResult::Simple(simple::fit(y, x, &self.options))
    }

    /// Fits Ŷ = b₀ + b₁X₁ + b₂X₂. Inputs must be of equal length.
    ///
    /// # Errors
    ///
    /// [`RegressionError::SingularDesign`] when the normal equations have no
    /// unique solution.
    pub fn multiple(&self, y: &[f64], x1: &[f64], x2: &[f64]) -> LinregResult<RegressionResult> {
        multiple::fit(y, x1, x2, &self.options).map(RegressionResult::Multiple)
    }

    /// Validates `input` for `model`, then fits it.
    pub fn calculate(
        &self,
        model: ModelType,
        input: &RegressionInput,
    ) -> LinregResult<RegressionResult> {
        validate_inputs(model, input)?;
        match model {
            ModelType::Simple => Ok(self.simple(&input.y, &input.x1)),
            ModelType::Multiple => self.multiple(&input.y, &input.x1, &input.x2),
        }
    }
}

/// Simple regression with default options.
///
/// # Examples
///
/// ```
/// use u_linreg::calculate_simple_regression;
///
/// let r = calculate_simple_regression(&[6.0, 4.0, 3.0, 5.0], &[1.0, 2.0, 3.0, 4.0]);
/// let c = r.coefficients();
/// assert!((c[0].value - 5.5).abs() < 1e-12);
/// assert!((c[1].value + 0.4).abs() < 1e-12);
/// ```
pub fn calculate_simple_regression(y: &[f64], x: &[f64]) -> RegressionResult {
    Regression::default().simple(y, x)
}

/// Two-predictor regression with default options.
///
/// # Examples
///
/// ```
/// use u_linreg::{calculate_multiple_regression, RegressionError};
///
/// let y = [6.0, 4.0, 3.0, 5.0];
/// let x1 = [1.0, 2.0, 3.0, 4.0];
/// let r = calculate_multiple_regression(&y, &x1, &[2.0, 5.0, 2.0, 6.0]).unwrap();
/// assert_eq!(r.coefficients().len(), 3);
///
/// let err = calculate_multiple_regression(&y, &x1, &x1).unwrap_err();
/// assert!(matches!(err, RegressionError::SingularDesign { .. }));
/// ```
pub fn calculate_multiple_regression(
    y: &[f64],
    x1: &[f64],
    x2: &[f64],
) -> LinregResult<RegressionResult> {
    Regression::default().multiple(y, x1, x2)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn simple_r_squared_bounded(
            data in proptest::collection::vec(-1e3_f64..1e3, 3..=30)
                .prop_flat_map(|x| {
                    let n = x.len();
                    (Just(x), proptest::collection::vec(-1e3_f64..1e3, n..=n))
                })
        ) {
            let (x, y) = data;
            let r = calculate_simple_regression(&y, &x);
            let inf = r.inference();
            if inf.anova.tss > 1e-6 {
                prop_assert!(inf.r_squared >= -1e-9 && inf.r_squared <= 1.0 + 1e-9,
                    "R² = {}", inf.r_squared);
            }
        }

        #[test]
        fn simple_anova_decomposes(
            data in proptest::collection::vec(-1e3_f64..1e3, 3..=30)
                .prop_flat_map(|x| {
                    let n = x.len();
                    (Just(x), proptest::collection::vec(-1e3_f64..1e3, n..=n))
                })
        ) {
            let (x, y) = data;
            let a = calculate_simple_regression(&y, &x).inference().anova;
            let scale = a.tss.abs().max(1.0);
            prop_assert!((a.tss - (a.ess + a.rss)).abs() / scale < 1e-8,
                "TSS = {}, ESS + RSS = {}", a.tss, a.ess + a.rss);
        }

        #[test]
        fn simple_residuals_orthogonal_to_x(
            data in proptest::collection::vec(-1e3_f64..1e3, 5..=30)
                .prop_flat_map(|x| {
                    let n = x.len();
                    (Just(x), proptest::collection::vec(-1e3_f64..1e3, n..=n))
                })
        ) {
            let (x, y) = data;
            let r = calculate_simple_regression(&y, &x);
            let fitted = r.predict(&[x.as_slice()]).expect("predict");
            let residuals: Vec<f64> = y.iter().zip(&fitted).map(|(a, b)| a - b).collect();
            // Σ(xᵢ · eᵢ) should be near zero (OLS normal equation)
            let dot: f64 = x.iter().zip(&residuals).map(|(&xi, &ei)| xi * ei).sum();
            let norm = residuals.iter().map(|e| e * e).sum::<f64>().sqrt();
            let x_norm = x.iter().map(|xi| xi * xi).sum::<f64>().sqrt();
            if norm > 1e-10 && x_norm > 1e-10 {
                prop_assert!((dot / (norm * x_norm)).abs() < 1e-6,
                    "residuals not orthogonal to x: dot={dot}");
            }
        }

        #[test]
        fn multiple_r_squared_bounded(
            x1 in proptest::collection::vec(-1e3_f64..1e3, 8..=20),
            x2_seed in proptest::collection::vec(-1e3_f64..1e3, 8..=20),
            y_seed in proptest::collection::vec(-1e3_f64..1e3, 8..=20),
        ) {
            let n = x1.len().min(x2_seed.len()).min(y_seed.len());
            let x2 = &x2_seed[..n];
            let y = &y_seed[..n];
            let x1 = &x1[..n];
            if let Ok(r) = calculate_multiple_regression(y, x1, x2) {
                let inf = r.inference();
                prop_assert!(inf.r_squared >= -1e-6 && inf.r_squared <= 1.0 + 1e-6,
                    "R² = {}", inf.r_squared);
                let a = inf.anova;
                prop_assert!((a.tss - (a.ess + a.rss)).abs() / a.tss.max(1.0) < 1e-6);
            }
        }
    }
}
