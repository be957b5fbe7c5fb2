//! Result records returned by the solvers.
//!
//! A fit is either [`RegressionResult::Simple`] or
//! [`RegressionResult::Multiple`]; both carry the same [`Inference`] block.
//! Only the simple model reports deviation sums.

use std::fmt;

use serde::Serialize;

use crate::error::{LinregResult, RegressionError};

/// Which model to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// One predictor: Ŷ = b₀ + b₁X.
    Simple,
    /// Two predictors: Ŷ = b₀ + b₁X₁ + b₂X₂.
    Multiple,
}

impl ModelType {
    /// Number of estimated parameters, intercept included.
    pub fn parameter_count(self) -> usize {
        match self {
            ModelType::Simple => 2,
            ModelType::Multiple => 3,
        }
    }

    /// Number of predictors, intercept excluded.
    pub fn predictor_count(self) -> usize {
        self.parameter_count() - 1
    }
}

/// Identifies a model parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CoefficientName {
    Intercept,
    /// The single predictor of the simple model.
    X,
    X1,
    X2,
}

impl CoefficientName {
    /// Suffix used in the fitted equation (empty for the intercept).
    pub fn symbol(self) -> &'static str {
        match self {
            CoefficientName::Intercept => "",
            CoefficientName::X => "X",
            CoefficientName::X1 => "X₁",
            CoefficientName::X2 => "X₂",
        }
    }
}

impl fmt::Display for CoefficientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoefficientName::Intercept => f.write_str("Intercept"),
            other => f.write_str(other.symbol()),
        }
    }
}

/// An estimated parameter with its inference statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coefficient {
    pub name: CoefficientName,
    /// Point estimate.
    pub value: f64,
    /// Standard error (0 when undefined).
    pub std_error: f64,
    /// t-statistic for H₀: β = 0 (0 when the standard error is 0).
    pub t_statistic: f64,
}

/// ANOVA decomposition of the response variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anova {
    /// Total sum of squares.
    pub tss: f64,
    /// Explained (regression) sum of squares.
    pub ess: f64,
    /// Residual sum of squares.
    pub rss: f64,
}

/// Post-estimation statistics common to both models.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inference {
    /// Fitted equation, e.g. `Ŷ = 5.5000 - 0.4000X`.
    pub equation: String,
    pub anova: Anova,
    /// R² = ESS / TSS.
    pub r_squared: f64,
    /// 1 - (RSS/(n-p)) / (TSS/(n-1)); 0 when n ≤ p.
    pub adjusted_r_squared: f64,
    /// Residual variance σ² = RSS/(n-p); 0 when n ≤ p.
    pub sigma2: f64,
    /// Overall F-statistic; 0 when RSS = 0 or n ≤ p.
    pub f_statistic: f64,
    /// Intercept first, then predictors in input order.
    pub coefficients: Vec<Coefficient>,
}

/// Raw sums of the simple model's data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimpleSums {
    pub sum_y: f64,
    pub sum_x: f64,
    pub sum_y2: f64,
    pub sum_x2: f64,
    pub sum_xy: f64,
    pub mean_y: f64,
    pub mean_x: f64,
}

/// Corrected sums of squares and cross-products.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviationSums {
    /// ΣX² - (ΣX)²/n
    pub sxx: f64,
    /// ΣY² - (ΣY)²/n
    pub syy: f64,
    /// ΣXY - ΣXΣY/n
    pub sxy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleResult {
    pub n: usize,
    pub sums: SimpleSums,
    pub deviations: DeviationSums,
    pub inference: Inference,
}

/// Raw sums of the two-predictor model's data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MultipleSums {
    pub sum_y: f64,
    pub sum_x1: f64,
    pub sum_x2: f64,
    pub sum_y2: f64,
    pub sum_x1_2: f64,
    pub sum_x2_2: f64,
    pub sum_x1y: f64,
    pub sum_x2y: f64,
    pub sum_x1x2: f64,
    pub mean_y: f64,
    pub mean_x1: f64,
    pub mean_x2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultipleResult {
    pub n: usize,
    pub sums: MultipleSums,
    pub inference: Inference,
}

/// Outcome of one successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum RegressionResult {
    Simple(SimpleResult),
    Multiple(MultipleResult),
}

impl RegressionResult {
    pub fn model(&self) -> ModelType {
        match self {
            RegressionResult::Simple(_) => ModelType::Simple,
            RegressionResult::Multiple(_) => ModelType::Multiple,
        }
    }

    /// Sample size.
    pub fn n(&self) -> usize {
        match self {
            RegressionResult::Simple(r) => r.n,
            RegressionResult::Multiple(r) => r.n,
        }
    }

    pub fn inference(&self) -> &Inference {
        match self {
            RegressionResult::Simple(r) => &r.inference,
            RegressionResult::Multiple(r) => &r.inference,
        }
    }

    pub fn coefficients(&self) -> &[Coefficient] {
        &self.inference().coefficients
    }

    pub fn equation(&self) -> &str {
        &self.inference().equation
    }

    pub fn mean_y(&self) -> f64 {
        match self {
            RegressionResult::Simple(r) => r.sums.mean_y,
            RegressionResult::Multiple(r) => r.sums.mean_y,
        }
    }

    /// Evaluates the fitted equation on new predictor data.
    ///
    /// `predictors` holds one slice per predictor, in model order.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_linreg::calculate_simple_regression;
    ///
    /// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let y = [3.0, 5.0, 7.0, 9.0, 11.0];
    /// let model = calculate_simple_regression(&y, &x);
    /// let pred = model.predict(&[&[6.0, 7.0]]).unwrap();
    /// assert!((pred[0] - 13.0).abs() < 1e-10);
    /// assert!((pred[1] - 15.0).abs() < 1e-10);
    /// ```
    pub fn predict(&self, predictors: &[&[f64]]) -> LinregResult<Vec<f64>> {
        let expected = self.model().predictor_count();
        if predictors.len() != expected {
            return Err(RegressionError::PredictorCount {
                expected,
                got: predictors.len(),
            });
        }
        let n = predictors[0].len();
        for (pred, name) in predictors.iter().zip(self.coefficients()[1..].iter()) {
            if pred.len() != n {
                return Err(RegressionError::LengthMismatch {
                    name: name.name.symbol(),
                    y: n,
                    x: pred.len(),
                });
            }
        }

        let coefficients = self.coefficients();
        let mut result = Vec::with_capacity(n);
        for i in 0..n {
            let mut yi = coefficients[0].value;
            for (coeff, pred) in coefficients[1..].iter().zip(predictors) {
                yi += coeff.value * pred[i];
            }
            result.push(yi);
        }
        Ok(result)
    }
}
