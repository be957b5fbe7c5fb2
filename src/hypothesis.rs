//! Significance decisions against user-supplied critical values.
//!
//! The critical values come from tables the user looks up, so they arrive
//! as free text. A blank or unparsable value means no decision is made for
//! that test.
//!
//! - Coefficients: reject H₀: βⱼ = 0 when `|t| > t_crit`.
//! - Overall model: reject H₀: β₁ = … = 0 when `F > F_crit`.
//!
//! # Examples
//!
//! ```
//! use u_linreg::calculate_simple_regression;
//! use u_linreg::hypothesis::{CriticalValues, Decision, HypothesisReport};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.1, 3.9, 6.1, 7.9, 10.1];
//! let result = calculate_simple_regression(&y, &x);
//! let report = HypothesisReport::evaluate(&result, &CriticalValues::parse("3.182", "10.13"));
//! assert_eq!(report.model, Some(Decision::Reject));
//! assert_eq!(report.coefficients[1].decision, Decision::Reject);
//! ```

use std::fmt;

use serde::Serialize;

use crate::regression::{CoefficientName, RegressionResult};

/// Outcome of a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    Reject,
    FailToReject,
}

impl Decision {
    fn from_rejected(rejected: bool) -> Self {
        if rejected {
            Decision::Reject
        } else {
            Decision::FailToReject
        }
    }

    pub fn is_reject(self) -> bool {
        self == Decision::Reject
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Reject => f.write_str("Reject H₀"),
            Decision::FailToReject => f.write_str("Fail to Reject H₀"),
        }
    }
}

/// Two-sided coefficient test: reject when `|t| > t_crit`.
pub fn t_test(t: f64, t_crit: f64) -> Decision {
    Decision::from_rejected(t.abs() > t_crit)
}

/// Overall F-test: reject when `F > f_crit`.
pub fn f_test(f: f64, f_crit: f64) -> Decision {
    Decision::from_rejected(f > f_crit)
}

/// Critical values for the t- and F-tests, each optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CriticalValues {
    pub t: Option<f64>,
    pub f: Option<f64>,
}

impl CriticalValues {
    /// Parses the two free-text fields. Blank, malformed, and non-finite
    /// entries count as absent.
    pub fn parse(t_text: &str, f_text: &str) -> Self {
        Self {
            t: parse_critical(t_text),
            f: parse_critical(f_text),
        }
    }
}

fn parse_critical(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decision for one coefficient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoefficientDecision {
    pub name: CoefficientName,
    pub t_statistic: f64,
    pub decision: Decision,
}

/// All decisions for a fitted model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HypothesisReport {
    /// F-test decision; `None` without an F critical value.
    pub model: Option<Decision>,
    /// One entry per coefficient; empty without a t critical value.
    pub coefficients: Vec<CoefficientDecision>,
}

impl HypothesisReport {
    pub fn evaluate(result: &RegressionResult, critical: &CriticalValues) -> Self {
        let model = critical
            .f
            .map(|f_crit| f_test(result.inference().f_statistic, f_crit));
        let coefficients = match critical.t {
            Some(t_crit) => result
                .coefficients()
                .iter()
                .map(|c| CoefficientDecision {
                    name: c.name,
                    t_statistic: c.t_statistic,
                    decision: t_test(c.t_statistic, t_crit),
                })
                .collect(),
            None => Vec::new(),
        };
        Self {
            model,
            coefficients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate_simple_regression;

    #[test]
    fn t_test_is_two_sided() {
        assert_eq!(t_test(-3.0, 2.0), Decision::Reject);
        assert_eq!(t_test(3.0, 2.0), Decision::Reject);
        assert_eq!(t_test(2.0, 2.0), Decision::FailToReject);
        assert_eq!(t_test(0.0, 1.0), Decision::FailToReject);
    }

    #[test]
    fn f_test_is_one_sided() {
        assert_eq!(f_test(5.0, 4.0), Decision::Reject);
        assert_eq!(f_test(4.0, 4.0), Decision::FailToReject);
    }

    #[test]
    fn critical_values_parse() {
        let c = CriticalValues::parse(" 2.776 ", "abc");
        assert_eq!(c.t, Some(2.776));
        assert_eq!(c.f, None);
        assert_eq!(CriticalValues::parse("", "NaN"), CriticalValues::default());
    }

    #[test]
    fn infinite_critical_values_are_absent() {
        assert_eq!(
            CriticalValues::parse("inf", "infinity"),
            CriticalValues::default()
        );
        assert_eq!(CriticalValues::parse("-inf", " +Infinity ").t, None);
        // An infinite F critical value would otherwise never reject.
        let r = crate::calculate_simple_regression(
            &[2.1, 3.9, 6.1, 7.9, 10.1],
            &[1.0, 2.0, 3.0, 4.0, 5.0],
        );
        let report = HypothesisReport::evaluate(&r, &CriticalValues::parse("inf", "inf"));
        assert_eq!(report.model, None);
        assert!(report.coefficients.is_empty());
    }

    #[test]
    fn decision_display() {
        assert_eq!(Decision::Reject.to_string(), "Reject H₀");
        assert_eq!(Decision::FailToReject.to_string(), "Fail to Reject H₀");
    }

    #[test]
    fn weak_fit_fails_to_reject() {
        let r = calculate_simple_regression(&[6.0, 4.0, 3.0, 5.0], &[1.0, 2.0, 3.0, 4.0]);
        let report = HypothesisReport::evaluate(&r, &CriticalValues::parse("4.303", "18.51"));
        assert_eq!(report.model, Some(Decision::FailToReject));
        assert_eq!(report.coefficients.len(), 2);
        assert_eq!(report.coefficients[1].name, CoefficientName::X);
        assert!(!report.coefficients[1].decision.is_reject());
        // Intercept t = 5.5 / √3.15 ≈ 3.10 < 4.303
        assert!(!report.coefficients[0].decision.is_reject());
    }

    #[test]
    fn missing_critical_values_skip_tests() {
        let r = calculate_simple_regression(&[6.0, 4.0, 3.0, 5.0], &[1.0, 2.0, 3.0, 4.0]);
        let report = HypothesisReport::evaluate(&r, &CriticalValues::default());
        assert!(report.model.is_none());
        assert!(report.coefficients.is_empty());
    }
}
