//! Post-estimation statistics shared by both solvers.
//!
//! Given the observed response, the fitted values, and the total sum of
//! squares, derives the ANOVA decomposition, goodness of fit, residual
//! variance, F-statistic, and per-coefficient standard errors and
//! t-statistics.
//!
//! With `p` estimated parameters and `n` observations, the residual degrees
//! of freedom are `n - p`. Statistics that divide by them fall back to 0
//! when `n ≤ p`.

use super::result::{Anova, Coefficient, CoefficientName, Inference};

/// A point estimate paired with the factor `v` such that `Var(β̂) = σ²·v`.
///
/// For the multiple model `v` is the matching diagonal entry of `(XᵗX)⁻¹`;
/// the simple model supplies the closed-form equivalents. A factor of 0
/// marks an undefined standard error.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Estimate {
    pub name: CoefficientName,
    pub value: f64,
    pub variance_factor: f64,
}

/// ESS = Σ(ŷᵢ - ȳ)².
pub fn explained_sum_squares(fitted: &[f64], mean_y: f64) -> f64 {
    fitted.iter().map(|&f| (f - mean_y).powi(2)).sum()
}

/// RSS = Σ(yᵢ - ŷᵢ)².
pub fn residual_sum_squares(y: &[f64], fitted: &[f64]) -> f64 {
    y.iter()
        .zip(fitted.iter())
        .map(|(&yi, &fi)| (yi - fi).powi(2))
        .sum()
}

/// R² = ESS / TSS, or 0 when TSS = 0.
pub fn r_squared(ess: f64, tss: f64) -> f64 {
    if tss != 0.0 {
        ess / tss
    } else {
        0.0
    }
}

/// 1 - (RSS/(n-p)) / (TSS/(n-1)), or 0 when n ≤ p.
pub fn adjusted_r_squared(rss: f64, tss: f64, n: usize, p: usize) -> f64 {
    if n > p {
        let nf = n as f64;
        1.0 - (rss / (nf - p as f64)) / (tss / (nf - 1.0))
    } else {
        0.0
    }
}

/// σ² = RSS/(n-p), or 0 when n ≤ p.
pub fn residual_variance(rss: f64, n: usize, p: usize) -> f64 {
    if n > p {
        rss / (n - p) as f64
    } else {
        0.0
    }
}

/// F = (ESS/(p-1)) / (RSS/(n-p)), or 0 when RSS = 0 or n ≤ p.
pub fn f_statistic(ess: f64, rss: f64, n: usize, p: usize) -> f64 {
    if rss > 0.0 && n > p {
        (ess / (p - 1) as f64) / (rss / (n - p) as f64)
    } else {
        0.0
    }
}

/// value / SE, or 0 when SE = 0.
pub fn t_statistic(value: f64, std_error: f64) -> f64 {
    if std_error != 0.0 {
        value / std_error
    } else {
        0.0
    }
}

/// Renders `Ŷ = b₀ ± |b₁|X₁ ± ...` with `precision` decimals.
///
/// # Examples
///
/// ```
/// use u_linreg::regression::inference::format_equation;
///
/// assert_eq!(format_equation(5.5, &[(-0.4, "X")], 4), "Ŷ = 5.5000 - 0.4000X");
/// assert_eq!(
///     format_equation(1.0, &[(2.0, "X₁"), (-3.25, "X₂")], 2),
///     "Ŷ = 1.00 + 2.00X₁ - 3.25X₂"
/// );
/// ```
pub fn format_equation(intercept: f64, terms: &[(f64, &str)], precision: usize) -> String {
    let mut equation = format!("Ŷ = {:.*}", precision, intercept);
    for &(value, symbol) in terms {
        let sign = if value >= 0.0 { '+' } else { '-' };
        equation.push_str(&format!(" {} {:.*}{}", sign, precision, value.abs(), symbol));
    }
    equation
}

/// Derives the full [`Inference`] block for a fitted model.
///
/// `estimates` must be intercept first; its length is the parameter count.
pub(crate) fn derive(
    y: &[f64],
    fitted: &[f64],
    mean_y: f64,
    tss: f64,
    estimates: &[Estimate],
    precision: usize,
) -> Inference {
    let n = y.len();
    let p = estimates.len();

    let ess = explained_sum_squares(fitted, mean_y);
    let rss = residual_sum_squares(y, fitted);
    let sigma2 = residual_variance(rss, n, p);

    let coefficients = estimates
        .iter()
        .map(|e| {
            let std_error = (sigma2 * e.variance_factor).max(0.0).sqrt();
            Coefficient {
                name: e.name,
                value: e.value,
                std_error,
                t_statistic: t_statistic(e.value, std_error),
            }
        })
        .collect();

    let terms: Vec<(f64, &str)> = estimates[1..]
        .iter()
        .map(|e| (e.value, e.name.symbol()))
        .collect();

    Inference {
        equation: format_equation(estimates[0].value, &terms, precision),
        anova: Anova { tss, ess, rss },
        r_squared: r_squared(ess, tss),
        adjusted_r_squared: adjusted_r_squared(rss, tss, n, p),
        sigma2,
        f_statistic: f_statistic(ess, rss, n, p),
        coefficients,
    }
}
