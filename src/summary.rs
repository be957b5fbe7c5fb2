//! Summary statistics over sample vectors.
//!
//! Raw sums, sums of squares, and cross-products. These are the building
//! blocks of the deviation sums used by the simple solver and of the data
//! summary reported alongside every fit.

/// Σxᵢ.
pub fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// Arithmetic mean.
///
/// Returns `None` for an empty slice, where the mean is undefined.
///
/// # Examples
///
/// ```
/// use u_linreg::summary::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 6.0]), Some(3.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(sum(data) / data.len() as f64)
}

/// Σxᵢ².
pub fn sum_squares(data: &[f64]) -> f64 {
    data.iter().map(|v| v * v).sum()
}

/// Σxᵢyᵢ over the common prefix of `a` and `b`.
///
/// Callers pass equal-length slices.
pub fn sum_products(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(&ai, &bi)| ai * bi).sum()
}

/// Σ(xᵢ - x̄)², computed from explicit deviations.
pub fn sum_squared_deviations(data: &[f64], center: f64) -> f64 {
    data.iter().map(|&v| (v - center).powi(2)).sum()
}
