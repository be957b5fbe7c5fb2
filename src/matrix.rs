//! Dense row-major matrices for the normal equations.
//!
//! Only what the two-predictor solver needs: products, transpose, and a
//! closed-form 3×3 inverse.
//!
//! # Examples
//!
//! ```
//! use u_linreg::matrix::Matrix;
//!
//! let a = Matrix::from_rows(&[&[2.0, 0.0, 0.0], &[0.0, 4.0, 0.0], &[0.0, 0.0, 5.0]]).unwrap();
//! let inv = a.inverse_3x3().unwrap();
//! assert!((inv.get(1, 1) - 0.25).abs() < 1e-15);
//! ```

use crate::error::{LinregResult, RegressionError};

/// Determinant magnitude below which a 3×3 matrix is treated as singular.
pub const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Row-major dense matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from row-major data.
    ///
    /// Fails if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> LinregResult<Self> {
        if data.len() != rows * cols {
            return Err(RegressionError::DimensionMismatch {
                op: "new",
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from a slice of equal-length rows.
    pub fn from_rows(rows: &[&[f64]]) -> LinregResult<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(RegressionError::DimensionMismatch {
                    op: "from_rows",
                    left: (rows.len(), cols),
                    right: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Creates an n×1 column vector.
    pub fn column(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (`row`, `col`). Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Diagonal elements.
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.rows.min(self.cols)).map(|i| self.get(i, i)).collect()
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Matrix product `self · other`.
    ///
    /// Fails if `self.cols() != other.rows()`.
    pub fn mul_mat(&self, other: &Matrix) -> LinregResult<Matrix> {
        if self.cols != other.rows {
            return Err(RegressionError::DimensionMismatch {
                op: "mul_mat",
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            });
        }
        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a_ik = self.data[i * self.cols + k];
                for j in 0..other.cols {
                    data[i * other.cols + j] += a_ik * other.data[k * other.cols + j];
                }
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Matrix-vector product `self · v`.
    pub fn mul_vec(&self, v: &[f64]) -> LinregResult<Vec<f64>> {
        if self.cols != v.len() {
            return Err(RegressionError::DimensionMismatch {
                op: "mul_vec",
                left: (self.rows, self.cols),
                right: (v.len(), 1),
            });
        }
        Ok((0..self.rows)
            .map(|i| {
                let row = &self.data[i * self.cols..(i + 1) * self.cols];
                row.iter().zip(v).map(|(a, b)| a * b).sum()
            })
            .collect())
    }

    /// Determinant of a 3×3 matrix by cofactor expansion along the first row.
    ///
    /// Returns `None` if the matrix is not 3×3.
    pub fn determinant_3x3(&self) -> Option<f64> {
        if self.rows != 3 || self.cols != 3 {
            return None;
        }
        let m = |i: usize, j: usize| self.data[i * 3 + j];
        Some(
            m(0, 0) * (m(1, 1) * m(2, 2) - m(2, 1) * m(1, 2))
                - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
                + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0)),
        )
    }

    /// Closed-form inverse of a 3×3 matrix.
    ///
    /// Returns `None` if the matrix is not 3×3 or `|det| < 1e-12`.
    pub fn inverse_3x3(&self) -> Option<Matrix> {
        self.inverse_3x3_with_tolerance(SINGULAR_TOLERANCE)
    }

    /// Closed-form inverse with an explicit singularity tolerance on `|det|`.
    ///
    /// The result is the adjugate (transposed cofactor matrix) scaled by 1/det.
    pub fn inverse_3x3_with_tolerance(&self, tolerance: f64) -> Option<Matrix> {
        let det = self.determinant_3x3()?;
        if det.abs() < tolerance {
            return None;
        }

        let m = |i: usize, j: usize| self.data[i * 3 + j];
        let inv_det = 1.0 / det;
        let data = vec![
            (m(1, 1) * m(2, 2) - m(2, 1) * m(1, 2)) * inv_det,
            (m(0, 2) * m(2, 1) - m(0, 1) * m(2, 2)) * inv_det,
            (m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1)) * inv_det,
            (m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2)) * inv_det,
            (m(0, 0) * m(2, 2) - m(0, 2) * m(2, 0)) * inv_det,
            (m(1, 0) * m(0, 2) - m(0, 0) * m(1, 2)) * inv_det,
            (m(1, 0) * m(2, 1) - m(2, 0) * m(1, 1)) * inv_det,
            (m(2, 0) * m(0, 1) - m(0, 0) * m(2, 1)) * inv_det,
            (m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1)) * inv_det,
        ];
        Some(Matrix {
            rows: 3,
            cols: 3,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Matrix, b: &Matrix, tol: f64) -> bool {
        a.rows() == b.rows()
            && a.cols() == b.cols()
            && (0..a.rows()).all(|i| (0..a.cols()).all(|j| (a.get(i, j) - b.get(i, j)).abs() < tol))
    }

    #[test]
    fn new_rejects_bad_length() {
        assert!(Matrix::new(2, 2, vec![1.0, 2.0, 3.0]).is_err());
        assert!(Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).is_ok());
    }

    #[test]
    fn from_rows_rejects_ragged() {
        assert!(Matrix::from_rows(&[&[1.0, 2.0], &[3.0]]).is_err());
    }

    #[test]
    fn transpose_swaps_dimensions() {
        let a = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = a.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.get(2, 0), 3.0);
        assert_eq!(t.get(0, 1), 4.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn mul_mat_basic() {
        let a = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::new(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        let c = a.mul_mat(&b).unwrap();
        let expected = Matrix::new(2, 2, vec![58.0, 64.0, 139.0, 154.0]).unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn mul_mat_shape_mismatch() {
        let a = Matrix::new(2, 3, vec![0.0; 6]).unwrap();
        let err = a.mul_mat(&a).unwrap_err();
        assert!(matches!(err, RegressionError::DimensionMismatch { op: "mul_mat", .. }));
    }

    #[test]
    fn mul_vec_matches_column_product() {
        let a = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let v = [1.0, 0.0, -1.0];
        assert_eq!(a.mul_vec(&v).unwrap(), vec![-2.0, -2.0]);
        let col = a.mul_mat(&Matrix::column(&v)).unwrap();
        assert_eq!(col.diagonal(), vec![-2.0]);
        assert!(a.mul_vec(&[1.0]).is_err());
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let a = Matrix::from_rows(&[&[4.0, 10.0, 15.0], &[10.0, 30.0, 39.0], &[15.0, 39.0, 69.0]])
            .unwrap();
        let inv = a.inverse_3x3().expect("invertible");
        let id = Matrix::from_rows(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]]).unwrap();
        assert!(approx_eq(&a.mul_mat(&inv).unwrap(), &id, 1e-10));
        assert!(approx_eq(&inv.mul_mat(&a).unwrap(), &id, 1e-10));
    }

    #[test]
    fn singular_has_no_inverse() {
        // Second row is twice the first.
        let a = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[1.0, 0.0, 1.0]]).unwrap();
        assert_eq!(a.determinant_3x3(), Some(0.0));
        assert!(a.inverse_3x3().is_none());
    }

    #[test]
    fn tolerance_is_configurable() {
        let a = Matrix::from_rows(&[&[1e-5, 0.0, 0.0], &[0.0, 1e-5, 0.0], &[0.0, 0.0, 1e-5]]).unwrap();
        // det = 1e-15
        assert!(a.inverse_3x3().is_none());
        assert!(a.inverse_3x3_with_tolerance(1e-18).is_some());
    }

    #[test]
    fn non_square_has_no_inverse() {
        let a = Matrix::new(2, 3, vec![1.0; 6]).unwrap();
        assert!(a.determinant_3x3().is_none());
        assert!(a.inverse_3x3().is_none());
    }
}
