//! Error taxonomy for regression calculations.

use thiserror::Error;

/// Errors that can occur while validating inputs or solving a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    // Input validation errors
    #[error("Input fields cannot be empty.")]
    EmptyInput,

    #[error("Mismatch lengths. Y={y}, {name}={x}")]
    LengthMismatch {
        name: &'static str,
        y: usize,
        x: usize,
    },

    #[error("Expected {expected} predictor(s), got {got}")]
    PredictorCount { expected: usize, got: usize },

    #[error("Invalid option {name}: {value}")]
    InvalidOption { name: &'static str, value: f64 },

    // Numerical errors
    #[error("Matrix Singular. (|det| = {determinant:e})")]
    SingularDesign { determinant: f64 },

    #[error("Dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
}

/// Result type for regression operations.
pub type LinregResult<T> = Result<T, RegressionError>;
