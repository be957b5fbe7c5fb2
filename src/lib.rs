//! # u-linreg
//!
//! Ordinary least-squares linear regression for one or two predictors,
//! with the full set of classical inference statistics.
//!
//! The crate is a pure computation engine: it turns hand-entered numeric
//! text into samples, fits the model, and returns an immutable result
//! record. Rendering the result is left to the caller.
//!
//! ## Modules
//!
//! - [`parse`] — Lenient parsing of delimited numeric text
//! - [`summary`] — Sums, means, squares, and cross-products
//! - [`matrix`] — Matrix product, transpose, closed-form 3×3 inverse
//! - [`regression`] — Simple and two-predictor OLS, ANOVA, R², F, t
//! - [`hypothesis`] — Reject / fail-to-reject decisions from critical values
//! - [`config`] — Calculation options
//!
//! ## Example
//!
//! ```
//! use u_linreg::{calculate_multiple_regression, parse_input};
//!
//! let y = parse_input("6, 4, 3, 5");
//! let x1 = parse_input("1 2 3 4");
//! let x2 = parse_input("2 5 2 6");
//! let result = calculate_multiple_regression(&y, &x1, &x2).unwrap();
//! let anova = result.inference().anova;
//! assert!((anova.tss - (anova.ess + anova.rss)).abs() < 1e-9);
//! ```
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every call is independent and re-entrant
//! - **Lenient input, strict math**: garbage tokens are dropped, singular
//!   designs are reported as errors
//! - **Degenerate, not failing**: zero variance and zero standard errors
//!   produce 0-valued statistics instead of errors

pub mod config;
pub mod error;
pub mod hypothesis;
pub mod matrix;
pub mod parse;
pub mod regression;
pub mod summary;

pub use config::RegressionOptions;
pub use error::{LinregResult, RegressionError};
pub use parse::parse_input;
pub use regression::{
    calculate_multiple_regression, calculate_simple_regression, validate_inputs, ModelType,
    Regression, RegressionInput, RegressionResult,
};
