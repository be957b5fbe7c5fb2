//! Free-form numeric input parsing.
//!
//! Observations are typed or pasted by hand, so the parser is lenient:
//! any run of whitespace and/or commas separates tokens, and tokens that
//! are not finite numbers are dropped without an error.
//!
//! # Examples
//!
//! ```
//! use u_linreg::parse::parse_input;
//!
//! assert_eq!(parse_input("1, 2  3\n4"), vec![1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(parse_input("a,1,,2"), vec![1.0, 2.0]);
//! assert!(parse_input("").is_empty());
//! ```

/// Parses delimited text into a sample vector.
///
/// Empty or whitespace-only input yields an empty vector. `NaN` and
/// infinities are discarded along with unparsable tokens.
pub fn parse_input(text: &str) -> Vec<f64> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_separators() {
        assert_eq!(parse_input("1, 2  3\n4"), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(parse_input("1,\t2,\r\n3"), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn garbage_tokens_dropped() {
        assert_eq!(parse_input("a,1,,2"), vec![1.0, 2.0]);
        assert_eq!(parse_input("x y z"), Vec::<f64>::new());
    }

    #[test]
    fn empty_and_blank() {
        assert!(parse_input("").is_empty());
        assert!(parse_input("  \n\t , ,").is_empty());
    }

    #[test]
    fn signs_decimals_exponents() {
        assert_eq!(
            parse_input("-1.5 +2 .5 3e2 -4E-1"),
            vec![-1.5, 2.0, 0.5, 300.0, -0.4]
        );
    }

    #[test]
    fn non_finite_dropped() {
        assert_eq!(parse_input("NaN 1 inf -infinity 2"), vec![1.0, 2.0]);
    }

    #[test]
    fn radix_prefixed_literals_dropped() {
        assert_eq!(parse_input("0x10 1 0b11 0o7 2"), vec![1.0, 2.0]);
    }
}
