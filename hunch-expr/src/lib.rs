mod error;
mod parser;
mod token;

pub use error::ExprError;

use parser::Parser;
use token::tokenize;

/// Evaluates a restricted arithmetic expression.
///
/// Grammar: decimal literals (leading-dot and scientific notation included),
/// `+ - * / ^`, parentheses, and unary minus. Bound text comes straight from
/// the user, so nothing beyond arithmetic is ever executed.
///
/// # Errors
///
/// Returns [`ExprError`] if the text does not tokenize or does not form a
/// complete expression.
pub fn eval(text: &str) -> Result<f64, ExprError> {
    Parser::new(tokenize(text)?).evaluate()
}

/// Expands the first percent occurrence.
///
/// `<prefix>%<suffix>` becomes `(<prefix>)/100<suffix>`, so `"30%"` reads as
/// `0.3`. Single-pass: any later `%` stays put and fails tokenization.
#[must_use]
pub fn expand_percent(text: &str) -> String {
    match text.split_once('%') {
        Some((prefix, suffix)) => format!("({prefix})/100{suffix}"),
        None => text.to_string(),
    }
}

/// Parses free-form bound text into a number.
///
/// Empty or whitespace-only text is zero. Anything unparseable is NaN; the
/// caller surfaces that as an invalid bound rather than an error.
#[must_use]
pub fn parse_bound(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }
    eval(&expand_percent(text)).unwrap_or(f64::NAN)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_plain_arithmetic() {
        assert_eq!(eval("2+2").unwrap(), 4.0);
        assert_eq!(eval("1/4").unwrap(), 0.25);
        assert_eq!(eval("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(eval("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(eval(".5").unwrap(), 0.5);
        assert_eq!(eval("1e6").unwrap(), 1_000_000.0);
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(eval("2^3^2").unwrap(), 512.0);
        assert_eq!(eval("2^-2").unwrap(), 0.25);
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        assert_eq!(eval("-2^2").unwrap(), -4.0);
        assert_eq!(eval("2*-3").unwrap(), -6.0);
        assert_eq!(eval("- -3").unwrap(), 3.0);
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(eval("1/0").unwrap(), f64::INFINITY);
    }

    #[test]
    fn rejects_incomplete_expressions() {
        assert!(matches!(eval("2+"), Err(ExprError::UnexpectedEnd)));
        assert!(matches!(eval("(2"), Err(ExprError::MissingParen)));
        assert!(matches!(eval("2 3"), Err(ExprError::TrailingTokens)));
        assert!(matches!(eval("*2"), Err(ExprError::UnexpectedToken)));
    }

    #[test]
    fn percent_expands_once() {
        assert_eq!(expand_percent("30%"), "(30)/100");
        assert_eq!(expand_percent("(1+1)%"), "((1+1))/100");
        assert_eq!(expand_percent("5%%"), "(5)/100%");
        assert_eq!(expand_percent("2+2"), "2+2");
    }

    #[test]
    fn percent_bound_matches_decimal_form() {
        assert_relative_eq!(parse_bound("30%"), parse_bound("0.3"));
        assert_relative_eq!(parse_bound("(1+1)%"), eval("2/100").unwrap());
    }

    #[test]
    fn digits_after_percent_concatenate_into_the_divisor() {
        // "50%2" rewrites to "(50)/1002", same as the original macro.
        assert_relative_eq!(parse_bound("50%2"), 50.0 / 1002.0);
    }

    #[test]
    fn second_percent_fails_the_parse() {
        assert!(parse_bound("5%%").is_nan());
    }

    #[test]
    fn blank_text_is_zero() {
        assert_eq!(parse_bound(""), 0.0);
        assert_eq!(parse_bound("   "), 0.0);
    }

    #[test]
    fn unparseable_text_is_nan() {
        assert!(parse_bound("abc").is_nan());
        assert!(parse_bound("2+").is_nan());
        assert!(parse_bound("()").is_nan());
    }
}
