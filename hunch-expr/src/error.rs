use thiserror::Error;

/// Errors that can occur while evaluating a bound expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A character outside the arithmetic grammar.
    #[error("unsupported character '{0}' in expression")]
    UnsupportedChar(char),

    /// A numeric literal that does not read as a number.
    #[error("invalid numeric literal '{0}'")]
    InvalidNumber(String),

    /// The expression stopped where an operand was expected.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// An operator or parenthesis where an operand was expected.
    #[error("unexpected token in expression")]
    UnexpectedToken,

    /// An opening parenthesis was never closed.
    #[error("missing closing ')'")]
    MissingParen,

    /// Leftover tokens after a complete expression.
    #[error("unexpected trailing tokens")]
    TrailingTokens,
}
