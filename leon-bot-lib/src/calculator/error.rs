use thiserror::Error;

/// The ways an expression can fail to evaluate.
///
/// Every variant is recoverable by the caller: the calculator never panics on
/// user input, it reports one of these and leaves the process alone. The
/// dispatch layer collapses all of them into a single user-facing message, so
/// the distinction only matters to tests and logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// The input contained a character outside the allowed set.
    #[error("invalid character in expression: {0:?}")]
    InvalidCharacter(char),

    /// A run of digits and dots did not parse as a decimal number.
    #[error("malformed number literal: {0:?}")]
    MalformedNumber(String),

    /// Unbalanced `(`/`)`.
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// Missing operands, leftover operands, or an operator in operand position.
    #[error("malformed expression")]
    MalformedExpression,

    /// A division whose divisor evaluated to exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}
