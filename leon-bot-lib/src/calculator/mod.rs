pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod token;

pub use error::CalculatorError;

/// Evaluates an infix arithmetic expression from text.
///
/// Validates the character set, tokenizes, and runs the operator-precedence
/// evaluator. The computation is pure and synchronous: each call allocates its
/// own stacks, so it is safe to invoke from any number of concurrent contexts.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, e.g. `"2 + 3 * 4"`.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use leon_bot::calculator::calculate;
///
/// let value = calculate("(2 + 3) * 4").unwrap();
/// assert_eq!(value, 20.0);
/// ```
pub fn calculate(expression: &str) -> Result<f64, CalculatorError> {
    let tokens = lexer::tokenize(expression)?;
    evaluator::evaluate(tokens)
}

/// Formats a successful evaluation as the reply sent back to the requester.
pub fn format_result(expression: &str, value: f64) -> String {
    format!("{} = {}", expression, value)
}

#[cfg(test)]
mod calculator_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pipeline_evaluates_spaced_expression() {
        let value = calculate("2 + 3 * 4").unwrap();
        assert_eq!(value, 14.0)
    }

    #[test]
    fn pipeline_reports_invalid_character_first() {
        // The filter runs before tokenization, so the letter wins over the
        // malformed structure.
        let error = calculate("2+x").unwrap_err();
        assert_eq!(error, CalculatorError::InvalidCharacter('x'))
    }

    #[test]
    fn whole_results_format_without_decimals() {
        let reply = format_result("2+2", calculate("2+2").unwrap());
        assert_eq!(reply, "2+2 = 4")
    }

    #[test]
    fn fractional_results_keep_their_decimals() {
        let reply = format_result("5/2", calculate("5/2").unwrap());
        assert_eq!(reply, "5/2 = 2.5")
    }
}
