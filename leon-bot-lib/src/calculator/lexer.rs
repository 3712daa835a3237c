use crate::calculator::error::CalculatorError;
use crate::calculator::token::{Token, SYMBOLS};

/// Rejects any input containing characters outside the calculator alphabet.
///
/// Running this before [`tokenize`] guarantees the tokenizer and evaluator
/// never see unexpected input; anything but digits, `.`, the four operators,
/// parentheses and whitespace is reported as the offending character.
pub fn validate(expression: &str) -> Result<(), CalculatorError> {
    match expression
        .chars()
        .find(|character| !is_allowed(*character))
    {
        Some(character) => Err(CalculatorError::InvalidCharacter(character)),
        None => Ok(()),
    }
}

fn is_allowed(character: char) -> bool {
    character.is_ascii_digit()
        || character == '.'
        || character.is_whitespace()
        || SYMBOLS.contains(&character)
}

/// Splits an expression into literal and operator tokens.
///
/// Maximal runs of digits and dots become number literals, the characters in
/// [`SYMBOLS`] become operator/parenthesis tokens, and whitespace is discarded
/// without producing a token.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in source order.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use leon_bot::calculator::lexer::tokenize;
///
/// let tokens = tokenize("2 + 3 * 4")?;
/// assert_eq!(tokens.len(), 5);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, CalculatorError> {
    validate(expression)?;

    let mut tokens: Vec<Token> = vec![];
    let mut literal = String::new();
    for character in expression.chars() {
        if character.is_ascii_digit() || character == '.' {
            literal.push(character);
            continue;
        }
        if !literal.is_empty() {
            tokens.push(literal.parse()?);
            literal.clear();
        }
        if character.is_whitespace() {
            continue;
        }
        tokens.push(character.to_string().parse()?);
    }
    if !literal.is_empty() {
        tokens.push(literal.parse()?);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::operator::Operator;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_expression_tokenizes_in_order() {
        let tokens = tokenize("2+3*4").unwrap();
        let expected = vec![
            Token::Literal(2.0),
            Token::Operator(Operator::Add),
            Token::Literal(3.0),
            Token::Operator(Operator::Multiply),
            Token::Literal(4.0),
        ];
        assert_eq!(tokens, expected)
    }

    #[test]
    fn whitespace_carries_no_token() {
        let spaced = tokenize("  1 +\t2 ").unwrap();
        let compact = tokenize("1+2").unwrap();
        assert_eq!(spaced, compact)
    }

    #[test]
    fn parentheses_tokenize_individually() {
        let tokens = tokenize("(1)").unwrap();
        let expected = vec![
            Token::OpenParenthesis,
            Token::Literal(1.0),
            Token::CloseParenthesis,
        ];
        assert_eq!(tokens, expected)
    }

    #[test]
    fn decimal_literal_is_one_token() {
        let tokens = tokenize("12.5").unwrap();
        assert_eq!(tokens, vec![Token::Literal(12.5)])
    }

    #[test]
    fn letters_are_rejected_before_tokenization() {
        let error = tokenize("1e5").unwrap_err();
        assert_eq!(error, CalculatorError::InvalidCharacter('e'))
    }

    #[test]
    fn disallowed_symbol_is_rejected() {
        let error = tokenize("2^3").unwrap_err();
        assert_eq!(error, CalculatorError::InvalidCharacter('^'))
    }

    #[test]
    fn run_with_multiple_dots_is_malformed() {
        let error = tokenize("1.2.3+1").unwrap_err();
        assert_eq!(error, CalculatorError::MalformedNumber("1.2.3".to_string()))
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        let tokens = tokenize("").unwrap();
        assert!(tokens.is_empty())
    }
}
