use crate::calculator::error::CalculatorError;
use crate::calculator::operator::Operator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression.
#[derive(Clone, PartialEq)]
pub enum Token {
    Literal(f64),
    Operator(Operator),
    OpenParenthesis,
    CloseParenthesis,
}

pub static SYMBOLS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = CalculatorError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Operator(Operator::Add)),
            "-" => Ok(Token::Operator(Operator::Subtract)),
            "*" => Ok(Token::Operator(Operator::Multiply)),
            "/" => Ok(Token::Operator(Operator::Divide)),
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            input => parse_literal(input),
        }
    }
}

fn parse_literal(text: &str) -> Result<Token, CalculatorError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Token::Literal(value)),
        _ => Err(CalculatorError::MalformedNumber(text.to_string())),
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
