use crate::calculator::error::CalculatorError;
use crate::calculator::operator::{Associativity, Operator};
use crate::calculator::token::Token;
use std::collections::VecDeque;

/// Evaluates a tokenized infix expression into a single number.
///
/// This is the shunting-yard algorithm applied directly: instead of emitting a
/// postfix token stream or building a parse tree, operators are applied to an
/// operand stack as soon as precedence allows. Operators of equal precedence
/// are applied left-to-right.
///
/// # Arguments
///
/// * `tokens`: The tokens to evaluate, in infix order.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use leon_bot::calculator::evaluator::evaluate;
/// use leon_bot::calculator::lexer::tokenize;
///
/// let value = evaluate(tokenize("2 + 3 * 4")?)?;
/// assert_eq!(value, 14.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(tokens: Vec<Token>) -> Result<f64, CalculatorError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut operands: Vec<f64> = vec![];
    // Infix alternates between operand position and operator position; a
    // token of the wrong kind for the current position (postfix/prefix
    // shapes, unary signs, consecutive literals) is malformed.
    let mut expect_operand = true;
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Literal(value) => {
                if !expect_operand {
                    return Err(CalculatorError::MalformedExpression);
                }
                operands.push(value);
                expect_operand = false;
            }
            Token::OpenParenthesis => {
                if !expect_operand {
                    return Err(CalculatorError::MalformedExpression);
                }
                operators.push_front(token);
            }
            Token::Operator(operator) => {
                if expect_operand {
                    return Err(CalculatorError::MalformedExpression);
                }
                handle_operator_token(&mut operators, &mut operands, operator)?;
                expect_operand = true;
            }
            Token::CloseParenthesis => {
                if expect_operand {
                    return Err(CalculatorError::MalformedExpression);
                }
                handle_closing_parenthesis_token(&mut operators, &mut operands)?;
            }
        };
    }

    apply_leftover_operators(&mut operators, &mut operands)?;

    // A correct expression reduces to exactly one value; anything else means
    // operands were left without a combining operator.
    match (operands.pop(), operands.is_empty()) {
        (Some(value), true) => Ok(value),
        _ => Err(CalculatorError::MalformedExpression),
    }
}

fn apply_leftover_operators(
    operators: &mut VecDeque<Token>,
    operands: &mut Vec<f64>,
) -> Result<(), CalculatorError> {
    while let Some(token) = operators.pop_front() {
        match token {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(CalculatorError::MismatchedParentheses);
            }
            Token::Operator(operator) => apply_operator(operands, operator)?,
            Token::Literal(_) => return Err(CalculatorError::MalformedExpression),
        }
    }
    Ok(())
}

fn handle_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    operands: &mut Vec<f64>,
) -> Result<(), CalculatorError> {
    loop {
        match operators.pop_front() {
            None => {
                return Err(CalculatorError::MismatchedParentheses);
            }
            Some(Token::OpenParenthesis) => {
                // Discard the open parenthesis.
                return Ok(());
            }
            Some(Token::Operator(operator)) => apply_operator(operands, operator)?,
            Some(_) => return Err(CalculatorError::MalformedExpression),
        }
    }
}

fn handle_operator_token(
    operators: &mut VecDeque<Token>,
    operands: &mut Vec<f64>,
    operator: Operator,
) -> Result<(), CalculatorError> {
    loop {
        match operators.front() {
            None | Some(Token::OpenParenthesis) => {
                break;
            }
            Some(Token::Operator(top_of_operator_stack)) => {
                let top_operator = *top_of_operator_stack;

                let binds_tighter = top_operator.precedence_gt(&operator)
                    || (top_operator.precedence_eq(&operator)
                        && operator.associativity() == Associativity::Left);
                if !binds_tighter {
                    break;
                }

                operators.pop_front();
                apply_operator(operands, top_operator)?;
            }
            Some(_) => return Err(CalculatorError::MalformedExpression),
        }
    }

    operators.push_front(Token::Operator(operator));
    Ok(())
}

/// Pops the right operand then the left operand and pushes the combined value.
fn apply_operator(
    operands: &mut Vec<f64>,
    operator: Operator,
) -> Result<(), CalculatorError> {
    let b = operands.pop().ok_or(CalculatorError::MalformedExpression)?;
    let a = operands.pop().ok_or(CalculatorError::MalformedExpression)?;
    operands.push(operator.apply(a, b)?);
    Ok(())
}
