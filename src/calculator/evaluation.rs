//! Expression evaluation using a two-stack shunting-yard reduction.
//!
//! Values and pending operators live on separate stacks. Operators are
//! reduced eagerly whenever an incoming operator binds no tighter than the
//! one on top, which gives left-associativity for equal precedence.

use super::token::{Lexer, Operator, Token};
use thiserror::Error;

/// Why an expression could not be reduced to a single finite number.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
    #[error("expression produced no value")]
    EmptyResult,
    #[error("expression left {0} values instead of one")]
    AmbiguousResult(usize),
    #[error("result is out of range")]
    Overflow,
}

impl EvalError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedExpression(reason.into())
    }
}

/// Entry on the operator stack. An open bracket is a barrier that never reduces.
#[derive(Clone, Copy, Debug)]
enum Pending {
    Open,
    Op(Operator),
}

/// Pop `b`, then `a`, and push `a OP b`.
fn pop_and_apply(values: &mut Vec<f64>, op: Operator) -> Result<(), EvalError> {
    let (Some(b), Some(a)) = (values.pop(), values.pop()) else {
        return Err(EvalError::malformed(format!(
            "missing operand for '{}'",
            op.as_char()
        )));
    };

    let result = op.apply(a, b)?;
    if !result.is_finite() {
        return Err(EvalError::Overflow);
    }
    values.push(result);
    Ok(())
}

/// Evaluate an arithmetic expression over `+ - * / ( )` and decimal literals.
///
/// Leading or trailing operators are not patched up here; callers that want
/// an implicit zero operand must add it before calling.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let mut values: Vec<f64> = Vec::new();
    let mut operators: Vec<Pending> = Vec::new();

    for token in Lexer::new(expression) {
        match token? {
            Token::Number(n) => {
                if !n.is_finite() {
                    return Err(EvalError::Overflow);
                }
                values.push(n);
            }
            Token::LParen => operators.push(Pending::Open),
            Token::RParen => loop {
                match operators.pop() {
                    Some(Pending::Open) => break,
                    Some(Pending::Op(op)) => pop_and_apply(&mut values, op)?,
                    None => return Err(EvalError::malformed("unbalanced ')'")),
                }
            },
            Token::Operator(current) => {
                while let Some(&Pending::Op(top)) = operators.last() {
                    if top.precedence() < current.precedence() {
                        break;
                    }
                    operators.pop();
                    pop_and_apply(&mut values, top)?;
                }
                operators.push(Pending::Op(current));
            }
        }
    }

    while let Some(pending) = operators.pop() {
        match pending {
            Pending::Op(op) => pop_and_apply(&mut values, op)?,
            Pending::Open => return Err(EvalError::malformed("unclosed '('")),
        }
    }

    match values.as_slice() {
        [] => Err(EvalError::EmptyResult),
        [value] => Ok(*value),
        rest => Err(EvalError::AmbiguousResult(rest.len())),
    }
}

/// Format a result for display.
///
/// Integral values print without a decimal point. Anything else is rounded
/// to 9 decimal places with trailing zeros (and a bare trailing dot) removed.
pub fn format_result(value: f64) -> String {
    // Folds -0.0 into 0.0.
    let value = value + 0.0;

    let formatted = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let fixed = format!("{:.9}", value);
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    };

    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}
