//! Two-pass precedence reduction of a finished expression.
//!
//! The expression is a chain `operand (operator operand)*`. The first pass
//! folds every `*` and `/` left to right, the second pass folds `+` and `-`.
//! Each pass builds a new, shorter chain instead of splicing in place.

use thiserror::Error;

use super::format::{format_value, strip_separators};
use super::token::{Operator, Precedence};

/// A committed operand together with the operator that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    pub operand: String,
    pub operator: Operator,
}

impl Term {
    pub fn new(operand: impl Into<String>, operator: Operator) -> Self {
        Self {
            operand: operand.into(),
            operator,
        }
    }
}

/// Reasons an expression cannot be reduced to a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("not a number: {operand:?}")]
    NotANumber { operand: String },

    #[error("result is not finite")]
    NonFinite,
}

/// An operand that is either still the text it was typed as, or a value
/// produced by an earlier fold.
#[derive(Clone, Debug)]
enum Operand<'a> {
    Text(&'a str),
    Value(f64),
}

impl Operand<'_> {
    fn value(&self) -> Result<f64, EvalError> {
        match *self {
            Self::Value(v) => Ok(v),
            Self::Text(text) => parse_operand(text),
        }
    }
}

struct Chain<'a> {
    head: Operand<'a>,
    tail: Vec<(Operator, Operand<'a>)>,
}

/// Parse a numeric operand, ignoring grouping separators.
pub fn parse_operand(text: &str) -> Result<f64, EvalError> {
    let cleaned = strip_separators(text);
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(EvalError::NotANumber {
            operand: text.to_string(),
        }),
    }
}

fn apply(op: Operator, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    let result = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            lhs / rhs
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::NonFinite)
    }
}

fn fold_level(chain: Chain<'_>, level: Precedence) -> Result<Chain<'_>, EvalError> {
    let mut head = chain.head;
    let mut tail: Vec<(Operator, Operand)> = Vec::with_capacity(chain.tail.len());

    for (op, rhs) in chain.tail {
        if op.precedence() != level {
            tail.push((op, rhs));
            continue;
        }
        // The left neighbour is whatever the last kept element is.
        let lhs = match tail.last_mut() {
            Some((_, last)) => last,
            None => &mut head,
        };
        let left = lhs.value()?;
        let right = rhs.value()?;
        *lhs = Operand::Value(apply(op, left, right)?);
    }

    Ok(Chain { head, tail })
}

/// Reduce `terms` followed by `terminal` to a single numeric string.
///
/// With no terms the terminal value is returned unchanged.
pub fn evaluate(terms: &[Term], terminal: &str) -> Result<String, EvalError> {
    let Some((first, rest)) = terms.split_first() else {
        return Ok(terminal.to_string());
    };

    let mut tail = Vec::with_capacity(terms.len());
    let mut op = first.operator;
    for term in rest {
        tail.push((op, Operand::Text(&term.operand)));
        op = term.operator;
    }
    tail.push((op, Operand::Text(terminal)));

    let chain = Chain {
        head: Operand::Text(&first.operand),
        tail,
    };
    let chain = fold_level(chain, Precedence::Multiplicative)?;
    let chain = fold_level(chain, Precedence::Additive)?;
    debug_assert!(chain.tail.is_empty());

    chain.head.value().map(format_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Operator::*;

    fn terms(parts: &[(&str, Operator)]) -> Vec<Term> {
        parts.iter().map(|&(v, op)| Term::new(v, op)).collect()
    }

    #[test]
    fn test_empty_is_identity() {
        assert_eq!(evaluate(&[], "42.50").unwrap(), "42.50");
        assert_eq!(evaluate(&[], "-").unwrap(), "-");
    }

    #[test]
    fn test_precedence() {
        let t = terms(&[("7", Add), ("6", Multiply)]);
        assert_eq!(evaluate(&t, "2").unwrap(), "19");
    }

    #[test]
    fn test_left_to_right() {
        let t = terms(&[("10", Add), ("5", Subtract)]);
        assert_eq!(evaluate(&t, "3").unwrap(), "12");

        let t = terms(&[("100", Divide), ("10", Divide)]);
        assert_eq!(evaluate(&t, "5").unwrap(), "2");

        let t = terms(&[("10", Subtract), ("4", Subtract)]);
        assert_eq!(evaluate(&t, "3").unwrap(), "3");
    }

    #[test]
    fn test_mixed_chain() {
        let t = terms(&[
            ("10", Add),
            ("20", Multiply),
            ("3", Subtract),
            ("5", Divide),
        ]);
        assert_eq!(evaluate(&t, "5").unwrap(), "69");
    }

    #[test]
    fn test_decimals_and_separators() {
        let t = terms(&[("2.5", Add), ("3", Multiply)]);
        assert_eq!(evaluate(&t, "4").unwrap(), "14.5");

        let t = terms(&[("1,000", Multiply)]);
        assert_eq!(evaluate(&t, "1,000").unwrap(), "1000000");
    }

    #[test]
    fn test_division_by_zero() {
        let t = terms(&[("5", Divide)]);
        assert_eq!(evaluate(&t, "0"), Err(EvalError::DivisionByZero));

        let t = terms(&[("1", Add), ("5", Divide)]);
        assert_eq!(evaluate(&t, "0.0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_not_a_number() {
        let t = terms(&[("-", Multiply)]);
        assert!(matches!(
            evaluate(&t, "3"),
            Err(EvalError::NotANumber { operand }) if operand == "-"
        ));

        let t = terms(&[("2", Add)]);
        assert!(matches!(
            evaluate(&t, "abc"),
            Err(EvalError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_overflow_is_error() {
        let t = terms(&[("1e308", Multiply)]);
        assert_eq!(evaluate(&t, "10"), Err(EvalError::NonFinite));
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("5.").unwrap(), 5.0);
        assert_eq!(parse_operand("-1,234.5").unwrap(), -1234.5);
        assert!(parse_operand("").is_err());
        assert!(parse_operand("inf").is_err());
    }
}
