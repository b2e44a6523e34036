// src/expression/mod.rs
//
// Natural number expression trees and their evaluation.
//
// Trees are plain serde data, so they can be read from JSON:
//   {"op":"plus","left":{"op":"number","value":"2"},"right":{"op":"number","value":"3"}}

use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use crate::core::arithmetic::NaturalNumber;
use crate::core::error::NaturalNumberError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Expression {
    /// Leaf carrying a canonical decimal literal.
    Number { value: String },
    Plus { left: Box<Expression>, right: Box<Expression> },
    Minus { left: Box<Expression>, right: Box<Expression> },
    Times { left: Box<Expression>, right: Box<Expression> },
    Divide { left: Box<Expression>, right: Box<Expression> },
}

impl Expression {
    pub fn number(value: u64) -> Self {
        Expression::Number { value: value.to_string() }
    }

    pub fn literal(value: &str) -> Self {
        Expression::Number { value: value.to_string() }
    }

    pub fn plus(left: Expression, right: Expression) -> Self {
        Expression::Plus { left: Box::new(left), right: Box::new(right) }
    }

    pub fn minus(left: Expression, right: Expression) -> Self {
        Expression::Minus { left: Box::new(left), right: Box::new(right) }
    }

    pub fn times(left: Expression, right: Expression) -> Self {
        Expression::Times { left: Box::new(left), right: Box::new(right) }
    }

    pub fn divide(left: Expression, right: Expression) -> Self {
        Expression::Divide { left: Box::new(left), right: Box::new(right) }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Expression::Number { .. } => "number",
            Expression::Plus { .. } => "plus",
            Expression::Minus { .. } => "minus",
            Expression::Times { .. } => "times",
            Expression::Divide { .. } => "divide",
        }
    }
}

/// Conditions that abort an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// `minus` whose right operand exceeds its left one.
    NegativeResult { left: String, right: String },
    /// `divide` whose right operand evaluates to zero.
    DivideByZero,
    InvalidLiteral(NaturalNumberError),
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::NegativeResult { left, right } => {
                write!(f, "Negative natural number error: {} - {}", left, right)
            }
            EvaluationError::DivideByZero => write!(f, "Divide by 0 error."),
            EvaluationError::InvalidLiteral(e) => write!(f, "{}", e),
        }
    }
}

impl Error for EvaluationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EvaluationError::InvalidLiteral(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NaturalNumberError> for EvaluationError {
    fn from(e: NaturalNumberError) -> Self {
        EvaluationError::InvalidLiteral(e)
    }
}

/// Evaluates `expression` with natural number semantics: `divide` truncates,
/// `minus` refuses to go below zero.
pub fn evaluate<N: NaturalNumber>(expression: &Expression) -> Result<N, EvaluationError> {
    let result = match expression {
        Expression::Number { value } => N::from_decimal(value)?,
        Expression::Plus { left, right } => {
            let mut sum: N = evaluate(left)?;
            sum.add(&evaluate(right)?);
            sum
        }
        Expression::Minus { left, right } => {
            let mut difference: N = evaluate(left)?;
            let subtrahend: N = evaluate(right)?;
            if difference.compare_to(&subtrahend) == Ordering::Less {
                return Err(EvaluationError::NegativeResult {
                    left: difference.to_decimal(),
                    right: subtrahend.to_decimal(),
                });
            }
            difference.subtract(&subtrahend);
            difference
        }
        Expression::Times { left, right } => {
            let mut product: N = evaluate(left)?;
            product.multiply(&evaluate(right)?);
            product
        }
        Expression::Divide { left, right } => {
            let divisor: N = evaluate(right)?;
            if divisor.is_zero() {
                return Err(EvaluationError::DivideByZero);
            }
            let mut quotient: N = evaluate(left)?;
            quotient.divide(&divisor);
            quotient
        }
    };
    debug!("evaluated {} to {}", expression.label(), result.to_decimal());
    Ok(result)
}
