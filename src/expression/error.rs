//! Error types for guard evaluation.

use crate::expression::Operator;
use crate::value::Value;
use thiserror::Error;

/// Why an operator could not be applied to its operands
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    #[error("mismatched domains")]
    DomainMismatch,

    #[error("unsupported operator")]
    UnsupportedOperator,

    #[error("invalid operand")]
    InvalidOperand,

    #[error("division by zero")]
    DivisionByZero,
}

/// A failed `left op right` application.
///
/// `left` and `right` describe the operands after unwrapping (`int`,
/// `string`, `invalid`, `nil`, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}: {left} {op} {right}")]
pub struct OperationError {
    pub left: &'static str,
    pub right: &'static str,
    pub op: Operator,
    pub reason: Reason,
}

impl OperationError {
    pub fn new(reason: Reason, op: Operator, left: &Value, right: &Value) -> Self {
        Self {
            left: left.kind_name(),
            right: right.kind_name(),
            op,
            reason,
        }
    }

    pub fn mismatch(op: Operator, left: &Value, right: &Value) -> Self {
        Self::new(Reason::DomainMismatch, op, left, right)
    }

    pub fn unsupported(op: Operator, left: &Value, right: &Value) -> Self {
        Self::new(Reason::UnsupportedOperator, op, left, right)
    }

    pub fn invalid_operand(op: Operator, left: &Value, right: &Value) -> Self {
        Self::new(Reason::InvalidOperand, op, left, right)
    }

    pub fn division_by_zero(op: Operator, left: &Value, right: &Value) -> Self {
        Self::new(Reason::DivisionByZero, op, left, right)
    }
}

/// Errors surfaced by executors and the token registry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("non-boolean operand to {op}: {found}")]
    NonBooleanOperand {
        op: &'static str,
        found: &'static str,
    },

    #[error("unsupported expression: {token}")]
    UnsupportedExpression { token: String },
}

/// Result type for evaluation steps
pub type EvalResult<T> = Result<T, EvalError>;
