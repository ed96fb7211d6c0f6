//! Short-circuit aware evaluation steps.
//!
//! A walker evaluates a guard left to right. At each operator it hands
//! the matching [`Executor`] the value accumulated so far and a
//! [`Continuation`] that produces the right-hand side on demand. The
//! executor decides whether the continuation is forced at all.

use crate::expression::dispatch::operate;
use crate::expression::{EvalError, EvalResult, Operator};
use crate::value::Value;

/// Deferred right-hand side of an operator
pub type Continuation<'a> = Box<dyn FnOnce() -> EvalResult<Value> + 'a>;

/// Box a closure as a [`Continuation`]
pub fn continuation<'a, F>(f: F) -> Continuation<'a>
where
    F: FnOnce() -> EvalResult<Value> + 'a,
{
    Box::new(f)
}

/// A stateless evaluation step bound to one operator token
pub trait Executor: Send + Sync {
    /// Token this executor is registered under
    fn symbol(&self) -> &'static str;

    /// Combine `left` with whatever `next` produces, forcing `next` only
    /// when the result depends on it.
    fn evaluate(&self, left: Value, next: Continuation<'_>) -> EvalResult<Value>;
}

/// Arithmetic, bitwise and relational operators: always forces `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryExecutor {
    op: Operator,
}

impl BinaryExecutor {
    pub const fn new(op: Operator) -> Self {
        Self { op }
    }

    pub fn operator(&self) -> Operator {
        self.op
    }
}

impl Executor for BinaryExecutor {
    fn symbol(&self) -> &'static str {
        self.op.as_str()
    }

    fn evaluate(&self, left: Value, next: Continuation<'_>) -> EvalResult<Value> {
        let right = next()?;
        Ok(operate(self.op, &left, &right)?)
    }
}

fn require_bool(op: &'static str, value: &Value) -> EvalResult<bool> {
    value.as_bool().ok_or(EvalError::NonBooleanOperand {
        op,
        found: value.kind_name(),
    })
}

/// `&&`: a false left side is returned without forcing `next`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndExecutor;

impl Executor for AndExecutor {
    fn symbol(&self) -> &'static str {
        Operator::Land.as_str()
    }

    fn evaluate(&self, left: Value, next: Continuation<'_>) -> EvalResult<Value> {
        if !require_bool(self.symbol(), &left)? {
            log::trace!("&& short-circuited on false");
            return Ok(left);
        }
        let right = next()?;
        Ok(operate(Operator::Land, &left, &right)?)
    }
}

/// `||`: a true left side is returned without forcing `next`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrExecutor;

impl Executor for OrExecutor {
    fn symbol(&self) -> &'static str {
        Operator::Lor.as_str()
    }

    fn evaluate(&self, left: Value, next: Continuation<'_>) -> EvalResult<Value> {
        if require_bool(self.symbol(), &left)? {
            log::trace!("|| short-circuited on true");
            return Ok(left);
        }
        let right = next()?;
        Ok(operate(Operator::Lor, &left, &right)?)
    }
}

/// `(`: transparent grouping, yields the enclosed sub-expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenParenExecutor;

impl Executor for OpenParenExecutor {
    fn symbol(&self) -> &'static str {
        "("
    }

    fn evaluate(&self, _left: Value, next: Continuation<'_>) -> EvalResult<Value> {
        next()
    }
}

/// `)`: terminal passthrough.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloseParenExecutor;

impl Executor for CloseParenExecutor {
    fn symbol(&self) -> &'static str {
        ")"
    }

    fn evaluate(&self, left: Value, _next: Continuation<'_>) -> EvalResult<Value> {
        Ok(left)
    }
}

/// Unary `!`. The left input is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotExecutor;

impl Executor for NotExecutor {
    fn symbol(&self) -> &'static str {
        "!"
    }

    fn evaluate(&self, _left: Value, next: Continuation<'_>) -> EvalResult<Value> {
        let operand = next()?;
        Ok(Value::Bool(!require_bool(self.symbol(), &operand)?))
    }
}

/// Comment marker: the fragment is always included.
#[derive(Debug, Clone, Copy)]
pub struct CommentExecutor {
    marker: &'static str,
}

impl CommentExecutor {
    pub const fn new(marker: &'static str) -> Self {
        Self { marker }
    }
}

impl Executor for CommentExecutor {
    fn symbol(&self) -> &'static str {
        self.marker
    }

    fn evaluate(&self, _left: Value, _next: Continuation<'_>) -> EvalResult<Value> {
        Ok(Value::Bool(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{OperationError, Reason};
    use std::cell::Cell;

    fn value(v: Value) -> Continuation<'static> {
        continuation(move || Ok(v))
    }

    fn never() -> Continuation<'static> {
        continuation(|| panic!("continuation must not be forced"))
    }

    #[test]
    fn test_binary_forces_continuation() {
        let calls = Cell::new(0);
        let next = continuation(|| {
            calls.set(calls.get() + 1);
            Ok(Value::Int(3))
        });
        let result = BinaryExecutor::new(Operator::Add)
            .evaluate(Value::Int(5), next)
            .unwrap();
        assert_eq!(result, Value::Int(8));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_binary_propagates_errors() {
        let err = BinaryExecutor::new(Operator::Lt)
            .evaluate(Value::complex(1.0, 2.0), value(Value::complex(3.0, 4.0)))
            .unwrap_err();
        assert!(matches!(
            err,
            EvalError::Operation(OperationError {
                reason: Reason::UnsupportedOperator,
                ..
            })
        ));

        let err = BinaryExecutor::new(Operator::Add)
            .evaluate(
                Value::Int(1),
                continuation(|| {
                    Err(EvalError::UnsupportedExpression {
                        token: "?".to_string(),
                    })
                }),
            )
            .unwrap_err();
        assert!(matches!(err, EvalError::UnsupportedExpression { .. }));
    }

    #[test]
    fn test_and_short_circuits() {
        assert_eq!(
            AndExecutor.evaluate(Value::Bool(false), never()).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            AndExecutor
                .evaluate(Value::Bool(true), value(Value::Bool(false)))
                .unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            AndExecutor
                .evaluate(Value::some(Value::Bool(true)), value(Value::Bool(true)))
                .unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_or_short_circuits() {
        assert_eq!(
            OrExecutor.evaluate(Value::Bool(true), never()).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            OrExecutor
                .evaluate(Value::Bool(false), value(Value::Bool(true)))
                .unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_logical_rejects_non_boolean_left_before_forcing() {
        let err = AndExecutor.evaluate(Value::Int(1), never()).unwrap_err();
        assert_eq!(
            err,
            EvalError::NonBooleanOperand {
                op: "&&",
                found: "int"
            }
        );
        let err = OrExecutor.evaluate(Value::Invalid, never()).unwrap_err();
        assert_eq!(
            err,
            EvalError::NonBooleanOperand {
                op: "||",
                found: "invalid"
            }
        );
    }

    #[test]
    fn test_logical_rejects_non_boolean_right() {
        let err = AndExecutor
            .evaluate(Value::Bool(true), value(Value::Int(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            EvalError::Operation(OperationError {
                reason: Reason::DomainMismatch,
                ..
            })
        ));
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            OpenParenExecutor
                .evaluate(Value::Invalid, value(Value::Int(4)))
                .unwrap(),
            Value::Int(4)
        );
        assert_eq!(
            CloseParenExecutor.evaluate(Value::str("x"), never()).unwrap(),
            Value::str("x")
        );
    }

    #[test]
    fn test_not() {
        assert_eq!(
            NotExecutor
                .evaluate(Value::Invalid, value(Value::Bool(true)))
                .unwrap(),
            Value::Bool(false)
        );
        let err = NotExecutor
            .evaluate(Value::Invalid, value(Value::str("true")))
            .unwrap_err();
        assert_eq!(
            err,
            EvalError::NonBooleanOperand {
                op: "!",
                found: "string"
            }
        );
    }

    #[test]
    fn test_comment_is_always_true() {
        let comment = CommentExecutor::new("//");
        assert_eq!(comment.symbol(), "//");
        assert_eq!(
            comment.evaluate(Value::Invalid, never()).unwrap(),
            Value::Bool(true)
        );
    }
}
