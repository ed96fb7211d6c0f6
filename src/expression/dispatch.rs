//! Generic dispatcher from an operand pair to a domain operator.

use crate::expression::domain;
use crate::expression::nil::operate_absent;
use crate::expression::{OperationError, Operator};
use crate::value::Value;

/// Apply `op` to `left` and `right`.
///
/// Absent operands take the nil path. Otherwise the left operand picks
/// the domain and the right operand must resolve to the same one; there
/// is no coercion between numeric domains.
pub fn operate(op: Operator, left: &Value, right: &Value) -> Result<Value, OperationError> {
    let result = if left.is_absent() || right.is_absent() {
        operate_absent(op, left, right)
    } else {
        match left.domain() {
            Some(d) if right.domain() == Some(d) => domain::operate_in(d, op, left, right),
            _ => Err(OperationError::mismatch(op, left, right)),
        }
    };

    match &result {
        Ok(value) => log::trace!("{} {} {} => {}", left, op, right, value),
        Err(e) => log::debug!("operation failed: {}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Reason;

    #[test]
    fn test_same_domain_dispatch() {
        assert_eq!(
            operate(Operator::Add, &Value::Int(5), &Value::Int(3)).unwrap(),
            Value::Int(8)
        );
        assert_eq!(
            operate(Operator::Add, &Value::str("Hello"), &Value::str(" World")).unwrap(),
            Value::str("Hello World")
        );
        assert_eq!(
            operate(Operator::Lt, &Value::Uint(1), &Value::some(Value::Uint(2))).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_cross_domain_fails() {
        let err = operate(Operator::Add, &Value::Int(5), &Value::str("3")).unwrap_err();
        assert_eq!(
            err,
            OperationError {
                left: "int",
                right: "string",
                op: Operator::Add,
                reason: Reason::DomainMismatch,
            }
        );

        let err = operate(Operator::Eq, &Value::Int(1), &Value::Uint(1)).unwrap_err();
        assert_eq!(err.reason, Reason::DomainMismatch);
    }

    #[test]
    fn test_non_scalar_operands_fail() {
        let list = Value::List(Some(vec![Value::Int(1)]));
        let err = operate(Operator::Eq, &list, &list).unwrap_err();
        assert_eq!(err.reason, Reason::DomainMismatch);
        assert_eq!((err.left, err.right), ("list", "list"));
    }

    #[test]
    fn test_absent_operands_take_nil_path() {
        assert_eq!(
            operate(Operator::Eq, &Value::Invalid, &Value::Invalid).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            operate(Operator::Eq, &Value::nil(), &Value::boxed(Value::Invalid)).unwrap(),
            Value::Bool(true)
        );
        let err = operate(Operator::Eq, &Value::Int(3), &Value::Invalid).unwrap_err();
        assert_eq!(err.reason, Reason::InvalidOperand);
    }
}
