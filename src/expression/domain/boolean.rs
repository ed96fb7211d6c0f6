//! Boolean domain.

use crate::expression::{OperationError, Operator};
use crate::value::Value;

/// `&` and `|` act as logical AND/OR here, not bitwise operators.
pub fn operate(op: Operator, left: &Value, right: &Value) -> Result<Value, OperationError> {
    let (a, b) = match (left.resolve(), right.resolve()) {
        (Value::Bool(a), Value::Bool(b)) => (*a, *b),
        _ => return Err(OperationError::mismatch(op, left, right)),
    };

    let result = match op {
        Operator::And | Operator::Land => a && b,
        Operator::Or | Operator::Lor => a || b,
        Operator::Eq => a == b,
        Operator::Ne => a != b,
        _ => return Err(OperationError::unsupported(op, left, right)),
    };
    Ok(Value::Bool(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Reason;

    fn boolean(op: Operator, a: bool, b: bool) -> Result<Value, OperationError> {
        operate(op, &Value::Bool(a), &Value::Bool(b))
    }

    #[test]
    fn test_logical() {
        assert_eq!(boolean(Operator::Land, true, false).unwrap(), Value::Bool(false));
        assert_eq!(boolean(Operator::Lor, true, false).unwrap(), Value::Bool(true));
        assert_eq!(boolean(Operator::And, true, true).unwrap(), Value::Bool(true));
        assert_eq!(boolean(Operator::Or, false, false).unwrap(), Value::Bool(false));
        assert_eq!(boolean(Operator::Eq, false, false).unwrap(), Value::Bool(true));
        assert_eq!(boolean(Operator::Ne, true, false).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_illegal_operators() {
        for op in [
            Operator::Add,
            Operator::Sub,
            Operator::Mul,
            Operator::Quo,
            Operator::Rem,
            Operator::Lt,
            Operator::Le,
            Operator::Gt,
            Operator::Ge,
        ] {
            let err = boolean(op, true, false).unwrap_err();
            assert_eq!(err.reason, Reason::UnsupportedOperator, "{:?}", op);
        }
    }
}
