//! String domain: concatenation and lexicographic comparison.

use crate::expression::{OperationError, Operator};
use crate::value::Value;

pub fn operate(op: Operator, left: &Value, right: &Value) -> Result<Value, OperationError> {
    let (a, b) = match (left.resolve(), right.resolve()) {
        (Value::Str(a), Value::Str(b)) => (a, b),
        _ => return Err(OperationError::mismatch(op, left, right)),
    };

    if op == Operator::Add {
        let mut joined = String::with_capacity(a.len() + b.len());
        joined.push_str(a);
        joined.push_str(b);
        return Ok(Value::Str(joined));
    }

    // Byte order of UTF-8 matches code point order
    match op.holds(a.as_str().cmp(b.as_str())) {
        Some(holds) => Ok(Value::Bool(holds)),
        None => Err(OperationError::unsupported(op, left, right)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Reason;

    fn string(op: Operator, a: &str, b: &str) -> Result<Value, OperationError> {
        operate(op, &Value::str(a), &Value::str(b))
    }

    #[test]
    fn test_concatenation() {
        assert_eq!(
            string(Operator::Add, "Hello", " World").unwrap(),
            Value::str("Hello World")
        );
        assert_eq!(string(Operator::Add, "", "").unwrap(), Value::str(""));
    }

    #[test]
    fn test_lexicographic_ordering() {
        assert_eq!(string(Operator::Lt, "abc", "abd").unwrap(), Value::Bool(true));
        assert_eq!(string(Operator::Lt, "ab", "abc").unwrap(), Value::Bool(true));
        assert_eq!(string(Operator::Gt, "b", "abc").unwrap(), Value::Bool(true));
        assert_eq!(string(Operator::Le, "abc", "abc").unwrap(), Value::Bool(true));
        assert_eq!(string(Operator::Ge, "Z", "a").unwrap(), Value::Bool(false));
        assert_eq!(string(Operator::Lt, "z", "é").unwrap(), Value::Bool(true));
        assert_eq!(string(Operator::Eq, "x", "x").unwrap(), Value::Bool(true));
        assert_eq!(string(Operator::Ne, "x", "x").unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_illegal_operators() {
        for op in [
            Operator::Sub,
            Operator::Mul,
            Operator::Quo,
            Operator::Rem,
            Operator::And,
            Operator::Or,
            Operator::Land,
            Operator::Lor,
        ] {
            let err = string(op, "a", "b").unwrap_err();
            assert_eq!(err.reason, Reason::UnsupportedOperator, "{:?}", op);
        }
    }

    #[test]
    fn test_no_numeric_coercion() {
        let err = operate(Operator::Add, &Value::str("3"), &Value::Int(5)).unwrap_err();
        assert_eq!(err.reason, Reason::DomainMismatch);
    }
}
