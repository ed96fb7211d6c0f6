//! Complex domain: arithmetic and equality only.

use crate::expression::{OperationError, Operator};
use crate::value::Value;

pub fn operate(op: Operator, left: &Value, right: &Value) -> Result<Value, OperationError> {
    let (a, b) = match (left.resolve(), right.resolve()) {
        (Value::Complex(a), Value::Complex(b)) => (*a, *b),
        _ => return Err(OperationError::mismatch(op, left, right)),
    };

    let result = match op {
        Operator::Add => Value::Complex(a + b),
        Operator::Sub => Value::Complex(a - b),
        Operator::Mul => Value::Complex(a * b),
        Operator::Quo => Value::Complex(a / b),
        Operator::Eq => Value::Bool(a == b),
        Operator::Ne => Value::Bool(a != b),
        // no ordering, remainder, bitwise or logical operators on complex
        _ => return Err(OperationError::unsupported(op, left, right)),
    };
    Ok(result)
}
