//! Floating point domain.

use crate::expression::{OperationError, Operator};
use crate::value::Value;

/// Apply `op` to two floats.
///
/// `%`, `&` and `|` truncate both operands to `i64`, compute natively,
/// and convert the result back to a float.
pub fn operate(op: Operator, left: &Value, right: &Value) -> Result<Value, OperationError> {
    let (a, b) = match (left.resolve(), right.resolve()) {
        (Value::Float(a), Value::Float(b)) => (*a, *b),
        _ => return Err(OperationError::mismatch(op, left, right)),
    };

    let result = match op {
        Operator::Add => Value::Float(a + b),
        Operator::Sub => Value::Float(a - b),
        Operator::Mul => Value::Float(a * b),
        Operator::Quo => Value::Float(a / b),
        Operator::Rem => {
            let (ta, tb) = (a as i64, b as i64);
            if tb == 0 {
                return Err(OperationError::division_by_zero(op, left, right));
            }
            Value::Float(ta.wrapping_rem(tb) as f64)
        }
        Operator::And => Value::Float(((a as i64) & (b as i64)) as f64),
        Operator::Or => Value::Float(((a as i64) | (b as i64)) as f64),
        Operator::Land => Value::Bool(a != 0.0 && b != 0.0),
        Operator::Lor => Value::Bool(a != 0.0 || b != 0.0),
        // IEEE comparisons: NaN is unordered and unequal to everything
        Operator::Eq => Value::Bool(a == b),
        Operator::Ne => Value::Bool(a != b),
        Operator::Lt => Value::Bool(a < b),
        Operator::Le => Value::Bool(a <= b),
        Operator::Gt => Value::Bool(a > b),
        Operator::Ge => Value::Bool(a >= b),
    };
    Ok(result)
}
