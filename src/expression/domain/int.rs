//! Signed integer domain.

use crate::expression::{OperationError, Operator};
use crate::value::Value;

/// Apply `op` to two signed integers.
///
/// Arithmetic wraps on overflow; `/` and `%` truncate toward zero.
pub fn operate(op: Operator, left: &Value, right: &Value) -> Result<Value, OperationError> {
    let (a, b) = match (left.resolve(), right.resolve()) {
        (Value::Int(a), Value::Int(b)) => (*a, *b),
        _ => return Err(OperationError::mismatch(op, left, right)),
    };

    let result = match op {
        Operator::Add => Value::Int(a.wrapping_add(b)),
        Operator::Sub => Value::Int(a.wrapping_sub(b)),
        Operator::Mul => Value::Int(a.wrapping_mul(b)),
        Operator::Quo | Operator::Rem if b == 0 => {
            return Err(OperationError::division_by_zero(op, left, right))
        }
        Operator::Quo => Value::Int(a.wrapping_div(b)),
        Operator::Rem => Value::Int(a.wrapping_rem(b)),
        Operator::And => Value::Int(a & b),
        Operator::Or => Value::Int(a | b),
        Operator::Land => Value::Bool(a != 0 && b != 0),
        Operator::Lor => Value::Bool(a != 0 || b != 0),
        Operator::Eq | Operator::Ne | Operator::Lt | Operator::Le | Operator::Gt | Operator::Ge => {
            match op.holds(a.cmp(&b)) {
                Some(holds) => Value::Bool(holds),
                None => return Err(OperationError::unsupported(op, left, right)),
            }
        }
    };
    Ok(result)
}
