//! Comparisons involving absent operands.
//!
//! An operand is absent when it resolves to `Invalid` (untyped nil or a
//! missing parameter) or to a typed nil. Absent operands have no domain,
//! so this path runs before any domain classification.

use crate::expression::{OperationError, Operator};
use crate::value::Value;

/// Apply `op` when at least one operand is absent.
///
/// Two absent operands are equal. An absent operand is neither equal nor
/// unequal to a concrete value, and only `==`/`!=` are defined at all.
pub fn operate_absent(
    op: Operator,
    left: &Value,
    right: &Value,
) -> Result<Value, OperationError> {
    debug_assert!(left.is_absent() || right.is_absent());

    if !op.is_equality() || !(left.is_absent() && right.is_absent()) {
        return Err(OperationError::invalid_operand(op, left, right));
    }
    Ok(Value::Bool(op == Operator::Eq))
}
