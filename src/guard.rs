//! Inclusion decision for a guarded fragment.

use crate::expression::{EvalError, EvalResult};
use crate::value::Value;

/// Turn the result of a guard evaluation into an include/skip decision.
///
/// Errors propagate unchanged and a non-boolean result is an error: the
/// caller aborts the fragment instead of guessing a default.
pub fn include_fragment(result: EvalResult<Value>) -> EvalResult<bool> {
    let value = result?;
    value.as_bool().ok_or(EvalError::NonBooleanOperand {
        op: "guard",
        found: value.kind_name(),
    })
}
