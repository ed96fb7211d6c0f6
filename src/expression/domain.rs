//! Per-domain operator implementations.
//!
//! Each submodule exposes `operate(op, left, right)`, which only accepts
//! operands resolving to its own domain and fails with an
//! [`OperationError`] for anything else, including operators the domain
//! does not define.

pub mod boolean;
pub mod complex;
pub mod float;
pub mod int;
pub mod string;
pub mod uint;

use crate::expression::{OperationError, Operator};
use crate::value::{Domain, Value};

/// Route to the operator implementation for `domain`
pub fn operate_in(
    domain: Domain,
    op: Operator,
    left: &Value,
    right: &Value,
) -> Result<Value, OperationError> {
    match domain {
        Domain::Int => int::operate(op, left, right),
        Domain::Uint => uint::operate(op, left, right),
        Domain::Float => float::operate(op, left, right),
        Domain::Complex => complex::operate(op, left, right),
        Domain::String => string::operate(op, left, right),
        Domain::Bool => boolean::operate(op, left, right),
    }
}
