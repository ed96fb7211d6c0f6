//! Guard expression evaluation.
//!
//! This module provides:
//! - Operators and the errors raised when applying them
//! - One operator implementation per value domain
//! - Nil/invalid operand handling and the generic dispatcher
//! - Short-circuit aware executors and the token registry

pub mod dispatch;
pub mod domain;
pub mod error;
pub mod executor;
pub mod nil;
pub mod operator;
pub mod registry;

pub use dispatch::operate;
pub use error::{EvalError, EvalResult, OperationError, Reason};
pub use executor::{continuation, Continuation, Executor};
pub use operator::Operator;
pub use registry::{lookup_executor, supported_tokens};
