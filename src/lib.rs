pub mod binding;
pub mod expression;
pub mod guard;
pub mod value;

pub use binding::Bindings;
pub use expression::{lookup_executor, operate, EvalError, EvalResult, Executor, OperationError};
pub use guard::include_fragment;
pub use value::{Domain, Value};
