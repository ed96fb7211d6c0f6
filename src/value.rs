//! Dynamically typed operand values.
//!
//! A [`Value`] is what the rendering layer hands the evaluator: a bound
//! parameter or the result of a previous sub-expression. Values may sit
//! behind any number of indirection layers (pointers, optionals, boxed
//! dynamic values); [`Value::resolve`] peels those layers before a value
//! is classified into a [`Domain`].

pub mod complex;

pub use complex::Complex;

use serde::Serialize;
use std::fmt;

/// The scalar categories an operand can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Domain {
    Int,
    Uint,
    Float,
    Complex,
    String,
    Bool,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Int => "int",
            Domain::Uint => "uint",
            Domain::Float => "float",
            Domain::Complex => "complex",
            Domain::String => "string",
            Domain::Bool => "bool",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically typed operand
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// Absent operand: a missing parameter or an untyped nil.
    Invalid,
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex(Complex),
    Str(String),
    Bool(bool),
    /// Pointer or optional. `None` is a typed nil.
    Ref(Option<Box<Value>>),
    /// Boxed dynamic value. Boxing `Invalid` gives an untyped nil.
    Boxed(Box<Value>),
    /// Container. `None` is a typed nil; a present list has no domain.
    List(Option<Vec<Value>>),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn complex(re: f64, im: f64) -> Self {
        Value::Complex(Complex::new(re, im))
    }

    /// Pointer/optional wrapping `inner`.
    pub fn some(inner: Value) -> Self {
        Value::Ref(Some(Box::new(inner)))
    }

    /// Typed nil pointer/optional.
    pub fn nil() -> Self {
        Value::Ref(None)
    }

    pub fn boxed(inner: Value) -> Self {
        Value::Boxed(Box::new(inner))
    }

    /// Peel pointer/optional/boxed layers down to the innermost value.
    ///
    /// Stops at a concrete scalar, at `Invalid`, or at a typed nil.
    pub fn resolve(&self) -> &Value {
        match self {
            Value::Ref(Some(inner)) | Value::Boxed(inner) => inner.resolve(),
            other => other,
        }
    }

    /// Domain of the resolved value, `None` when it has no scalar domain.
    pub fn domain(&self) -> Option<Domain> {
        match self.resolve() {
            Value::Int(_) => Some(Domain::Int),
            Value::Uint(_) => Some(Domain::Uint),
            Value::Float(_) => Some(Domain::Float),
            Value::Complex(_) => Some(Domain::Complex),
            Value::Str(_) => Some(Domain::String),
            Value::Bool(_) => Some(Domain::Bool),
            Value::Invalid | Value::Ref(_) | Value::Boxed(_) | Value::List(_) => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.resolve(), Value::Invalid)
    }

    /// True for a typed-but-empty nilable value.
    pub fn is_nil(&self) -> bool {
        matches!(self.resolve(), Value::Ref(None) | Value::List(None))
    }

    /// True when the value is either invalid or a typed nil.
    pub fn is_absent(&self) -> bool {
        self.is_invalid() || self.is_nil()
    }

    /// Description of the resolved value used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self.resolve() {
            Value::Invalid => "invalid",
            Value::Ref(None) | Value::List(None) => "nil",
            Value::List(Some(_)) => "list",
            resolved => resolved.domain().map_or("invalid", |d| d.as_str()),
        }
    }

    /// Boolean payload of the resolved value.
    pub fn as_bool(&self) -> Option<bool> {
        match self.resolve() {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Ref(Some(inner)) | Value::Boxed(inner) => write!(f, "{}", inner),
            Value::Invalid => write!(f, "<invalid>"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Uint(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Complex(c) => write!(f, "{}", c),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Ref(None) | Value::List(None) => write!(f, "<nil>"),
            Value::List(Some(items)) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Uint(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Uint(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Complex> for Value {
    fn from(c: Complex) -> Self {
        Value::Complex(c)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        Value::Ref(opt.map(|v| Box::new(v.into())))
    }
}
