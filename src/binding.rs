//! Parameter bindings supplied by the rendering layer.
//!
//! Guards reference parameters by name. A name with no binding resolves
//! to [`Value::Invalid`], which the evaluator treats as an absent operand.

use crate::value::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while building bindings
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Invalid parameter JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parameters must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Named parameter values for one statement render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    params: HashMap<String, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Bound value for `name`, or `Invalid` when nothing is bound.
    pub fn get(&self, name: &str) -> Value {
        self.params.get(name).cloned().unwrap_or(Value::Invalid)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parse bindings from a JSON object such as `{"id": 5, "name": "x"}`
    pub fn from_json(text: &str) -> Result<Self, BindingError> {
        match serde_json::from_str::<serde_json::Value>(text)? {
            serde_json::Value::Object(map) => Ok(Self {
                params: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            }),
            other => Err(BindingError::NotAnObject(json_kind(&other))),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl From<serde_json::Value> for Value {
    /// `null` is an absent operand. Integers become `Int` when they fit in
    /// `i64` and `Uint` otherwise. Arrays and objects are containers.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Invalid,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(Some(items.into_iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(map) => {
                Value::List(Some(map.into_iter().map(|(_, v)| Value::from(v)).collect()))
            }
        }
    }
}
