//! Operator definitions for guard expressions.

use serde::Serialize;
use std::fmt;

/// Binary operators a domain can implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Quo,
    Rem,

    // Bitwise
    And,
    Or,

    // Logical
    Land,
    Lor,

    // Relational
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operator {
    pub const ALL: [Operator; 15] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Quo,
        Operator::Rem,
        Operator::And,
        Operator::Or,
        Operator::Land,
        Operator::Lor,
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
    ];

    /// `+ - * /`, the operators every numeric domain shares.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Quo
        )
    }

    pub fn is_bitwise(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Operator::Land | Operator::Lor)
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, Operator::Eq | Operator::Ne)
    }

    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Operator::Lt | Operator::Le | Operator::Gt | Operator::Ge
        )
    }

    /// Apply an ordering/equality operator to a precomputed comparison.
    pub(crate) fn holds(&self, ord: std::cmp::Ordering) -> Option<bool> {
        use std::cmp::Ordering::*;
        match self {
            Operator::Eq => Some(ord == Equal),
            Operator::Ne => Some(ord != Equal),
            Operator::Lt => Some(ord == Less),
            Operator::Le => Some(ord != Greater),
            Operator::Gt => Some(ord == Greater),
            Operator::Ge => Some(ord != Less),
            _ => None,
        }
    }

    /// Get the display string for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Quo => "/",
            Operator::Rem => "%",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Land => "&&",
            Operator::Lor => "||",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
