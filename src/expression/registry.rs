//! Lookup from lexical operator tokens to executors.

use crate::expression::executor::{
    AndExecutor, BinaryExecutor, CloseParenExecutor, CommentExecutor, Executor,
    NotExecutor, OpenParenExecutor, OrExecutor,
};
use crate::expression::{EvalError, EvalResult, Operator};

static ADD: BinaryExecutor = BinaryExecutor::new(Operator::Add);
static SUB: BinaryExecutor = BinaryExecutor::new(Operator::Sub);
static MUL: BinaryExecutor = BinaryExecutor::new(Operator::Mul);
static QUO: BinaryExecutor = BinaryExecutor::new(Operator::Quo);
static REM: BinaryExecutor = BinaryExecutor::new(Operator::Rem);
static AND: BinaryExecutor = BinaryExecutor::new(Operator::And);
static OR: BinaryExecutor = BinaryExecutor::new(Operator::Or);
static EQL: BinaryExecutor = BinaryExecutor::new(Operator::Eq);
static NEQ: BinaryExecutor = BinaryExecutor::new(Operator::Ne);
static LSS: BinaryExecutor = BinaryExecutor::new(Operator::Lt);
static LEQ: BinaryExecutor = BinaryExecutor::new(Operator::Le);
static GTR: BinaryExecutor = BinaryExecutor::new(Operator::Gt);
static GEQ: BinaryExecutor = BinaryExecutor::new(Operator::Ge);
static LINE_COMMENT: CommentExecutor = CommentExecutor::new("//");
static BLOCK_COMMENT: CommentExecutor = CommentExecutor::new("/*");

/// Every supported token and its executor
static REGISTRY: [(&str, &dyn Executor); 20] = [
    ("+", &ADD),
    ("-", &SUB),
    ("*", &MUL),
    ("/", &QUO),
    ("%", &REM),
    ("&", &AND),
    ("|", &OR),
    ("&&", &AndExecutor),
    ("||", &OrExecutor),
    ("==", &EQL),
    ("!=", &NEQ),
    ("<", &LSS),
    ("<=", &LEQ),
    (">", &GTR),
    (">=", &GEQ),
    ("(", &OpenParenExecutor),
    (")", &CloseParenExecutor),
    ("!", &NotExecutor),
    ("//", &LINE_COMMENT),
    ("/*", &BLOCK_COMMENT),
];

/// Find the executor registered for `token`
pub fn lookup_executor(token: &str) -> EvalResult<&'static dyn Executor> {
    REGISTRY
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, executor)| *executor)
        .ok_or_else(|| EvalError::UnsupportedExpression {
            token: token.to_string(),
        })
}

/// Tokens with a registered executor, in registry order
pub fn supported_tokens() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(token, _)| *token)
}
