//! Error types for the tabsheet engine.

use thiserror::Error;

use super::grammar::Arity;

/// Errors surfaced by table lookups, formula validation and evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error("Invalid cell index '{0}'")]
    InvalidCellIndex(String),

    #[error("Cell '{0}' does not exist")]
    CellDoesNotExist(String),

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    #[error("Wrong number of arguments for '{name}': expected {expected}, got {got}")]
    WrongArgumentCount {
        name: String,
        expected: Arity,
        got: usize,
    },

    #[error("Invalid expression '{0}'")]
    InvalidExpression(String),

    #[error("Reference chain exceeds {0} levels")]
    RecursionLimit(usize),
}

pub type Result<T> = std::result::Result<T, SheetError>;
