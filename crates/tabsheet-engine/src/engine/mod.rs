//! Spreadsheet engine API.
//!
//! - [`CellAddress`] - Address parsing (A1 notation ↔ 1-based row/column)
//! - [`Table`] - Raw cell storage built from delimited text
//! - [`Content`], [`Formula`], [`Function`] - Formula grammar
//! - [`validate`] - Ordered formula validation
//! - [`Evaluator`] - Recursive cell evaluation
//! - [`format_number`] - Display formatting for computed values

mod cell_ref;
mod error;
mod eval;
mod format;
mod grammar;
mod table;
mod validate;

pub use cell_ref::CellAddress;
pub use error::{Result, SheetError};
pub use eval::{EvalOptions, Evaluator};
pub use format::{format_number, leading_number};
pub use grammar::{
    Arity, Call, Content, FUNCTIONS, Formula, Function, Operand, is_number, parse_number,
};
pub use table::Table;
pub use validate::validate;
