//! tabsheet-core - Spreadsheet document model + storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::Spreadsheet;
pub use error::{Result, TabsheetError};

pub use tabsheet_engine::engine::{CellAddress, EvalOptions, SheetError, Table};
