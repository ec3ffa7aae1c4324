//! Error types for tabsheet core.

use thiserror::Error;

use tabsheet_engine::engine::SheetError;

/// Errors that can occur while loading, reading or saving a spreadsheet
#[derive(Error, Debug)]
pub enum TabsheetError {
    /// The underlying I/O error is the source, not part of this message.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sheet(#[from] SheetError),
}

pub type Result<T> = std::result::Result<T, TabsheetError>;
