//! Parser for delimited table text.

use crate::error::{Result, TabsheetError};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use tabsheet_engine::engine::Table;

pub const MAX_TABLE_FILE_BYTES: u64 = 16 * 1_048_576; // 16 MiB

/// Parse a table file.
pub fn parse_table_file(path: &Path) -> Result<Table> {
    let meta = fs::metadata(path)?;
    if meta.len() > MAX_TABLE_FILE_BYTES {
        return Err(too_large(path.display(), format!("{} bytes", meta.len())));
    }
    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read table file");
    Ok(parse_table_content(&content))
}

/// Read table text from any reader (e.g. stdin), refusing input larger than
/// [`MAX_TABLE_FILE_BYTES`].
pub fn read_table(reader: impl Read) -> Result<Table> {
    let mut bytes = Vec::new();
    reader
        .take(MAX_TABLE_FILE_BYTES + 1)
        .read_to_end(&mut bytes)?;
    if bytes.len() as u64 > MAX_TABLE_FILE_BYTES {
        return Err(too_large(
            "input",
            format!("more than {} bytes", MAX_TABLE_FILE_BYTES),
        ));
    }
    let content = String::from_utf8(bytes)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    Ok(parse_table_content(&content))
}

fn too_large(source: impl fmt::Display, size: String) -> TabsheetError {
    TabsheetError::Io(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        format!(
            "Refusing to read {}: table too large ({}, max {})",
            source, size, MAX_TABLE_FILE_BYTES
        ),
    ))
}

/// Parse table text from a string.
pub fn parse_table_content(content: &str) -> Table {
    Table::build(content)
}
