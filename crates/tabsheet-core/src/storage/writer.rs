//! Writer for delimited table text.

use crate::error::Result;
use std::fs;
use std::path::Path;
use tabsheet_engine::engine::Table;

/// Join cells with `separator` and rows with newlines, without a trailing newline.
pub fn render_rows<S: AsRef<str>>(rows: &[Vec<S>], separator: &str) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(separator)
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Raw cell contents, tab-separated.
pub fn write_raw_content(table: &Table) -> String {
    table
        .rows()
        .map(|row| row.join("\t"))
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn write_table_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote table file");
    Ok(())
}
