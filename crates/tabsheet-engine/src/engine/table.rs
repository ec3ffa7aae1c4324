//! Table store.
//!
//! A table is an ordered list of rows of raw cell strings, exactly as read
//! from the source text. Rows are not required to share a length.

use regex::Regex;
use std::sync::OnceLock;

use super::cell_ref::CellAddress;
use super::error::{Result, SheetError};

/// Two or more spaces, a tab, or a newline.
fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"( {2,}|\t|\n)").expect("separator pattern is valid"))
}

/// ASCII whitespace (vertical tab included) and NUL; other Unicode spaces are cell content.
fn is_edge_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C' | '\0')
}

fn is_blank(token: &str) -> bool {
    token
        .chars()
        .all(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Table {
        Table { rows }
    }

    /// Build a table from whitespace-delimited text.
    ///
    /// The text is split into alternating content and separator tokens. The
    /// position of the first newline separator fixes the row width, and every
    /// non-blank content token is then chunked into rows of that width. Text
    /// without a newline forms a single row.
    pub fn build(text: &str) -> Table {
        let text = text.trim_matches(is_edge_space);
        if text.is_empty() {
            return Table::default();
        }

        let mut tokens: Vec<&str> = Vec::new();
        let mut last = 0;
        for sep in separator_re().find_iter(text) {
            tokens.push(&text[last..sep.start()]);
            tokens.push(sep.as_str());
            last = sep.end();
        }
        tokens.push(&text[last..]);

        let width = tokens
            .iter()
            .position(|t| *t == "\n")
            .map(|idx| (idx + 1) / 2)
            .unwrap_or(tokens.len())
            .max(1);

        let cells: Vec<String> = tokens
            .into_iter()
            .filter(|t| !is_blank(t))
            .map(str::to_string)
            .collect();
        let rows: Vec<Vec<String>> = cells.chunks(width).map(<[String]>::to_vec).collect();

        tracing::debug!(rows = rows.len(), width, "built table");
        Table { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Raw content at a 1-based position.
    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        let row = self.rows.get(row.checked_sub(1)?)?;
        row.get(column.checked_sub(1)?).map(String::as_str)
    }

    /// Raw content at `addr`, failing with `text` (how the address was
    /// written) when it lies outside the table.
    pub fn cell(&self, addr: &CellAddress, text: &str) -> Result<&str> {
        self.get(addr.row, addr.column)
            .ok_or_else(|| SheetError::CellDoesNotExist(text.to_string()))
    }

    /// Parse `text` as an address and return the raw content there.
    pub fn cell_at(&self, text: &str) -> Result<&str> {
        let addr = CellAddress::parse(text)?;
        self.cell(&addr, text)
    }
}
