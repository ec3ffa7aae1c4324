//! Cell address parsing and formatting.
//!
//! Converts spreadsheet-style addresses (e.g. "A1", "B2", "AA100") into
//! 1-based row/column coordinates and back.
//!
//! # Examples
//!
//! ```ignore
//! let addr = CellAddress::parse("B3").unwrap();
//! assert_eq!(addr.column, 2);
//! assert_eq!(addr.row, 3);
//! assert_eq!(addr.to_string(), "B3");
//! ```

use std::fmt;

use super::error::{Result, SheetError};
use super::grammar::Scanner;

/// A cell position, 1-based: row 1, column 1 is the top-left cell.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellAddress {
    pub row: usize,
    pub column: usize,
}

impl CellAddress {
    pub fn new(row: usize, column: usize) -> CellAddress {
        CellAddress { row, column }
    }

    /// Parse an address matching `[A-Z]+[1-9][0-9]*` exactly.
    ///
    /// Addresses whose row or column overflow `usize` still parse; they saturate
    /// and can never fall inside a table. Lookups report such addresses by the
    /// text they were written as, not by [`Display`](fmt::Display).
    pub fn parse(text: &str) -> Result<CellAddress> {
        let mut scanner = Scanner::new(text);
        match scanner.cell() {
            Some((addr, _)) if scanner.at_end() => Ok(addr),
            _ => Err(SheetError::InvalidCellIndex(text.to_string())),
        }
    }

    /// Build an address from a validated letter run and digit run.
    pub(crate) fn from_parts(letters: &str, digits: &str) -> CellAddress {
        let row = digits.bytes().fold(0usize, |acc, b| {
            acc.saturating_mul(10).saturating_add((b - b'0') as usize)
        });
        CellAddress::new(row, Self::letters_to_column(letters))
    }

    /// Bijective base-26 over uppercase letters: A = 1, Z = 26, AA = 27, AZ = 52, BA = 53.
    pub fn letters_to_column(letters: &str) -> usize {
        letters.bytes().fold(0usize, |acc, b| {
            acc.saturating_mul(26)
                .saturating_add(b.saturating_sub(b'A') as usize + 1)
        })
    }

    /// Convert a 1-based column index to letters (1 -> A, 26 -> Z, 27 -> AA).
    pub fn column_to_letters(column: usize) -> String {
        let mut result = String::new();
        let mut n = column as u128;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl std::str::FromStr for CellAddress {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellAddress::column_to_letters(self.column), self.row)
    }
}
