use super::Spreadsheet;
use crate::error::Result;
use crate::storage::{parse_table_file, write_table_file};
use std::path::Path;

impl Spreadsheet {
    /// Load a spreadsheet from a delimited text file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_table(parse_table_file(path)?))
    }

    /// Write the evaluated table to `path`.
    pub fn save_rendered(&self, path: &Path, separator: &str) -> Result<()> {
        let content = self.render_with(separator)?;
        write_table_file(path, &content)
    }

    /// Write the raw table to `path`, so it can be loaded again.
    pub fn save_raw(&self, path: &Path) -> Result<()> {
        write_table_file(path, &self.render_raw())
    }
}
