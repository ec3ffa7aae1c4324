use tabsheet_engine::engine::{EvalOptions, Table};

/// A table of raw cells plus the settings used to evaluate it.
///
/// The table is built once and never mutated; every read evaluates from the
/// raw contents again.
#[derive(Clone, Debug, Default)]
pub struct Spreadsheet {
    pub table: Table,
    pub options: EvalOptions,
}

impl Spreadsheet {
    /// Build a spreadsheet from delimited text. Blank text gives an empty sheet.
    pub fn new(text: &str) -> Self {
        Self::from_table(Table::build(text))
    }

    pub fn from_table(table: Table) -> Self {
        Spreadsheet {
            table,
            options: EvalOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
