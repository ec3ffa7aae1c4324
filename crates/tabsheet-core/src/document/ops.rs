use super::Spreadsheet;
use crate::error::Result;
use crate::storage::{render_rows, write_raw_content};
use tabsheet_engine::engine::Evaluator;

impl Spreadsheet {
    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::with_options(&self.table, self.options)
    }

    /// Raw content of a cell, without validation or evaluation.
    pub fn cell_at(&self, address: &str) -> Result<&str> {
        Ok(self.table.cell_at(address)?)
    }

    /// Validate and evaluate the cell at `address`.
    pub fn get(&self, address: &str) -> Result<String> {
        Ok(self.evaluator().resolve(address)?)
    }

    /// Evaluate every cell, row by row. Formulas are not validated here, so a
    /// malformed formula shows up as its raw text.
    pub fn evaluated_rows(&self) -> Result<Vec<Vec<String>>> {
        let evaluator = self.evaluator();
        let mut rows = Vec::with_capacity(self.table.row_count());
        for row in self.table.rows() {
            let values = row
                .iter()
                .map(|raw| evaluator.evaluate(raw))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows.push(values);
        }
        Ok(rows)
    }

    /// Evaluated cells, tab-joined per row, rows joined by newlines.
    pub fn render(&self) -> Result<String> {
        self.render_with("\t")
    }

    pub fn render_with(&self, separator: &str) -> Result<String> {
        Ok(render_rows(&self.evaluated_rows()?, separator))
    }

    /// Raw cell contents in the same layout as [`Spreadsheet::render`].
    pub fn render_raw(&self) -> String {
        write_raw_content(&self.table)
    }
}
