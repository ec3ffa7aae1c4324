//! Cell evaluation.
//!
//! Raw content is resolved recursively: `=NUMBER` is formatted, `=CELL`
//! follows the reference, and formulas fold their operands left to right.
//! Everything else is returned unchanged. Nothing is cached between calls.

use super::cell_ref::CellAddress;
use super::error::{Result, SheetError};
use super::format::{format_number, leading_number};
use super::grammar::{Content, Formula, Operand, parse_number};
use super::table::Table;
use super::validate::validate;

/// Evaluation settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Deepest allowed chain of nested evaluations. `None` recurses without
    /// limit, so a reference cycle exhausts the stack.
    pub max_depth: Option<usize>,
}

/// Evaluates cells of a borrowed [`Table`].
pub struct Evaluator<'t> {
    table: &'t Table,
    options: EvalOptions,
}

impl<'t> Evaluator<'t> {
    pub fn new(table: &'t Table) -> Self {
        Self::with_options(table, EvalOptions::default())
    }

    pub fn with_options(table: &'t Table, options: EvalOptions) -> Self {
        Evaluator { table, options }
    }

    /// Look up `address`, validate its content and evaluate it.
    pub fn resolve(&self, address: &str) -> Result<String> {
        let raw = self.table.cell_at(address)?;
        validate(raw)?;
        self.evaluate(raw)
    }

    /// Evaluate raw content without validating it first.
    pub fn evaluate(&self, raw: &str) -> Result<String> {
        self.evaluate_at(raw, 0)
    }

    fn evaluate_at(&self, raw: &str, depth: usize) -> Result<String> {
        if let Some(limit) = self.options.max_depth.filter(|&limit| depth > limit) {
            return Err(SheetError::RecursionLimit(limit));
        }

        match Content::classify(raw) {
            Content::Number(n) => Ok(format_number(n)),
            Content::Reference { address, text } => {
                self.evaluate_reference(&address, text, depth)
            }
            Content::Formula(formula) => self.evaluate_formula(&formula, depth),
            Content::Text(text) => Ok(text.to_string()),
        }
    }

    /// A bare number in the target cell takes the same path as `=NUMBER`.
    fn evaluate_reference(
        &self,
        addr: &CellAddress,
        text: &str,
        depth: usize,
    ) -> Result<String> {
        let target = self.table.cell(addr, text)?;
        tracing::trace!(%addr, target, depth, "following reference");
        match parse_number(target) {
            Some(n) => Ok(format_number(n)),
            None => self.evaluate_at(target, depth + 1),
        }
    }

    /// Each operand is evaluated to its display string and read back as a
    /// number, so operands are rounded to two decimals before folding.
    fn evaluate_formula(&self, formula: &Formula, depth: usize) -> Result<String> {
        let values = formula
            .operands
            .iter()
            .map(|operand| -> Result<f64> {
                let shown = match operand {
                    Operand::Number(n) => format_number(*n),
                    Operand::Cell { address, text } => {
                        self.evaluate_reference(address, text, depth)?
                    }
                };
                Ok(leading_number(&shown))
            })
            .collect::<Result<Vec<_>>>()?;

        let function = formula.function;
        let total = values
            .into_iter()
            .reduce(|acc, value| function.apply(acc, value))
            .unwrap_or(0.0);
        tracing::trace!(%function, total, "folded formula");
        Ok(format_number(total))
    }
}
