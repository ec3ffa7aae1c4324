//! Formula validation.
//!
//! Formulas are checked lazily, on each read, by a fixed sequence of checks.
//! The first failing check wins, so a formula with an unknown name and a bad
//! argument list reports the unknown name.

use super::cell_ref::CellAddress;
use super::error::{Result, SheetError};
use super::grammar::{Call, Function, is_number};

/// A single check over the formula body (the text after `=`).
type Check = fn(&str) -> Result<()>;

const CHECKS: [Check; 3] = [check_function_name, check_argument_count, check_expression];

/// Validate raw cell content. Anything not starting with `=` passes, as do
/// bare `=NUMBER` and `=CELL` contents.
pub fn validate(raw: &str) -> Result<()> {
    let Some(expr) = raw.strip_prefix('=') else {
        return Ok(());
    };
    if is_number(expr) || CellAddress::parse(expr).is_ok() {
        return Ok(());
    }

    CHECKS
        .iter()
        .try_for_each(|check| check(expr))
        .inspect_err(|err| tracing::debug!(%err, raw, "formula rejected"))
}

/// The name before the first `(` must be a known function, when the body
/// also has a closing `)` after it.
fn check_function_name(expr: &str) -> Result<()> {
    let Some((name, rest)) = expr.split_once('(') else {
        return Ok(());
    };
    if name.is_empty() || !rest.contains(')') || Function::from_name(name).is_some() {
        return Ok(());
    }
    Err(SheetError::UnknownFunction(name.to_string()))
}

/// Comma-separated arguments between the first `(` and the last `)` must fit
/// the function's arity. `()` and a missing `)` both count as zero arguments.
fn check_argument_count(expr: &str) -> Result<()> {
    let Some((name, rest)) = expr.split_once('(') else {
        return Ok(());
    };
    let Some(function) = Function::from_name(name) else {
        return Ok(());
    };

    let got = match rest.rfind(')') {
        Some(0) | None => 0,
        Some(end) => rest[..end].matches(',').count() + 1,
    };
    if function.arity().accepts(got) {
        return Ok(());
    }
    Err(SheetError::WrongArgumentCount {
        name: name.to_string(),
        expected: function.arity(),
        got,
    })
}

fn check_expression(expr: &str) -> Result<()> {
    match Call::parse(expr) {
        Some(_) => Ok(()),
        None => Err(SheetError::InvalidExpression(expr.to_string())),
    }
}
