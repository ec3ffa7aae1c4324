//! tabsheet_engine - Table store, formula grammar and evaluator.

pub mod engine;

#[cfg(test)]
mod tests {
    use crate::engine::*;

    fn read(text: &str, address: &str) -> Result<String> {
        let table = Table::build(text);
        Evaluator::new(&table).resolve(address)
    }

    #[test]
    fn test_blank_text_builds_empty_table() {
        for text in ["", " ", "\n\n", "\t  \t", "  \n  "] {
            assert_eq!(Table::build(text).row_count(), 0, "{text:?}");
        }
    }

    #[test]
    fn test_single_literal_cell() {
        assert_eq!(read("5", "A1").unwrap(), "5");
    }

    #[test]
    fn test_arithmetic_examples() {
        assert_eq!(read("=ADD(1,2)", "A1").unwrap(), "3");
        assert_eq!(read("=ADD(1,2,3)", "A1").unwrap(), "6");
        assert_eq!(read("=SUBTRACT(5,2)", "A1").unwrap(), "3");
        assert_eq!(read("=MULTIPLY(2,2.5)", "A1").unwrap(), "5");
        assert_eq!(read("=DIVIDE(1,3)", "A1").unwrap(), "0.33");
    }

    #[test]
    fn test_arity_errors() {
        let err = read("=SUBTRACT(1,2,3)", "A1").unwrap_err();
        assert!(matches!(err, SheetError::WrongArgumentCount { got: 3, .. }));
        assert!(err.to_string().ends_with("expected 2, got 3"));

        let err = read("=ADD()", "A1").unwrap_err();
        assert!(err.to_string().ends_with("expected at least 2, got 0"));
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            read("=FOO(1,2)", "A1"),
            Err(SheetError::UnknownFunction("FOO".to_string()))
        );
    }

    #[test]
    fn test_out_of_bounds_operand() {
        assert!(matches!(
            read("1  =ADD(A1,Z9)", "B1"),
            Err(SheetError::CellDoesNotExist(_))
        ));
    }

    #[test]
    fn test_reference_chain() {
        assert_eq!(read("3\t=A1", "B1").unwrap(), "3");
        assert_eq!(read("3\t=A1\n=B1\t=A2", "B2").unwrap(), "3");
    }

    #[test]
    fn test_multi_letter_column_lookup() {
        let row: Vec<String> = (1..=28).map(|n| n.to_string()).collect();
        let table = Table::build(&row.join("\t"));
        let evaluator = Evaluator::new(&table);
        assert_eq!(evaluator.resolve("Z1").unwrap(), "26");
        assert_eq!(evaluator.resolve("AB1").unwrap(), "28");
    }
}
