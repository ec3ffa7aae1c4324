//! Reading and writing delimited table text.

mod parser;
mod writer;

pub use parser::{MAX_TABLE_FILE_BYTES, parse_table_content, parse_table_file, read_table};
pub use writer::{render_rows, write_raw_content, write_table_file};
