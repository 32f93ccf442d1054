//! # slipview-csv
//!
//! CSV reader and writer for slipview tables.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
