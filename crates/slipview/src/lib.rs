//! # slipview
//!
//! Sorting, filtering and summing for tabular report data, plus the report
//! form's cross-field validation.
//!
//! ## Features
//!
//! - Toggle sort by any column (numeric when both cells are numbers, text otherwise)
//! - Per-column case-insensitive substring filter
//! - Footer-labelled column sum that turns `NaN` on non-numeric data
//! - Reset to all rows visible, no filters, sorted by the first column
//! - Date range, amount range and password confirmation checks
//! - CSV input and output
//!
//! ## Example
//!
//! ```rust
//! use slipview::prelude::*;
//!
//! let schema = Schema::from_names(["id", "name", "summ"]).unwrap();
//! let table = Table::from_text_rows(
//!     schema,
//!     [["2", "Milk", "5"], ["1", "Bread", "3"], ["3", "Eggs", "2"]],
//! )
//! .with_footer(["", "", "summ"])
//! .unwrap();
//!
//! let mut view = TableView::new(table);
//! view.sort(0).unwrap();
//! view.apply_filter(1, "e").unwrap();
//!
//! assert_eq!(view.visible_count(), 2);
//! assert_eq!(view.compute_sum().unwrap().to_string(), "10");
//! ```

pub mod aggregate;
pub mod filter;
pub mod options;
pub mod prelude;
pub mod reset;
pub mod sort;
pub mod validation;
pub mod view;

pub use aggregate::Sum;
pub use filter::{FilterBar, FilterOutcome};
pub use options::ViewOptions;
pub use reset::ResetOutcome;
pub use sort::{SortDirection, SortOutcome};
pub use validation::{FieldMap, FormFields, RangeCheck};
pub use view::TableView;

// Re-export core types
pub use slipview_core::{
    parse_int_prefix, parse_number, Cell, CellValue, Column, ColumnKind, Error, Result, Row,
    Schema, Table,
};

// Re-export I/O types
pub use slipview_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator,
};

use std::io::Write;
use std::path::Path;

/// Extension trait for TableView to add CSV I/O
pub trait TableViewExt: Sized {
    /// Open a CSV file as a view
    fn open<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<Self>;

    /// Write the visible rows, in display order, as CSV
    fn write_csv<W: Write>(&self, writer: W, options: &CsvWriteOptions) -> Result<()>;

    /// Save the visible rows, in display order, to a CSV file
    fn save<P: AsRef<Path>>(&self, path: P, options: &CsvWriteOptions) -> Result<()>;
}

impl TableViewExt for TableView {
    fn open<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<TableView> {
        let table =
            CsvReader::read_file(path, options).map_err(|e| Error::other(e.to_string()))?;
        Ok(TableView::new(table))
    }

    fn write_csv<W: Write>(&self, writer: W, options: &CsvWriteOptions) -> Result<()> {
        CsvWriter::write(self.table(), self.visible_ids(), writer, options)
            .map_err(|e| Error::other(e.to_string()))
    }

    fn save<P: AsRef<Path>>(&self, path: P, options: &CsvWriteOptions) -> Result<()> {
        CsvWriter::write_file(self.table(), self.visible_ids(), path, options)
            .map_err(|e| Error::other(e.to_string()))
    }
}
