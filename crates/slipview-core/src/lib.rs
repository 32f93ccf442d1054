//! # slipview-core
//!
//! Core data structures for the slipview table tools.
//!
//! This crate provides the table model the sorter, filter and aggregator
//! work on:
//! - [`CellValue`] and [`Cell`] - Display text with a typed value decided at ingestion
//! - [`Column`], [`ColumnKind`] and [`Schema`] - Named columns with a declared kind
//! - [`Row`] and [`Table`] - Body rows plus optional footer labels
//!
//! ## Example
//!
//! ```rust
//! use slipview_core::{CellValue, Schema, Table};
//!
//! let schema = Schema::from_names(["id", "name", "summ"]).unwrap();
//! let table = Table::from_text_rows(schema, [["1", "Bread", "3"], ["2", "Milk", "5"]])
//!     .with_footer(["", "", "summ"])
//!     .unwrap();
//!
//! assert_eq!(table.footer_index_of("summ").unwrap(), 2);
//! assert_eq!(table.cell(1, 2).unwrap().value(), &CellValue::Number(5.0));
//! ```

pub mod cell;
pub mod error;
pub mod row;
pub mod schema;
pub mod table;

// Re-exports for convenience
pub use cell::{parse_int_prefix, parse_number, Cell, CellValue};
pub use error::{Error, Result};
pub use row::Row;
pub use schema::{Column, ColumnKind, Schema};
pub use table::Table;
