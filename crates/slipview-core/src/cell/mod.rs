//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The typed value of a cell, decided once at ingestion
//! - [`Cell`] - The displayed text together with its typed value

mod value;

pub use value::{parse_int_prefix, parse_number, Cell, CellValue};
