//! Prelude module - common imports for slipview users
//!
//! ```rust
//! use slipview::prelude::*;
//! ```

pub use crate::{
    // Model types
    Cell,
    CellValue,
    Column,
    ColumnKind,
    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    // Error types
    Error,
    // Validation types
    FieldMap,
    FilterBar,
    FilterOutcome,
    FormFields,
    RangeCheck,
    ResetOutcome,
    Result,
    Row,
    Schema,
    SortDirection,
    SortOutcome,
    Sum,
    Table,
    // Main types
    TableView,
    // Extension traits
    TableViewExt,
    ViewOptions,
};
