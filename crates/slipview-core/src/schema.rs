//! Column schema

use crate::error::{Error, Result};

/// Declared value kind of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnKind {
    /// Cells are numbers when their text parses as one
    #[default]
    Auto,
    /// Numeric column; unparsable cells are kept as text
    Number,
    /// Text column; cells are never treated as numbers
    Text,
}

/// A named column
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Header label
    pub name: String,
    /// Declared kind
    pub kind: ColumnKind,
}

impl Column {
    /// Create a column with [`ColumnKind::Auto`]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Auto,
        }
    }

    /// Set kind
    pub fn with_kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Ordered set of uniquely named columns
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Build a schema, rejecting duplicate names
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(Error::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Build an all-[`ColumnKind::Auto`] schema from header labels
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Column::new).collect())
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column at a position
    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns
            .get(index)
            .ok_or(Error::ColumnOutOfBounds(index, self.columns.len()))
    }

    /// Position of the column with the given name
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Kind of the column at a position, [`ColumnKind::Auto`] past the end
    pub fn kind_at(&self, index: usize) -> ColumnKind {
        self.columns
            .get(index)
            .map(|c| c.kind)
            .unwrap_or_default()
    }
}
