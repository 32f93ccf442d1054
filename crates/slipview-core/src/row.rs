//! Row types

use crate::cell::Cell;

/// A body row
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create a row from its cells
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Get a cell by column index
    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// All cells in order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check if row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells in row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl<C: Into<Cell>> FromIterator<C> for Row {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
