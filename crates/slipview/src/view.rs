//! Table view
//!
//! A [`TableView`] owns a [`Table`] and the presentation state layered on
//! top of it: the display order of body rows, which rows are hidden, the
//! filter inputs and the last computed sum. The table itself is never
//! modified; sorting permutes row ids and filtering flips visibility.

use slipview_core::{Cell, Error, Result, Row, Table};

use crate::aggregate::Sum;
use crate::filter::FilterBar;
use crate::options::ViewOptions;

/// Sortable, filterable view over a table
#[derive(Debug, Clone)]
pub struct TableView {
    pub(crate) table: Table,
    /// Row ids in display order
    pub(crate) order: Vec<usize>,
    /// Hidden flags, indexed by row id
    pub(crate) hidden: Vec<bool>,
    pub(crate) filters: FilterBar,
    pub(crate) summary: Option<Sum>,
    pub(crate) options: ViewOptions,
}

impl TableView {
    /// Create a view with default options
    pub fn new(table: Table) -> Self {
        Self::with_options(table, ViewOptions::default())
    }

    /// Create a view with custom options
    pub fn with_options(table: Table, options: ViewOptions) -> Self {
        let rows = table.row_count();
        let filters = FilterBar::new(table.column_count());
        Self {
            table,
            order: (0..rows).collect(),
            hidden: vec![false; rows],
            filters,
            summary: None,
            options,
        }
    }

    /// Underlying table
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Options in effect
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Row ids in display order, hidden rows included
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Check whether a row id is hidden
    pub fn is_hidden(&self, id: usize) -> bool {
        self.hidden.get(id).copied().unwrap_or(false)
    }

    /// Number of rows currently shown
    pub fn visible_count(&self) -> usize {
        self.hidden.iter().filter(|h| !**h).count()
    }

    /// Visible row ids in display order
    pub fn visible_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied().filter(|id| !self.is_hidden(*id))
    }

    /// Visible rows in display order
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.visible_ids().filter_map(|id| self.table.row(id))
    }

    /// Cell at a display position
    pub fn display_cell(&self, position: usize, col: usize) -> Option<&Cell> {
        self.order
            .get(position)
            .and_then(|id| self.table.cell(*id, col))
    }

    /// Filter inputs
    pub fn filters(&self) -> &FilterBar {
        &self.filters
    }

    /// Mutable filter inputs
    pub fn filters_mut(&mut self) -> &mut FilterBar {
        &mut self.filters
    }

    /// Last computed sum
    pub fn summary(&self) -> Option<&Sum> {
        self.summary.as_ref()
    }

    /// Resolve a column given by name or by 0-based index
    ///
    /// Names take precedence, so a column literally named "2" wins over
    /// the third column.
    pub fn resolve_column(&self, key: &str) -> Result<usize> {
        let schema = self.table.schema();
        if let Ok(index) = schema.index_of(key) {
            return Ok(index);
        }
        match key.trim().parse::<usize>() {
            Ok(index) if index < schema.len() => Ok(index),
            Ok(index) => Err(Error::ColumnOutOfBounds(index, schema.len())),
            Err(_) => Err(Error::ColumnNotFound(key.to_string())),
        }
    }

    pub(crate) fn check_column(&self, column: usize) -> Result<()> {
        let columns = self.table.column_count();
        if column >= columns {
            return Err(Error::ColumnOutOfBounds(column, columns));
        }
        Ok(())
    }
}
