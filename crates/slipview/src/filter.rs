//! Column text filter

use log::debug;
use slipview_core::{Error, Result};

use crate::view::TableView;

/// Filter inputs of a view
///
/// One query per column, plus a leading `reserved` input that is not a
/// column filter (a free-text search box on the report page). Resetting
/// clears the column queries and leaves `reserved` alone.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterBar {
    /// Value of the leading non-filter input
    pub reserved: String,
    queries: Vec<String>,
}

impl FilterBar {
    /// Create empty inputs for `columns` columns
    pub fn new(columns: usize) -> Self {
        Self {
            reserved: String::new(),
            queries: vec![String::new(); columns],
        }
    }

    /// Query for a column, empty when unset
    pub fn query(&self, column: usize) -> &str {
        self.queries.get(column).map(String::as_str).unwrap_or("")
    }

    /// Set the query for a column
    pub fn set_query(&mut self, column: usize, query: impl Into<String>) -> Result<()> {
        let columns = self.queries.len();
        let slot = self
            .queries
            .get_mut(column)
            .ok_or(Error::ColumnOutOfBounds(column, columns))?;
        *slot = query.into();
        Ok(())
    }

    /// Column queries in column order
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// Clear every column query
    pub fn clear(&mut self) {
        self.queries.iter_mut().for_each(String::clear);
    }
}

/// Result of a filter call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    /// Rows whose cell matched and are now shown
    pub shown: usize,
    /// Rows whose cell did not match and are now hidden
    pub hidden: usize,
    /// Rows without a cell at the column, left as they were
    pub skipped: usize,
}

impl TableView {
    /// Store a query for a column
    pub fn set_query(&mut self, column: usize, query: impl Into<String>) -> Result<()> {
        self.filters.set_query(column, query)
    }

    /// Show or hide rows by their column's query
    ///
    /// A row is shown when its cell at `column` contains the query,
    /// ignoring case, and hidden otherwise. Other columns' queries are not
    /// consulted.
    pub fn filter(&mut self, column: usize) -> Result<FilterOutcome> {
        self.check_column(column)?;
        let query = self.filters.query(column).to_string();

        let mut outcome = FilterOutcome::default();
        for (id, row) in self.table.rows().iter().enumerate() {
            let Some(cell) = row.cell(column) else {
                outcome.skipped += 1;
                continue;
            };
            let matched = cell.contains_ignore_case(&query);
            self.hidden[id] = !matched;
            if matched {
                outcome.shown += 1;
            } else {
                outcome.hidden += 1;
            }
        }

        debug!(
            "filter column {} on {:?}: {} shown, {} hidden, {} skipped",
            column, query, outcome.shown, outcome.hidden, outcome.skipped
        );
        Ok(outcome)
    }

    /// Filter by a column given by name
    pub fn filter_by_name(&mut self, name: &str) -> Result<FilterOutcome> {
        let column = self.table.schema().index_of(name)?;
        self.filter(column)
    }

    /// Set a column's query and apply it
    pub fn apply_filter(&mut self, column: usize, query: impl Into<String>) -> Result<FilterOutcome> {
        self.set_query(column, query)?;
        self.filter(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slipview_core::{Schema, Table};

    fn view() -> TableView {
        let schema = Schema::from_names(["id", "name"]).unwrap();
        TableView::new(Table::from_text_rows(
            schema,
            vec![
                vec!["1", "Bread"],
                vec!["2", "breadcrumbs"],
                vec!["3", "Milk"],
                vec!["4"],
            ],
        ))
    }

    #[test]
    fn test_substring_ignores_case() {
        let mut view = view();
        let outcome = view.apply_filter(1, "BREAD").unwrap();
        assert_eq!(outcome, FilterOutcome { shown: 2, hidden: 1, skipped: 1 });
        assert!(!view.is_hidden(0));
        assert!(!view.is_hidden(1));
        assert!(view.is_hidden(2));
        assert!(!view.is_hidden(3));
    }

    #[test]
    fn test_empty_query_shows_all() {
        let mut view = view();
        view.apply_filter(1, "milk").unwrap();
        assert_eq!(view.visible_count(), 2);

        view.apply_filter(1, "").unwrap();
        assert_eq!(view.visible_count(), 4);
    }

    #[test]
    fn test_no_match_hides_rows_with_cell() {
        let mut view = view();
        let outcome = view.apply_filter(1, "cheese").unwrap();
        assert_eq!(outcome.hidden, 3);
        // the short row has no cell in column 1 and stays visible
        assert_eq!(view.visible_ids().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_filter_is_column_local() {
        let mut view = view();
        view.apply_filter(1, "milk").unwrap();
        view.apply_filter(0, "1").unwrap();
        // column 0 overrides visibility without combining with column 1
        assert_eq!(view.visible_ids().collect::<Vec<_>>(), vec![0]);
        assert_eq!(view.filters().query(1), "milk");
    }

    #[test]
    fn test_filter_by_name_and_bounds() {
        let mut view = view();
        view.set_query(1, "milk").unwrap();
        view.filter_by_name("name").unwrap();
        assert_eq!(view.visible_count(), 2);
        assert_eq!(view.filter(5).unwrap_err(), Error::ColumnOutOfBounds(5, 2));
        assert_eq!(
            view.set_query(5, "x").unwrap_err(),
            Error::ColumnOutOfBounds(5, 2)
        );
    }

    #[test]
    fn test_filter_bar_clear_keeps_reserved() {
        let mut bar = FilterBar::new(2);
        bar.reserved = "search".into();
        bar.set_query(0, "a").unwrap();
        bar.set_query(1, "b").unwrap();
        bar.clear();
        assert_eq!(bar.queries(), &["".to_string(), "".to_string()]);
        assert_eq!(bar.reserved, "search");
    }
}
