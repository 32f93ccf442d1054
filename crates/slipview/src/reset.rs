//! Reset control

use log::debug;
use slipview_core::Result;

use crate::sort::SortDirection;
use crate::view::TableView;

/// Result of a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetOutcome {
    /// Whether the first column was sorted a second time
    pub resorted: bool,
    /// Direction of the last sort
    pub direction: SortDirection,
}

impl TableView {
    /// Show every row, clear the column filters and sort by the first column
    ///
    /// When neither of the first two rows starts with the expected sentinel
    /// texts ("1" and "2" by default) after the sort, the sort runs again.
    /// This catches a table that was already ascending and got reversed by
    /// the first call.
    pub fn reset(&mut self) -> Result<ResetOutcome> {
        self.hidden.fill(false);
        self.filters.clear();

        let mut outcome = self.sort(0)?;
        let resorted = self.needs_second_sort();
        if resorted {
            outcome = self.sort(0)?;
        }

        debug!(
            "reset view: {} rows, resorted: {}, direction {}",
            self.order.len(),
            resorted,
            outcome.direction
        );
        Ok(ResetOutcome {
            resorted,
            direction: outcome.direction,
        })
    }

    fn needs_second_sort(&self) -> bool {
        if self.order.len() < 2 {
            return false;
        }
        let first_text = |position| {
            self.display_cell(position, 0)
                .map(|c| c.text())
                .unwrap_or("")
        };
        let (first, second) = &self.options.reset_sentinels;
        first_text(0) != first.as_str() && first_text(1) != second.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slipview_core::{Schema, Table};

    fn view(ids: &[&str]) -> TableView {
        let schema = Schema::from_names(["id", "name"]).unwrap();
        TableView::new(Table::from_text_rows(
            schema,
            ids.iter().map(|id| vec![id.to_string(), format!("item {}", id)]),
        ))
    }

    fn first_column(view: &TableView) -> Vec<&str> {
        (0..view.order().len())
            .map(|pos| view.display_cell(pos, 0).map(|c| c.text()).unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_reset_shows_rows_and_clears_filters() {
        let mut view = view(&["2", "1", "3"]);
        view.filters_mut().reserved = "keep me".into();
        view.apply_filter(1, "item 3").unwrap();
        assert_eq!(view.visible_count(), 1);

        let outcome = view.reset().unwrap();
        assert_eq!(view.visible_count(), 3);
        assert_eq!(view.filters().query(1), "");
        assert_eq!(view.filters().reserved, "keep me");
        assert!(!outcome.resorted);
        assert_eq!(first_column(&view), ["1", "2", "3"]);
    }

    #[test]
    fn test_reset_on_ascending_table_sorts_twice() {
        let mut view = view(&["1", "2", "3", "4"]);
        let outcome = view.reset().unwrap();
        assert!(outcome.resorted);
        assert_eq!(outcome.direction, SortDirection::Ascending);
        assert_eq!(first_column(&view), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_reset_heuristic_misses_three_rows() {
        // reversed to 3, 2, 1: the second row is "2", so no second sort
        let mut view = view(&["1", "2", "3"]);
        let outcome = view.reset().unwrap();
        assert!(!outcome.resorted);
        assert_eq!(outcome.direction, SortDirection::Descending);
        assert_eq!(first_column(&view), ["3", "2", "1"]);
    }

    #[test]
    fn test_second_sort_needs_both_sentinels_missing() {
        // "1" leads after the first sort, so no second sort
        let mut leading_one = view(&["5", "1", "7"]);
        assert!(!leading_one.reset().unwrap().resorted);

        // neither "1" nor "2" leads, so the heuristic sorts again and
        // reverses an ascending result
        let mut no_sentinels = view(&["9", "4", "7"]);
        let outcome = no_sentinels.reset().unwrap();
        assert!(outcome.resorted);
        assert_eq!(outcome.direction, SortDirection::Descending);
        assert_eq!(first_column(&no_sentinels), ["9", "7", "4"]);
    }

    #[test]
    fn test_reset_small_tables() {
        let mut empty = view(&[]);
        assert!(!empty.reset().unwrap().resorted);

        let mut single = view(&["3"]);
        assert!(!single.reset().unwrap().resorted);
    }
}
