//! Column sorting
//!
//! Sorting runs switch-counting passes over adjacent rows: each pass looks
//! for the first pair out of order, swaps it and starts over. When a pass
//! finds nothing to swap and no swap has happened yet, the direction flips
//! to descending and the passes continue. So an unsorted column ends up
//! ascending, and sorting an already ascending column reverses it.
//!
//! Two numeric cells compare as numbers. Any other pair, including a number
//! against text, compares the lower-cased display text.

use std::cmp::Ordering;
use std::fmt;

use log::debug;
use slipview_core::{Cell, Result};

use crate::view::TableView;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Whether a pair comparing as `ordering` must be swapped
    fn is_inverted(self, ordering: Ordering) -> bool {
        match self {
            SortDirection::Ascending => ordering == Ordering::Greater,
            SortDirection::Descending => ordering == Ordering::Less,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Result of a sort call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOutcome {
    /// Column sorted by
    pub column: usize,
    /// Direction the rows ended up in
    pub direction: SortDirection,
    /// Number of adjacent swaps performed
    pub swaps: usize,
}

impl TableView {
    /// Sort body rows by a column
    ///
    /// Hidden rows take part in the sort. A row without a cell at `column`
    /// sorts as empty text.
    pub fn sort(&mut self, column: usize) -> Result<SortOutcome> {
        self.check_column(column)?;

        // Rows before the first inversion are in order, and a swap moves the
        // later row left past one it sorts before. Each pass is therefore an
        // insertion sort and ends within n(n-1)/2 swaps, even on mixed
        // columns where the comparison is not transitive.
        let mut direction = SortDirection::Ascending;
        let mut swaps = 0;
        loop {
            match self.first_inversion(column, direction) {
                Some(i) => {
                    self.order.swap(i, i + 1);
                    swaps += 1;
                }
                None if swaps == 0 && direction == SortDirection::Ascending => {
                    direction = SortDirection::Descending;
                }
                None => break,
            }
        }

        debug!("sorted column {} {} with {} swaps", column, direction, swaps);
        Ok(SortOutcome {
            column,
            direction,
            swaps,
        })
    }

    /// Sort body rows by a column given by name
    pub fn sort_by_name(&mut self, name: &str) -> Result<SortOutcome> {
        let column = self.table.schema().index_of(name)?;
        self.sort(column)
    }

    fn first_inversion(&self, column: usize, direction: SortDirection) -> Option<usize> {
        let empty = Cell::default();
        self.order.windows(2).position(|pair| {
            let a = self.table.cell(pair[0], column).unwrap_or(&empty);
            let b = self.table.cell(pair[1], column).unwrap_or(&empty);
            direction.is_inverted(a.sort_cmp(b))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slipview_core::{Error, Schema, Table};

    fn view(rows: &[&[&str]]) -> TableView {
        let schema = Schema::from_names(["key", "label"]).unwrap();
        TableView::new(Table::from_text_rows(
            schema,
            rows.iter().map(|r| r.iter().copied()),
        ))
    }

    fn column(view: &TableView, col: usize) -> Vec<String> {
        (0..view.order().len())
            .map(|pos| {
                view.display_cell(pos, col)
                    .map(|c| c.text().to_string())
                    .unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn test_numeric_ascending() {
        let mut view = view(&[&["10", "a"], &["9", "b"], &["100", "c"], &["-1", "d"]]);
        let outcome = view.sort(0).unwrap();
        assert_eq!(outcome.direction, SortDirection::Ascending);
        assert_eq!(column(&view, 0), ["-1", "9", "10", "100"]);
        assert_eq!(column(&view, 1), ["d", "b", "a", "c"]);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let mut view = view(&[&["1", "banana"], &["2", "Apple"], &["3", "cherry"]]);
        view.sort(1).unwrap();
        assert_eq!(column(&view, 1), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sorted_column_toggles_to_descending() {
        let mut view = view(&[&["1", "a"], &["2", "b"], &["3", "c"]]);

        let outcome = view.sort(0).unwrap();
        assert_eq!(outcome.direction, SortDirection::Descending);
        assert_eq!(outcome.swaps, 3);
        assert_eq!(column(&view, 0), ["3", "2", "1"]);

        let outcome = view.sort(0).unwrap();
        assert_eq!(outcome.direction, SortDirection::Ascending);
        assert_eq!(column(&view, 0), ["1", "2", "3"]);
    }

    #[test]
    fn test_equal_keys_do_not_move() {
        let mut view = view(&[&["5", "a"], &["5", "b"], &["5", "c"]]);
        let outcome = view.sort(0).unwrap();
        assert_eq!(outcome.swaps, 0);
        assert_eq!(outcome.direction, SortDirection::Descending);
        assert_eq!(column(&view, 1), ["a", "b", "c"]);
    }

    #[test]
    fn test_mixed_column_uses_text_fallback() {
        // "abc" against a number compares as text: digits sort before letters
        let mut view = view(&[&["abc", "x"], &["20", "y"], &["3", "z"]]);
        view.sort(0).unwrap();
        assert_eq!(column(&view, 0), ["3", "20", "abc"]);
    }

    #[test]
    fn test_missing_cell_sorts_as_empty() {
        let mut view = view(&[&["b", "1"], &["a"], &["c", "2"]]);
        view.sort(1).unwrap();
        assert_eq!(column(&view, 0), ["a", "b", "c"]);
    }

    #[test]
    fn test_hidden_rows_are_sorted() {
        let mut view = view(&[&["2", "a"], &["1", "b"]]);
        view.hidden[0] = true;
        view.sort(0).unwrap();
        assert_eq!(view.order(), &[1, 0]);
        assert!(view.is_hidden(0));
    }

    #[test]
    fn test_cyclic_mixed_column_terminates() {
        // "2" < "10" as numbers, "10" < "1a" and "1a" < "2" as text
        let keys = ["1a", "10", "2", "1a", "2", "10", "2", "1a", "10", "2", "1a", "10"];
        let rows: Vec<Vec<String>> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| vec![k.to_string(), i.to_string()])
            .collect();
        let schema = Schema::from_names(["key", "label"]).unwrap();
        let mut view = TableView::new(Table::from_text_rows(schema, rows));

        let outcome = view.sort(0).unwrap();
        let n = keys.len();
        assert_eq!(outcome.direction, SortDirection::Ascending);
        assert!(outcome.swaps <= n * (n - 1) / 2);
        assert_eq!(
            column(&view, 0),
            ["10", "1a", "1a", "2", "2", "2", "10", "10", "1a", "1a", "2", "10"]
        );

        let mut order = view.order().to_vec();
        order.sort_unstable();
        assert_eq!(order, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_by_name_and_bounds() {
        let mut view = view(&[&["2", "b"], &["1", "a"]]);
        view.sort_by_name("label").unwrap();
        assert_eq!(column(&view, 1), ["a", "b"]);
        assert_eq!(view.sort(2).unwrap_err(), Error::ColumnOutOfBounds(2, 2));
        assert_eq!(
            view.sort_by_name("nope").unwrap_err(),
            Error::ColumnNotFound("nope".into())
        );
    }

    #[test]
    fn test_empty_and_single_row() {
        let mut empty = view(&[]);
        let outcome = empty.sort(0).unwrap();
        assert_eq!(outcome.swaps, 0);

        let mut single = view(&[&["1", "a"]]);
        single.sort(0).unwrap();
        assert_eq!(single.order(), &[0]);
    }
}
