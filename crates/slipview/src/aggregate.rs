//! Footer sum

use std::fmt;

use log::{debug, warn};
use slipview_core::{parse_int_prefix, Result};

use crate::view::TableView;

/// Sum of a column's integer values
///
/// A single cell that is not a number poisons the whole sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sum {
    /// Every cell was a number
    Total(i64),
    /// At least one cell was not a number
    NotANumber,
}

impl Sum {
    /// Add one cell's integer value
    fn add(self, value: Option<i64>) -> Self {
        match (self, value) {
            (Sum::Total(total), Some(n)) => Sum::Total(total.saturating_add(n)),
            _ => Sum::NotANumber,
        }
    }

    /// The total, if not poisoned
    pub fn total(&self) -> Option<i64> {
        match self {
            Sum::Total(n) => Some(*n),
            Sum::NotANumber => None,
        }
    }
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sum::Total(n) => write!(f, "{}", n),
            Sum::NotANumber => f.write_str("NaN"),
        }
    }
}

impl TableView {
    /// Sum the column whose footer carries the sum label
    ///
    /// Every body row counts, hidden or not. Each cell adds the integer its
    /// text starts with (see [`parse_int_prefix`]), whatever the column's
    /// declared kind. The result is kept as the view's summary.
    pub fn compute_sum(&mut self) -> Result<Sum> {
        let label = self.options.sum_label.as_str();
        let column = match self.table.footer_index_of(label) {
            Ok(column) => column,
            Err(e) => {
                warn!("no footer label {:?}, nothing to sum", label);
                return Err(e);
            }
        };

        let mut sum = Sum::Total(0);
        for (id, row) in self.table.rows().iter().enumerate() {
            let value = row.cell(column).and_then(|c| parse_int_prefix(c.text()));
            if value.is_none() && sum != Sum::NotANumber {
                warn!(
                    "row {} column {} does not start with an integer, sum is NaN",
                    id, column
                );
            }
            sum = sum.add(value);
        }

        debug!("sum of column {} is {}", column, sum);
        self.summary = Some(sum);
        Ok(sum)
    }

    /// Text of the last computed sum, as shown in the summary element
    pub fn summary_text(&self) -> Option<String> {
        self.summary.map(|s| s.to_string())
    }
}
