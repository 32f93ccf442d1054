//! View options

/// Names and sentinels a [`TableView`](crate::TableView) works with
///
/// The defaults match the report page: a table `output_table` whose footer
/// labels the summed column `summ`, per-column inputs `filter0`, `filter1`,
/// ... and a summary element `summ`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewOptions {
    /// Footer label of the column to sum (default: "summ")
    pub sum_label: String,
    /// Element id of the table (default: "output_table")
    pub table_id: String,
    /// Element id receiving the sum (default: "summ")
    pub summary_id: String,
    /// Prefix of per-column filter input ids (default: "filter")
    pub filter_prefix: String,
    /// First-column texts expected in the first two rows after a reset sort
    pub reset_sentinels: (String, String),
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            sum_label: "summ".to_string(),
            table_id: "output_table".to_string(),
            summary_id: "summ".to_string(),
            filter_prefix: "filter".to_string(),
            reset_sentinels: ("1".to_string(), "2".to_string()),
        }
    }
}

impl ViewOptions {
    /// Set the footer label of the summed column
    pub fn with_sum_label(mut self, label: impl Into<String>) -> Self {
        self.sum_label = label.into();
        self
    }

    /// Id of the filter input for a column
    pub fn filter_input_id(&self, column: usize) -> String {
        format!("{}{}", self.filter_prefix, column)
    }
}
