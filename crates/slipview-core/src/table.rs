//! Table model
//!
//! A [`Table`] is a schema, an ordered list of body rows, and optional footer
//! labels. Footer labels line up with the schema by position, which is
//! checked when the footer is attached.

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::schema::Schema;

/// Tabular data with a header schema and optional footer labels
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    schema: Schema,
    rows: Vec<Row>,
    footer: Option<Vec<String>>,
}

impl Table {
    /// Create an empty table
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
            footer: None,
        }
    }

    /// Build a table from rows of display text
    pub fn from_text_rows<R, C, S>(schema: Schema, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(schema);
        for row in rows {
            table.push_text_row(row);
        }
        table
    }

    /// Attach footer labels
    pub fn with_footer<I, S>(mut self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_footer(labels)?;
        Ok(self)
    }

    /// Replace footer labels
    ///
    /// Fails if there are more labels than columns.
    pub fn set_footer<I, S>(&mut self, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() > self.schema.len() {
            return Err(Error::FooterMismatch {
                footer: labels.len(),
                columns: self.schema.len(),
            });
        }
        self.footer = Some(labels);
        Ok(())
    }

    /// Append a row of display text, classifying each cell by its column's kind
    pub fn push_text_row<C, S>(&mut self, cells: C)
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(col, text)| Cell::with_kind(text, self.schema.kind_at(col)))
            .collect();
        self.rows.push(Row::new(cells));
    }

    /// Append an already built row
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Column schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Body rows in ingestion order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row by id (ingestion index)
    pub fn row(&self, id: usize) -> Option<&Row> {
        self.rows.get(id)
    }

    /// Cell by row id and column index
    pub fn cell(&self, id: usize, col: usize) -> Option<&Cell> {
        self.rows.get(id).and_then(|r| r.cell(col))
    }

    /// Number of body rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Check if the table has no body rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Footer labels, if any
    pub fn footer(&self) -> Option<&[String]> {
        self.footer.as_deref()
    }

    /// Column index of a footer label
    ///
    /// Labels are matched exactly. When a label repeats, the right-most one
    /// wins.
    pub fn footer_index_of(&self, label: &str) -> Result<usize> {
        self.footer
            .as_ref()
            .and_then(|labels| labels.iter().rposition(|l| l == label))
            .ok_or_else(|| Error::ColumnNotFound(label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    use crate::schema::{Column, ColumnKind};
    use pretty_assertions::assert_eq;

    fn sample() -> Table {
        let schema = Schema::new(vec![
            Column::new("id"),
            Column::new("code").with_kind(ColumnKind::Text),
            Column::new("summ").with_kind(ColumnKind::Number),
        ])
        .unwrap();
        Table::from_text_rows(schema, [["1", "007", "3"], ["2", "010", "x"]])
    }

    #[test]
    fn test_cells_classified_by_column_kind() {
        let table = sample();
        assert_eq!(table.cell(0, 0).unwrap().value(), &CellValue::Number(1.0));
        assert_eq!(table.cell(0, 1).unwrap().value(), &CellValue::Text);
        assert_eq!(table.cell(0, 1).unwrap().text(), "007");
        assert_eq!(table.cell(1, 2).unwrap().value(), &CellValue::Text);
        assert_eq!(table.cell(1, 5), None);
    }

    #[test]
    fn test_footer_lookup() {
        let table = sample().with_footer(["", "", "summ"]).unwrap();
        assert_eq!(table.footer_index_of("summ").unwrap(), 2);
        assert_eq!(
            table.footer_index_of("Summ"),
            Err(Error::ColumnNotFound("Summ".into()))
        );
    }

    #[test]
    fn test_footer_repeated_label_takes_rightmost() {
        let table = sample().with_footer(["summ", "", "summ"]).unwrap();
        assert_eq!(table.footer_index_of("summ").unwrap(), 2);
    }

    #[test]
    fn test_footer_wider_than_schema() {
        let err = sample().with_footer(["a", "b", "c", "d"]).unwrap_err();
        assert_eq!(err, Error::FooterMismatch { footer: 4, columns: 3 });
    }

    #[test]
    fn test_missing_footer() {
        let table = sample();
        assert!(table.footer().is_none());
        assert!(table.footer_index_of("summ").is_err());
    }
}
