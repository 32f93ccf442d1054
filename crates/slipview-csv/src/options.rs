//! CSV options

use slipview_core::ColumnKind;

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether first row is header
    ///
    /// Without a header, columns are named "column1", "column2", ...
    pub has_header: bool,
    /// Declared kinds by column name; unlisted columns are [`ColumnKind::Auto`]
    pub column_kinds: Vec<(String, ColumnKind)>,
    /// Footer labels attached to the table
    pub footer: Option<Vec<String>>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: true,
            column_kinds: Vec::new(),
            footer: None,
        }
    }
}

impl CsvReadOptions {
    /// Declare the kind of a named column
    pub fn with_kind(mut self, name: impl Into<String>, kind: ColumnKind) -> Self {
        self.column_kinds.push((name.into(), kind));
        self
    }

    /// Attach footer labels
    pub fn with_footer<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.footer = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn kind_of(&self, name: &str) -> ColumnKind {
        self.column_kinds
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, k)| *k)
            .unwrap_or_default()
    }
}

/// Options for writing CSV files
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Write header row
    pub write_header: bool,
    /// Write footer labels as a last row, when the table has them
    pub write_footer: bool,
    /// Line terminator
    pub line_terminator: LineTerminator,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            write_header: true,
            write_footer: false,
            line_terminator: LineTerminator::LF,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
}
