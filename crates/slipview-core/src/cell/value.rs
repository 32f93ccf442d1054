//! Cell value types

use std::cmp::Ordering;
use std::fmt;

use crate::schema::ColumnKind;

/// Typed value of a cell
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Blank cell
    #[default]
    Empty,

    /// Finite number
    Number(f64),

    /// Anything that is not a number
    Text,
}

impl CellValue {
    /// Classify display text for a column of the given kind
    pub fn classify(text: &str, kind: ColumnKind) -> Self {
        if text.trim().is_empty() {
            return CellValue::Empty;
        }
        match kind {
            ColumnKind::Text => CellValue::Text,
            ColumnKind::Number | ColumnKind::Auto => match parse_number(text) {
                Some(n) => CellValue::Number(n),
                None => CellValue::Text,
            },
        }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Number(_) => "number",
            CellValue::Text => "text",
        }
    }
}

/// Parse trimmed text as a finite number
///
/// Accepts anything `f64::from_str` accepts except infinities and NaN.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Read the leading base-10 integer of some text, as JavaScript's
/// `parseInt` does
///
/// Leading whitespace and one sign are skipped, then digits are read up to
/// the first non-digit: "5 rub" is 5, "12,50" is 12 and "1e3" is 1. `None`
/// when no digit follows. Values past the `i64` range saturate.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut any = false;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        any = true;
        let digit = i64::from(digit - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    any.then_some(value)
}

/// A table cell: the text as displayed plus its typed value
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    text: String,
    value: CellValue,
}

impl Cell {
    /// Create a cell, classifying `text` with [`ColumnKind::Auto`]
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self::with_kind(text, ColumnKind::Auto)
    }

    /// Create a cell, classifying `text` for a column of the given kind
    pub fn with_kind<S: Into<String>>(text: S, kind: ColumnKind) -> Self {
        let text = text.into();
        let value = CellValue::classify(&text, kind);
        Self { text, value }
    }

    /// Displayed text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Typed value
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Number, if the cell holds one
    pub fn as_number(&self) -> Option<f64> {
        self.value.as_number()
    }

    /// Ordering used by the sorter
    ///
    /// Two numbers compare numerically. In every other case, including a
    /// number against text, the lower-cased display texts are compared.
    pub fn sort_cmp(&self, other: &Cell) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => self.text.to_lowercase().cmp(&other.text.to_lowercase()),
        }
    }

    /// Case-insensitive substring match used by the filter
    pub fn contains_ignore_case(&self, query: &str) -> bool {
        self.text.to_lowercase().contains(&query.to_lowercase())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::new(s)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::new(s)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::new(n.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::new(n.to_string())
    }
}
