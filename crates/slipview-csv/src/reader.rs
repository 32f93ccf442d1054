//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use slipview_core::{Column, Schema, Table};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read CSV file into a table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Table> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a table
    ///
    /// Cells are classified once here, by their column's declared kind.
    /// Records may be ragged; short rows simply lack the trailing cells.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();

        let names: Vec<String> = if options.has_header {
            match records.next() {
                Some(header) => header?.iter().map(|h| h.trim().to_string()).collect(),
                None => return Err(CsvError::EmptyInput),
            }
        } else {
            Vec::new()
        };

        let body = records.collect::<Result<Vec<_>, _>>()?;

        let names = if options.has_header {
            names
        } else {
            let width = body.iter().map(|r| r.len()).max().unwrap_or(0);
            (1..=width).map(|i| format!("column{}", i)).collect()
        };

        let columns = names
            .into_iter()
            .map(|name| {
                let kind = options.kind_of(&name);
                Column::new(name).with_kind(kind)
            })
            .collect();
        let mut table = Table::new(Schema::new(columns)?);

        for record in &body {
            table.push_text_row(record.iter());
        }

        if let Some(footer) = &options.footer {
            table.set_footer(footer.iter().map(String::as_str))?;
        }

        Ok(table)
    }
}
