//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use slipview_core::Table;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write the given rows of a table to a CSV file
    pub fn write_file<P, I>(
        table: &Table,
        ids: I,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = usize>,
    {
        let file = File::create(path)?;
        Self::write(table, ids, file, options)
    }

    /// Write the given rows of a table to a writer
    ///
    /// Rows are written in the order of `ids`; ids past the end of the
    /// table are ignored. Display text is written as is.
    pub fn write<W, I>(table: &Table, ids: I, writer: W, options: &CsvWriteOptions) -> CsvResult<()>
    where
        W: Write,
        I: IntoIterator<Item = usize>,
    {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        if options.write_header {
            csv_writer.write_record(table.schema().columns().iter().map(|c| c.name.as_str()))?;
        }

        for row in ids.into_iter().filter_map(|id| table.row(id)) {
            csv_writer.write_record(row.cells().iter().map(|c| c.text()))?;
        }

        if options.write_footer {
            if let Some(footer) = table.footer() {
                csv_writer.write_record(footer)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
