//! slipview CLI - sort, filter and sum report tables

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use slipview::prelude::*;
use slipview::validation::{self, END_DATE, END_SUMM, START_DATE, START_SUMM};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "slipview")]
#[command(author, version, about = "Sort, filter and sum report tables")]
struct Cli {
    /// Log sort, filter and sum details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort a CSV table and print the visible rows as CSV
    View {
        /// Input CSV file (first row is the header)
        input: PathBuf,

        /// Sort by a column (name or 0-based index); repeat to sort again
        #[arg(short, long = "sort", value_name = "COLUMN")]
        sorts: Vec<String>,

        /// Filter a column, as COLUMN=QUERY; repeat for more columns
        #[arg(short, long = "filter", value_name = "COLUMN=QUERY")]
        filters: Vec<String>,

        /// Footer labels, comma separated, e.g. ",,summ"
        #[arg(long)]
        footer: Option<String>,

        /// Also print the footer sum to stderr
        #[arg(long)]
        sum: bool,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Print the sum of the footer-labelled column
    Sum {
        /// Input CSV file (first row is the header)
        input: PathBuf,

        /// Footer labels, comma separated, e.g. ",,summ"
        #[arg(long)]
        footer: String,

        /// Footer label of the column to sum
        #[arg(long, default_value = "summ")]
        label: String,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Check a report form's date and amount ranges
    Validate {
        /// Start date (YYYY-MM-DD); defaults to the first day of this month
        #[arg(long)]
        start_date: Option<String>,

        /// End date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        end_date: Option<String>,

        /// Lower amount
        #[arg(long)]
        start_summ: Option<String>,

        /// Upper amount
        #[arg(long)]
        end_summ: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::View {
            input,
            sorts,
            filters,
            footer,
            sum,
            output,
            delimiter,
        } => view(
            &input,
            &sorts,
            &filters,
            footer.as_deref(),
            sum,
            output.as_deref(),
            delimiter,
        ),
        Commands::Sum {
            input,
            footer,
            label,
            delimiter,
        } => show_sum(&input, &footer, &label, delimiter),
        Commands::Validate {
            start_date,
            end_date,
            start_summ,
            end_summ,
        } => validate(start_date, end_date, start_summ, end_summ),
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
    }
    Ok(delimiter as u8)
}

fn open_table(input: &Path, footer: Option<&str>, delimiter: char) -> Result<Table> {
    let mut options = CsvReadOptions {
        delimiter: delimiter_byte(delimiter)?,
        ..Default::default()
    };
    if let Some(footer) = footer {
        options = options.with_footer(footer.split(','));
    }

    let table = CsvReader::read_file(input, &options)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;
    debug!(
        "loaded {} rows x {} columns from '{}'",
        table.row_count(),
        table.column_count(),
        input.display()
    );
    Ok(table)
}

fn view(
    input: &Path,
    sorts: &[String],
    filters: &[String],
    footer: Option<&str>,
    sum: bool,
    output: Option<&Path>,
    delimiter: char,
) -> Result<()> {
    let mut view = TableView::new(open_table(input, footer, delimiter)?);

    for filter in filters {
        let (key, query) = filter
            .split_once('=')
            .with_context(|| format!("Filter '{}' is not COLUMN=QUERY", filter))?;
        let column = view.resolve_column(key)?;
        let outcome = view.apply_filter(column, query)?;
        debug!("filter '{}': {} rows hidden", filter, outcome.hidden);
    }

    for key in sorts {
        let column = view.resolve_column(key)?;
        view.sort(column)?;
    }

    if sum {
        let total = view.compute_sum().context("Failed to compute the footer sum")?;
        eprintln!("{}: {}", view.options().sum_label, total);
    }

    let write_options = CsvWriteOptions {
        delimiter: delimiter_byte(delimiter)?,
        ..Default::default()
    };

    if let Some(output_path) = output {
        view.save(output_path, &write_options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} rows to '{}'",
            view.visible_count(),
            output_path.display()
        );
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        view.write_csv(&mut handle, &write_options)
            .context("Failed to write to stdout")?;
        handle.flush().context("Failed to write to stdout")?;
    }

    Ok(())
}

fn show_sum(input: &Path, footer: &str, label: &str, delimiter: char) -> Result<()> {
    let table = open_table(input, Some(footer), delimiter)?;
    let mut view =
        TableView::with_options(table, ViewOptions::default().with_sum_label(label));
    let total = view
        .compute_sum()
        .with_context(|| format!("No footer column labelled '{}'", label))?;
    println!("{}", total);
    Ok(())
}

fn validate(
    start_date: Option<String>,
    end_date: Option<String>,
    start_summ: Option<String>,
    end_summ: Option<String>,
) -> Result<()> {
    let mut form = FieldMap::new();
    for (id, value) in [
        (START_DATE, start_date),
        (END_DATE, end_date),
        (START_SUMM, start_summ),
        (END_SUMM, end_summ),
    ] {
        if let Some(value) = value {
            form.set_value(id, &value);
        }
    }

    validation::set_date(&mut form, chrono::Local::now().date_naive());
    println!("{}: {}", START_DATE, form.value(START_DATE));
    println!("{}: {}", END_DATE, form.value(END_DATE));

    if !validation::validate_all(&mut form).is_invalid() {
        println!("ok");
        return Ok(());
    }

    for (id, message) in form.invalid_fields() {
        eprintln!("{}: {}", id, message);
    }
    bail!("Form is invalid")
}
