//! Display utilities and output formatting for the metastock CLI.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use metastock_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for decoded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
    Parquet,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Parquet => "parquet",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Builds reader options from the global `--encoding` flag.
pub(crate) fn read_options(encoding: &str) -> Result<ReadOptions> {
    let encoding = TextEncoding::for_label(encoding)
        .with_context(|| format!("Invalid --encoding value: {encoding}"))?;
    Ok(ReadOptions::new().with_encoding(encoding))
}

/// Opens `output` for writing, or stdout when no path is given.
fn open_output(output: Option<&Path>, format: Format) -> Result<Box<dyn Write + Send>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None if format == Format::Parquet => {
            bail!("Parquet output needs a file; pass --output")
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}

/// Write price records to a file (or stdout) in the specified format.
pub(crate) fn write_records(
    records: &[PriceRecord],
    output: Option<&Path>,
    format: Format,
) -> Result<()> {
    let mut writer = open_output(output, format)?;

    match format {
        Format::Csv => CsvFormatter::new().write_records(records, &mut writer)?,
        Format::Tsv => CsvFormatter::tsv().write_records(records, &mut writer)?,
        Format::Json => JsonFormatter::new().write_records(records, &mut writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_records(records, &mut writer)?,
        Format::Parquet => {
            #[cfg(feature = "parquet")]
            {
                ParquetFormatter::new().write_records(records, &mut writer)?;
            }
            #[cfg(not(feature = "parquet"))]
            {
                bail!("Parquet support not compiled in");
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write catalog entries to stdout in the specified format.
pub(crate) fn write_catalog(entries: &[CatalogEntry], format: Format) -> Result<()> {
    let mut writer = open_output(None, format)?;

    match format {
        Format::Csv => CsvFormatter::new().write_catalog(entries, &mut writer)?,
        Format::Tsv => CsvFormatter::tsv().write_catalog(entries, &mut writer)?,
        Format::Json => JsonFormatter::new().write_catalog(entries, &mut writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_catalog(entries, &mut writer)?,
        Format::Parquet => bail!("Parquet output needs a file; pass --output"),
    }

    writer.flush()?;
    Ok(())
}

/// Replaces characters that are awkward in file names.
pub(crate) fn file_stem(symbol: &str) -> String {
    symbol
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}
