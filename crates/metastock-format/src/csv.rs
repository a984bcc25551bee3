//! CSV output format.

use metastock_types::{CatalogEntry, PriceRecord};
use std::borrow::Cow;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a text field if it contains the delimiter, a quote or a newline.
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.contains([self.delimiter, '"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", text.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(text)
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[PriceRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        // A time column is written when any bar carries one.
        let with_time = records.iter().any(|r| r.time.is_some());

        if self.include_header {
            if with_time {
                write!(writer, "date{d}time{d}")?;
            } else {
                write!(writer, "date{d}")?;
            }
            writeln!(writer, "open{d}high{d}low{d}close{d}volume{d}open_interest")?;
        }

        for record in records {
            write!(writer, "{}{d}", record.date.format("%Y-%m-%d"))?;
            if with_time {
                match record.time {
                    Some(time) => write!(writer, "{}{d}", time.format("%H:%M:%S"))?,
                    None => write!(writer, "{d}")?,
                }
            }
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
                record.open_interest
            )?;
        }

        Ok(())
    }

    fn write_catalog<W: Write + Send>(
        &self,
        entries: &[CatalogEntry],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "file_number{d}file_name{d}catalog{d}symbol{d}name{d}first_date{d}last_date{d}frequency{d}fields"
            )?;
        }

        for entry in entries {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                entry.file_number,
                entry.file_name(),
                entry.kind,
                self.escape(&entry.symbol),
                self.escape(&entry.name),
                entry.first_date.format("%Y-%m-%d"),
                entry.last_date.format("%Y-%m-%d"),
                entry.frequency,
                entry.field_count.map(|n| n.to_string()).unwrap_or_default(),
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
