//! Apache Parquet output format.

use arrow::array::{
    ArrayRef, Date32Array, Float64Array, Int64Array, StringArray, TimestampMicrosecondArray,
    UInt8Array, UInt16Array,
};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use metastock_types::{CatalogEntry, PriceRecord};
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::io::Write;
use std::sync::Arc;

use crate::{FormatError, Formatter};

/// Parquet formatter.
#[derive(Debug, Clone)]
pub struct ParquetFormatter {
    /// Row group size (number of rows per group).
    row_group_size: usize,
    /// Compression codec.
    compression: Compression,
}

impl Default for ParquetFormatter {
    fn default() -> Self {
        Self {
            row_group_size: 100_000,
            compression: Compression::SNAPPY,
        }
    }
}

/// Days since the Unix epoch, as stored by Arrow's `Date32`.
fn days_since_epoch(date: NaiveDate) -> i32 {
    let delta = date.signed_duration_since(NaiveDate::default());
    i32::try_from(delta.num_days()).unwrap_or(i32::MAX)
}

impl ParquetFormatter {
    /// Creates a new Parquet formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row group size.
    #[must_use]
    pub const fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Sets the compression codec.
    #[must_use]
    pub const fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Creates the Arrow schema for price records.
    ///
    /// Timestamps carry no time zone; the files do not record one.
    fn record_schema() -> Schema {
        Schema::new(vec![
            Field::new(
                "timestamp",
                DataType::Timestamp(TimeUnit::Microsecond, None),
                false,
            ),
            Field::new("open", DataType::Float64, false),
            Field::new("high", DataType::Float64, false),
            Field::new("low", DataType::Float64, false),
            Field::new("close", DataType::Float64, false),
            Field::new("volume", DataType::Int64, false),
            Field::new("open_interest", DataType::Int64, false),
        ])
    }

    /// Creates the Arrow schema for catalog entries.
    fn catalog_schema() -> Schema {
        Schema::new(vec![
            Field::new("file_number", DataType::UInt16, false),
            Field::new("file_name", DataType::Utf8, false),
            Field::new("catalog", DataType::Utf8, false),
            Field::new("symbol", DataType::Utf8, false),
            Field::new("name", DataType::Utf8, false),
            Field::new("first_date", DataType::Date32, false),
            Field::new("last_date", DataType::Date32, false),
            Field::new("frequency", DataType::Utf8, false),
            Field::new("fields", DataType::UInt8, true),
        ])
    }

    /// Converts price records to an Arrow RecordBatch.
    fn records_to_batch(records: &[PriceRecord]) -> Result<RecordBatch, FormatError> {
        let timestamps: Vec<_> = records
            .iter()
            .map(|r| r.timestamp().and_utc().timestamp_micros())
            .collect();
        let opens: Vec<_> = records.iter().map(|r| r.open).collect();
        let highs: Vec<_> = records.iter().map(|r| r.high).collect();
        let lows: Vec<_> = records.iter().map(|r| r.low).collect();
        let closes: Vec<_> = records.iter().map(|r| r.close).collect();
        let volumes: Vec<_> = records.iter().map(|r| r.volume).collect();
        let interest: Vec<_> = records.iter().map(|r| r.open_interest).collect();

        RecordBatch::try_new(
            Arc::new(Self::record_schema()),
            vec![
                Arc::new(TimestampMicrosecondArray::from(timestamps)),
                Arc::new(Float64Array::from(opens)),
                Arc::new(Float64Array::from(highs)),
                Arc::new(Float64Array::from(lows)),
                Arc::new(Float64Array::from(closes)),
                Arc::new(Int64Array::from(volumes)),
                Arc::new(Int64Array::from(interest)),
            ],
        )
        .map_err(|e| FormatError::Parquet(e.to_string()))
    }

    /// Converts catalog entries to an Arrow RecordBatch.
    fn catalog_to_batch(entries: &[CatalogEntry]) -> Result<RecordBatch, FormatError> {
        let numbers: Vec<_> = entries.iter().map(|e| e.file_number).collect();
        let files: Vec<_> = entries.iter().map(CatalogEntry::file_name).collect();
        let kinds: Vec<_> = entries.iter().map(|e| e.kind.to_string()).collect();
        let symbols: Vec<_> = entries.iter().map(|e| e.symbol.as_str()).collect();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        let firsts: Vec<_> = entries
            .iter()
            .map(|e| days_since_epoch(e.first_date))
            .collect();
        let lasts: Vec<_> = entries
            .iter()
            .map(|e| days_since_epoch(e.last_date))
            .collect();
        let frequencies: Vec<_> = entries.iter().map(|e| e.frequency.to_string()).collect();
        let fields: Vec<_> = entries.iter().map(|e| e.field_count).collect();

        let columns: Vec<ArrayRef> = vec![
            Arc::new(UInt16Array::from(numbers)),
            Arc::new(StringArray::from(files)),
            Arc::new(StringArray::from(kinds)),
            Arc::new(StringArray::from(symbols)),
            Arc::new(StringArray::from(names)),
            Arc::new(Date32Array::from(firsts)),
            Arc::new(Date32Array::from(lasts)),
            Arc::new(StringArray::from(frequencies)),
            Arc::new(UInt8Array::from(fields)),
        ];

        RecordBatch::try_new(Arc::new(Self::catalog_schema()), columns)
            .map_err(|e| FormatError::Parquet(e.to_string()))
    }

    /// Writes `items` in row-group sized batches.
    fn write_batches<T, W: Write + Send>(
        &self,
        schema: Schema,
        items: &[T],
        to_batch: fn(&[T]) -> Result<RecordBatch, FormatError>,
        writer: W,
    ) -> Result<(), FormatError> {
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut arrow_writer = ArrowWriter::try_new(writer, Arc::new(schema), Some(props))
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        for chunk in items.chunks(self.row_group_size.max(1)) {
            let batch = to_batch(chunk)?;
            arrow_writer
                .write(&batch)
                .map_err(|e| FormatError::Parquet(e.to_string()))?;
        }

        arrow_writer
            .close()
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        Ok(())
    }
}

impl Formatter for ParquetFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[PriceRecord],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_batches(
            Self::record_schema(),
            records,
            Self::records_to_batch,
            writer,
        )
    }

    fn write_catalog<W: Write + Send>(
        &self,
        entries: &[CatalogEntry],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_batches(
            Self::catalog_schema(),
            entries,
            Self::catalog_to_batch,
            writer,
        )
    }

    fn extension(&self) -> &str {
        "parquet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{daily_record, entry, intraday_record};
    use std::io::Cursor;

    #[test]
    fn test_parquet_records() {
        let formatter = ParquetFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_records(&[daily_record(), intraday_record()], &mut output)
            .unwrap();

        // Parquet files start with "PAR1" magic bytes
        let data = output.into_inner();
        assert!(data.len() > 4);
        assert_eq!(&data[0..4], b"PAR1");
    }

    #[test]
    fn test_parquet_catalog() {
        let mut output = Cursor::new(Vec::new());
        ParquetFormatter::new()
            .with_row_group_size(1)
            .write_catalog(&[entry(), entry()], &mut output)
            .unwrap();
        assert_eq!(&output.into_inner()[0..4], b"PAR1");
    }

    #[test]
    fn test_record_batch() {
        let batch =
            ParquetFormatter::records_to_batch(&[daily_record(), intraday_record()]).unwrap();
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.num_columns(), 7);
    }

    #[test]
    fn test_schemas() {
        let records = ParquetFormatter::record_schema();
        assert_eq!(records.fields().len(), 7);
        assert!(records.field_with_name("timestamp").is_ok());
        assert!(records.field_with_name("open_interest").is_ok());

        let catalog = ParquetFormatter::catalog_schema();
        assert_eq!(catalog.fields().len(), 9);
        assert!(catalog.field_with_name("first_date").is_ok());
    }

    #[test]
    fn test_days_since_epoch() {
        assert_eq!(days_since_epoch(NaiveDate::from_ymd_opt(1970, 1, 2).unwrap()), 1);
        assert_eq!(
            days_since_epoch(NaiveDate::from_ymd_opt(1969, 12, 31).unwrap()),
            -1
        );
    }
}
