//! Price-series (`F<n>.DAT`) reader.
//!
//! Layout, all values little-endian:
//! - `u16` reserved, `u16` record count `N`
//! - the rest of record 0, padding the header to one record width
//! - `N - 1` records of 4-byte MBF fields, one per column

use chrono::NaiveDate;
use metastock_codec::{ByteCursor, COLUMN_SIZE, ColumnKind, ColumnValue, decode_row};
use metastock_types::{
    CatalogEntry, DecodeError, FieldCount, MetastockError, PriceRecord, Result,
};
use std::path::Path;
use tracing::debug;

use crate::{ReadOptions, read_file};

/// Reads a price-series file with 7 or 8 fields per record.
///
/// Records are returned in file order.
///
/// # Errors
///
/// Returns [`MetastockError::InvalidFieldCount`] for any other field count
/// (before the file is opened), an I/O error if the file cannot be read or
/// is shorter than its header claims, or a decode error for invalid dates.
pub fn read_series(path: &Path, fields: u8) -> Result<Vec<PriceRecord>> {
    let count = FieldCount::try_from(fields)?;
    let data = read_file(path)?;
    let records = decode_series(&data, count).map_err(|e| MetastockError::decode(path, e))?;
    debug!(
        path = %path.display(),
        fields,
        records = records.len(),
        "decoded price series"
    );
    Ok(records)
}

/// Reads the price series a catalog entry points to inside `dir`.
///
/// Entries without a stored field count use
/// [`ReadOptions::default_field_count`].
///
/// # Errors
///
/// See [`read_series`].
pub fn read_entry_series(
    dir: &Path,
    entry: &CatalogEntry,
    options: &ReadOptions,
) -> Result<Vec<PriceRecord>> {
    let fields = entry
        .field_count
        .unwrap_or_else(|| options.default_field_count.get());
    read_series(&entry.path_in(dir), fields)
}

/// Decodes an in-memory price-series file.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] if the buffer holds fewer records than
/// the header declares, or a date/time error from the column decoders.
pub fn decode_series(
    data: &[u8],
    count: FieldCount,
) -> std::result::Result<Vec<PriceRecord>, DecodeError> {
    let columns = count.columns();
    let kinds: Vec<ColumnKind> = columns
        .iter()
        .map(|name| ColumnKind::for_name(name))
        .collect();

    let mut cursor = ByteCursor::new(data);
    cursor.skip(2);
    let declared = cursor.read_u16()?;
    cursor.skip((usize::from(count.get()) - 1) * COLUMN_SIZE);

    // Record 0 is the header itself.
    let rows = usize::from(declared).saturating_sub(1);
    let mut records = Vec::with_capacity(rows);
    for _ in 0..rows {
        let row = decode_row(&kinds, &mut cursor)?;
        records.push(assemble(columns, &kinds, &row));
    }
    Ok(records)
}

/// Maps decoded values back onto record fields by column name.
fn assemble(columns: &[&str], kinds: &[ColumnKind], row: &[ColumnValue]) -> PriceRecord {
    let mut record = PriceRecord {
        date: NaiveDate::default(),
        time: None,
        open: 0.0,
        high: 0.0,
        low: 0.0,
        close: 0.0,
        volume: 0,
        open_interest: 0,
    };

    let named = columns
        .iter()
        .zip(kinds)
        .filter(|(_, kind)| **kind != ColumnKind::Skip)
        .map(|(name, _)| *name);

    for (name, value) in named.zip(row) {
        match (name, value) {
            ("date", ColumnValue::Date(d)) => record.date = *d,
            ("time", ColumnValue::Time(t)) => record.time = Some(*t),
            ("open", v) => record.open = v.as_f64().unwrap_or_default(),
            ("high", v) => record.high = v.as_f64().unwrap_or_default(),
            ("low", v) => record.low = v.as_f64().unwrap_or_default(),
            ("close", v) => record.close = v.as_f64().unwrap_or_default(),
            ("volume", v) => record.volume = v.as_i64().unwrap_or_default(),
            ("oi", v) => record.open_interest = v.as_i64().unwrap_or_default(),
            _ => {}
        }
    }
    record
}
