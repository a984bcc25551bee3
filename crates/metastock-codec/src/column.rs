//! Typed column registry for price-series records.

use chrono::{NaiveDate, NaiveTime};
use metastock_types::DecodeError;

use crate::{ByteCursor, float_to_date, float_to_time, mbf_to_f32};

/// Width in bytes of every column, known or not.
pub const COLUMN_SIZE: usize = 4;

/// Known column names and how each is decoded.
static KNOWN_COLUMNS: [(&str, ColumnKind); 8] = [
    ("date", ColumnKind::Date),
    ("time", ColumnKind::Time),
    ("open", ColumnKind::Float),
    ("high", ColumnKind::Float),
    ("low", ColumnKind::Float),
    ("close", ColumnKind::Float),
    ("volume", ColumnKind::Int),
    ("oi", ColumnKind::Int),
];

/// How a 4-byte MBF column is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Packed `YYYMMDD` date.
    Date,
    /// Packed `HHMMSS` time.
    Time,
    /// Plain float.
    Float,
    /// Float truncated to an integer.
    Int,
    /// Present on disk but not decoded.
    Skip,
}

impl ColumnKind {
    /// Looks up a column by name. Unknown names are [`ColumnKind::Skip`].
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        KNOWN_COLUMNS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map_or(Self::Skip, |&(_, kind)| kind)
    }
}

/// A decoded column value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnValue {
    /// A calendar date.
    Date(NaiveDate),
    /// A clock time.
    Time(NaiveTime),
    /// A price.
    Float(f32),
    /// A volume or open-interest count.
    Int(i64),
}

impl ColumnValue {
    /// Returns the date, if this is a date value.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the time, if this is a time value.
    #[must_use]
    pub const fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns a numeric value widened to `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(f64::from(*v)),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns an integer value.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }
}

/// Decodes one column at the cursor, always advancing [`COLUMN_SIZE`] bytes.
///
/// Returns `None` for [`ColumnKind::Skip`].
///
/// # Errors
///
/// Returns an error if the buffer is truncated or a date/time is invalid.
pub fn decode_column(
    kind: ColumnKind,
    cursor: &mut ByteCursor<'_>,
) -> Result<Option<ColumnValue>, DecodeError> {
    let decoded = match kind {
        ColumnKind::Skip => {
            cursor.skip(COLUMN_SIZE);
            return Ok(None);
        }
        ColumnKind::Date => ColumnValue::Date(float_to_date(read_mbf(cursor)?)?),
        ColumnKind::Time => ColumnValue::Time(float_to_time(read_mbf(cursor)?)?),
        ColumnKind::Float => ColumnValue::Float(read_mbf(cursor)?),
        ColumnKind::Int => ColumnValue::Int(read_mbf(cursor)? as i64),
    };
    Ok(Some(decoded))
}

fn read_mbf(cursor: &mut ByteCursor<'_>) -> Result<f32, DecodeError> {
    Ok(mbf_to_f32(cursor.read_mbf_bytes()?))
}

/// Decodes one record, yielding a value for every non-skip column in order.
///
/// # Errors
///
/// Returns the first column error encountered.
pub fn decode_row(
    kinds: &[ColumnKind],
    cursor: &mut ByteCursor<'_>,
) -> Result<Vec<ColumnValue>, DecodeError> {
    let mut row = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        if let Some(value) = decode_column(kind, cursor)? {
            row.push(value);
        }
    }
    Ok(row)
}
