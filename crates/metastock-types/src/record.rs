//! Price-series record representation.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::MetastockError;

/// Column layout of a price-series file.
///
/// Daily and slower series store 7 fields per record; intraday series add a
/// time column after the date for 8 fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum FieldCount {
    /// `date, open, high, low, close, volume, oi`.
    #[default]
    Seven,
    /// `date, time, open, high, low, close, volume, oi`.
    Eight,
}

impl FieldCount {
    /// Number of 4-byte fields per record.
    #[must_use]
    pub const fn get(&self) -> u8 {
        match self {
            Self::Seven => 7,
            Self::Eight => 8,
        }
    }

    /// Logical column names in on-disk order.
    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Seven => &["date", "open", "high", "low", "close", "volume", "oi"],
            Self::Eight => &[
                "date", "time", "open", "high", "low", "close", "volume", "oi",
            ],
        }
    }

    /// Returns true if records carry a time column.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        matches!(self, Self::Eight)
    }
}

impl TryFrom<u8> for FieldCount {
    type Error = MetastockError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            other => Err(MetastockError::InvalidFieldCount(other)),
        }
    }
}

impl From<FieldCount> for u8 {
    fn from(count: FieldCount) -> Self {
        count.get()
    }
}

impl std::fmt::Display for FieldCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A single decoded bar from a price-series file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Trading date.
    pub date: NaiveDate,
    /// Bar time, present only in the 8-field layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: i64,
    /// Open interest.
    pub open_interest: i64,
}

impl PriceRecord {
    /// Combined date and time; midnight when the record has no time column.
    #[must_use]
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}
