//! Catalog (index file) entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Frequency;

/// The on-disk catalog variant an entry was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Legacy `master` file, 53-byte records.
    Master,
    /// Extended `emaster` file, 192-byte records.
    EMaster,
    /// Cross-reference `xmaster` file, 150-byte records.
    XMaster,
}

impl CatalogKind {
    /// File name of the catalog inside a data directory.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::EMaster => "emaster",
            Self::XMaster => "xmaster",
        }
    }

    /// Extension of the price-series files this catalog indexes.
    #[must_use]
    pub const fn data_extension(&self) -> &'static str {
        match self {
            Self::Master | Self::EMaster => "DAT",
            Self::XMaster => "MWD",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// One catalog row describing a price-series file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Catalog variant the entry came from.
    pub kind: CatalogKind,
    /// Number used to build the data file name (`F<n>.DAT` / `F<n>.MWD`).
    pub file_number: u16,
    /// Ticker symbol.
    pub symbol: String,
    /// Security name.
    pub name: String,
    /// First date covered by the series.
    pub first_date: NaiveDate,
    /// Last date covered by the series.
    pub last_date: NaiveDate,
    /// Sampling frequency.
    pub frequency: Frequency,
    /// Fields per price record; not stored by the cross-reference catalog.
    pub field_count: Option<u8>,
    /// Record length byte; only stored by the legacy catalog.
    pub record_length: Option<u8>,
}

impl CatalogEntry {
    /// Name of the price-series file this entry points to.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("F{}.{}", self.file_number, self.kind.data_extension())
    }

    /// Full path of the price-series file inside `dir`.
    #[must_use]
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// Catalog rows merged from every catalog file in a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogListing {
    entries: Vec<CatalogEntry>,
}

impl CatalogListing {
    /// Creates a listing, ordering the entries by file number.
    ///
    /// The sort is stable, so rows sharing a file number keep their
    /// catalog order.
    #[must_use]
    pub fn new(mut entries: Vec<CatalogEntry>) -> Self {
        entries.sort_by_key(|e| e.file_number);
        Self { entries }
    }

    /// Returns the entries in file-number order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Consumes the listing and returns its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }

    /// Looks up the first entry with the given file number.
    #[must_use]
    pub fn get(&self, file_number: u16) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.file_number == file_number)
    }

    /// Searches entries by symbol (case-insensitive).
    #[must_use]
    pub fn by_symbol(&self, symbol: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.symbol.eq_ignore_ascii_case(symbol))
            .collect()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the listing has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a CatalogListing {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
