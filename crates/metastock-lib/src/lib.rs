//! Rust library for decoding metastock binary price-history files.
//!
//! This is a facade crate that re-exports functionality from the metastock
//! workspace crates for convenient access.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/metastock/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use metastock_types::*;

// Re-export leaf codecs
pub use metastock_codec::{
    ColumnKind, ColumnValue, TextEncoding, float_to_date, float_to_time, int_to_date, mbf_to_f32,
    padded_string,
};

// Re-export file readers
#[cfg(feature = "reader")]
pub use metastock_reader::{
    CatalogLayout, ReadOptions, decode_catalog, decode_series, find_catalog_file, read_catalog,
    read_catalog_file, read_entry_series, read_series,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use metastock_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
};

#[cfg(all(feature = "format", feature = "parquet"))]
pub use metastock_format::ParquetFormatter;

/// Prelude module for convenient imports.
///
/// ```
/// use metastock_lib::prelude::*;
/// ```
pub mod prelude {
    pub use metastock_types::{
        CatalogEntry, CatalogKind, CatalogListing, FieldCount, Frequency, MetastockError,
        PriceRecord, Result,
    };

    pub use metastock_codec::TextEncoding;

    #[cfg(feature = "reader")]
    pub use metastock_reader::{ReadOptions, read_catalog, read_entry_series, read_series};

    #[cfg(feature = "format")]
    pub use metastock_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(all(feature = "format", feature = "parquet"))]
    pub use metastock_format::ParquetFormatter;
}
