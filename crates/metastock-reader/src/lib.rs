//! Price-series and catalog file readers for the metastock binary format.
//!
//! This crate provides the file-level decoding pipeline:
//!
//! - [`read_series`] - Decodes a `F<n>.DAT` price-series file
//! - [`read_catalog_file`] - Decodes one `master`/`emaster`/`xmaster` catalog
//! - [`read_catalog`] - Merges every catalog found in a directory
//! - [`ReadOptions`] - Text encoding and field-count defaults
//!
//! Every call opens, reads and closes its file before decoding from memory;
//! nothing is cached between calls.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/metastock/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod merge;
mod options;
mod series;

pub use catalog::{
    CatalogLayout, EMASTER_LAYOUT, MASTER_LAYOUT, XMASTER_LAYOUT, decode_catalog,
    read_catalog_file,
};
pub use merge::{find_catalog_file, read_catalog};
pub use options::ReadOptions;
pub use series::{decode_series, read_entry_series, read_series};

use metastock_types::{MetastockError, Result};
use std::path::Path;

/// Reads a whole file into memory, attaching the path to any I/O error.
fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| MetastockError::io(path, e))
}
