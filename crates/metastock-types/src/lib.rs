//! Core types for the metastock binary price-history decoder.
//!
//! This crate provides the fundamental data structures used throughout metastock:
//!
//! - [`PriceRecord`] - A single decoded OHLCV bar with optional intraday time
//! - [`FieldCount`] - The 7 or 8 column layout of a price-series file
//! - [`CatalogEntry`] - One row of a `master`, `emaster` or `xmaster` catalog
//! - [`CatalogListing`] - Merged catalog rows ordered by file identifier
//! - [`Frequency`] - Sampling frequency code of a series
//! - [`MetastockError`] / [`DecodeError`] - Error taxonomy

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/metastock/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod error;
mod frequency;
mod record;

pub use catalog::{CatalogEntry, CatalogKind, CatalogListing};
pub use error::{DecodeError, ErrorKind, MetastockError, Result};
pub use frequency::Frequency;
pub use record::{FieldCount, PriceRecord};
