//! List command implementation.
//!
//! This module prints the merged catalog of a data directory.

use crate::display::{Format, write_catalog};
use anyhow::{Context, Result};
use metastock_lib::prelude::*;
use std::path::Path;

/// List every catalog entry in `dir`, as a table or in `format`.
pub(crate) fn list_catalog(
    dir: &Path,
    options: &ReadOptions,
    format: Option<Format>,
) -> Result<()> {
    let listing = read_catalog(dir, options)
        .with_context(|| format!("Failed to read catalog in {}", dir.display()))?;

    if let Some(format) = format {
        return write_catalog(listing.entries(), format);
    }

    if listing.is_empty() {
        println!("No catalog entries found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<15} {:<24} {:<4} {:<11} {:<11} {:>6}",
        "FILE", "SYMBOL", "NAME", "FREQ", "FIRST", "LAST", "FIELDS"
    );
    println!("{}", "-".repeat(87));

    for entry in &listing {
        println!(
            "{:<10} {:<15} {:<24} {:<4} {:<11} {:<11} {:>6}",
            entry.file_name(),
            entry.symbol,
            entry.name,
            entry.frequency,
            entry.first_date.format("%Y-%m-%d"),
            entry.last_date.format("%Y-%m-%d"),
            entry
                .field_count
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
        );
    }

    println!("\nTotal: {} entries", listing.len());
    Ok(())
}
