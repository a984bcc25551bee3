//! Info command implementation.
//!
//! This module shows one catalog entry together with a summary of the
//! price series it points to.

use anyhow::{Context, Result};
use metastock_lib::prelude::*;
use std::path::Path;

/// Show a catalog entry and the span of its decoded series.
pub(crate) fn show_info(dir: &Path, file_id: u16, options: &ReadOptions) -> Result<()> {
    let listing = read_catalog(dir, options)
        .with_context(|| format!("Failed to read catalog in {}", dir.display()))?;
    let entry = listing
        .get(file_id)
        .with_context(|| format!("No catalog entry for file number {file_id}"))?;

    println!("Symbol:     {}", entry.symbol);
    println!("Name:       {}", entry.name);
    println!("File:       {}", entry.file_name());
    println!("Catalog:    {}", entry.kind);
    println!("Frequency:  {} ({})", entry.frequency, frequency_label(entry.frequency));
    println!(
        "Dates:      {} to {}",
        entry.first_date.format("%Y-%m-%d"),
        entry.last_date.format("%Y-%m-%d")
    );
    match entry.field_count {
        Some(n) => println!("Fields:     {n}"),
        None => println!("Fields:     {} (default)", options.default_field_count),
    }
    if let Some(length) = entry.record_length {
        println!("Record len: {length}");
    }

    let records = read_entry_series(dir, entry, options)
        .with_context(|| format!("Failed to read {}", entry.path_in(dir).display()))?;

    println!("\nSeries:");
    println!("  Records: {}", records.len());
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        println!("  First:   {}", first.timestamp());
        println!("  Last:    {}", last.timestamp());

        let high = records.iter().map(|r| r.high).fold(f64::MIN, f64::max);
        let low = records.iter().map(|r| r.low).fold(f64::MAX, f64::min);
        let volume: i64 = records.iter().map(|r| r.volume).sum();
        println!("  High:    {high}");
        println!("  Low:     {low}");
        println!("  Volume:  {volume}");
    }

    Ok(())
}

const fn frequency_label(frequency: Frequency) -> &'static str {
    match frequency {
        Frequency::Intraday => "intraday",
        Frequency::Daily => "daily",
        Frequency::Weekly => "weekly",
        Frequency::Monthly => "monthly",
        Frequency::Quarterly => "quarterly",
        Frequency::Yearly => "yearly",
        Frequency::Other(_) => "unknown",
    }
}
