//! Export command implementation.
//!
//! This module decodes every series listed in a data directory and writes
//! one output file per entry.

use crate::display::{Format, file_stem, write_records};
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use metastock_lib::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Export every (or one symbol's) series in `dir` to `output_dir`.
///
/// An entry that fails to decode is reported and skipped; the command
/// fails only if nothing could be exported.
pub(crate) fn export(
    dir: &Path,
    output_dir: &Path,
    format: Format,
    symbol: Option<&str>,
    options: &ReadOptions,
    quiet: bool,
) -> Result<()> {
    let listing = read_catalog(dir, options)
        .with_context(|| format!("Failed to read catalog in {}", dir.display()))?;

    let entries: Vec<&CatalogEntry> = match symbol {
        Some(symbol) => listing.by_symbol(symbol),
        None => listing.iter().collect(),
    };

    if entries.is_empty() {
        bail!("No catalog entries found matching criteria");
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(entries.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} series ({percent}%) {msg}")?
                .progress_chars("=>-"),
        );
        pb
    };

    let mut used = HashSet::new();
    let mut exported = 0usize;
    let mut failed = 0usize;

    for entry in entries {
        progress.set_message(entry.symbol.clone());
        let output = output_path(output_dir, entry, format, &mut used);

        let result = read_entry_series(dir, entry, options)
            .map_err(anyhow::Error::from)
            .and_then(|records| write_records(&records, Some(&output), format));

        match result {
            Ok(()) => exported += 1,
            Err(e) => {
                failed += 1;
                warn!(file = %entry.file_name(), symbol = %entry.symbol, "skipped: {e:#}");
            }
        }
        progress.inc(1);
    }

    let finish_msg = if failed > 0 {
        format!("Exported {exported} series ({failed} skipped due to errors)")
    } else {
        format!("Exported {exported} series")
    };
    progress.finish_with_message(finish_msg);

    if exported == 0 {
        bail!("No series could be exported");
    }

    if !quiet {
        println!("Output written to: {}", output_dir.display());
    }

    Ok(())
}

/// Chooses `<symbol>.<ext>`, falling back to `<symbol>_F<n>.<ext>` when two
/// entries share a symbol.
fn output_path(
    output_dir: &Path,
    entry: &CatalogEntry,
    format: Format,
    used: &mut HashSet<String>,
) -> PathBuf {
    let stem = file_stem(&entry.symbol);
    let name = if !stem.is_empty() && used.insert(stem.to_ascii_lowercase()) {
        stem
    } else {
        format!("{stem}_F{}", entry.file_number)
    };
    output_dir.join(format!("{name}.{}", format.extension()))
}
