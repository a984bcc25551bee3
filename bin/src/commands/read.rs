//! Read command implementation.
//!
//! This module decodes a single price-series file.

use crate::display::{Format, write_records};
use anyhow::{Context, Result};
use metastock_lib::prelude::*;
use std::path::Path;

/// Decode `file` and write its records to `output` (stdout if omitted).
pub(crate) fn read_file(
    file: &Path,
    fields: u8,
    format: Format,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let records = read_series(file, fields)
        .with_context(|| format!("Failed to decode {}", file.display()))?;

    write_records(&records, output, format)?;

    if let Some(path) = output
        && !quiet
    {
        println!("Wrote {} records to {}", records.len(), path.display());
    }

    Ok(())
}
