//! Merging the catalogs of a data directory into one listing.

use metastock_types::{CatalogKind, CatalogListing, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::{ReadOptions, read_catalog_file};

/// Finds a catalog file in `dir`, trying the lowercase then uppercase name.
#[must_use]
pub fn find_catalog_file(dir: &Path, kind: CatalogKind) -> Option<PathBuf> {
    let name = kind.file_name();
    [name.to_string(), name.to_ascii_uppercase()]
        .into_iter()
        .map(|candidate| dir.join(candidate))
        .find(|path| path.is_file())
}

/// Reads every catalog in `dir` into a listing ordered by file number.
///
/// `master` is used if present, otherwise `emaster`; the two index the same
/// `F<n>.DAT` files, so only one is read. `xmaster`, which indexes the
/// `F<n>.MWD` files, is added whenever present. A directory without any
/// catalog yields an empty listing.
///
/// # Errors
///
/// Returns the first error from reading a catalog file that exists.
pub fn read_catalog(dir: &Path, options: &ReadOptions) -> Result<CatalogListing> {
    let mut entries = Vec::new();

    let master = find_catalog_file(dir, CatalogKind::Master);
    let emaster = find_catalog_file(dir, CatalogKind::EMaster);
    match (master, emaster) {
        (Some(path), other) => {
            if other.is_some() {
                warn!(
                    dir = %dir.display(),
                    "both master and emaster present, reading master only"
                );
            }
            entries.extend(read_catalog_file(
                &path,
                CatalogKind::Master,
                options.encoding,
            )?);
        }
        (None, Some(path)) => {
            entries.extend(read_catalog_file(
                &path,
                CatalogKind::EMaster,
                options.encoding,
            )?);
        }
        (None, None) => {}
    }

    if let Some(path) = find_catalog_file(dir, CatalogKind::XMaster) {
        entries.extend(read_catalog_file(
            &path,
            CatalogKind::XMaster,
            options.encoding,
        )?);
    }

    let listing = CatalogListing::new(entries);
    info!(dir = %dir.display(), entries = listing.len(), "read catalog listing");
    Ok(listing)
}
