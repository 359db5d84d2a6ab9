//! Catalog file loading.
//!
//! The on-disk catalog is a JSON array of listing objects. Loading happens
//! once at startup, before the pipeline is exposed to callers; per-request
//! code never touches the filesystem.

use std::path::Path;

use tracing::info;

use super::error::CatalogError;
use super::{ListingCatalog, ListingRecord};

/// Reads and parses the catalog at `path`.
///
/// Listings with missing fields deserialize with empty-string defaults
/// (`id` becomes `-1`); an unreadable or malformed file is a startup
/// error, not something ranking calls ever observe.
pub fn load_catalog(path: &Path) -> Result<ListingCatalog, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let listings: Vec<ListingRecord> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::ParseFailed {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        listings = listings.len(),
        "Catalog loaded"
    );

    Ok(ListingCatalog::new(listings))
}
