//! Word catalogs
//!
//! Loading JSON word collections, plus the collection embedded in the binary.

mod embedded;
pub mod loader;

pub use embedded::DEFAULT_CATALOG_JSON;
pub use loader::{CatalogError, CatalogIssue, load_from_file, parse_catalog};

use crate::core::Catalog;
use std::path::Path;

/// The catalog compiled into the binary
///
/// # Errors
///
/// Only if the embedded JSON were edited into an invalid state.
pub fn default_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(DEFAULT_CATALOG_JSON)
}

/// Load from `path` when given, otherwise use the embedded catalog
///
/// # Errors
///
/// See [`load_from_file`].
pub fn load_or_default(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => load_from_file(path),
        None => default_catalog(),
    }
}
