//! Embedded default catalog
//!
//! The JSON collection shipped in `data/`, compiled into the binary so the
//! game runs without any files on disk.

/// JSON source of the default catalog
pub const DEFAULT_CATALOG_JSON: &str = include_str!("../../data/words.json");
