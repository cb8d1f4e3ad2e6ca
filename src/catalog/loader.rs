//! Catalog loading utilities
//!
//! Reads a JSON word collection, checks its structure, and converts it into a
//! [`Catalog`]. Every structural problem is reported; nothing is skipped.

use crate::core::{Catalog, Category, Word};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Why a catalog could not be loaded
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid catalog:\n{}", format_issues(.0))]
    Invalid(Vec<CatalogIssue>),
}

/// One structural problem in a catalog file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    NoCategories,
    BlankCategoryName { index: usize },
    NoWords { category: String },
    BlankWord { category: String, tier: &'static str, index: usize },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCategories => write!(f, "catalog has no categories"),
            Self::BlankCategoryName { index } => {
                write!(f, "category #{} has a blank name", index + 1)
            }
            Self::NoWords { category } => {
                write!(f, "category '{category}' has no words in any difficulty")
            }
            Self::BlankWord {
                category,
                tier,
                index,
            } => write!(
                f,
                "category '{category}' {tier} word #{} is blank",
                index + 1
            ),
        }
    }
}

fn format_issues(issues: &[CatalogIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("- {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    creator: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    categories: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(default)]
    name: String,
    #[serde(default)]
    easy: Vec<RawWord>,
    #[serde(default)]
    medium: Vec<RawWord>,
    #[serde(default)]
    hard: Vec<RawWord>,
}

#[derive(Debug, Deserialize)]
struct RawWord {
    word: String,
    #[serde(default)]
    hint: String,
}

impl RawCategory {
    fn tiers(&self) -> [(&'static str, &[RawWord]); 3] {
        [
            ("easy", self.easy.as_slice()),
            ("medium", self.medium.as_slice()),
            ("hard", self.hard.as_slice()),
        ]
    }
}

fn validate(raw: &RawCatalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    if raw.categories.is_empty() {
        issues.push(CatalogIssue::NoCategories);
    }

    for (index, category) in raw.categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            issues.push(CatalogIssue::BlankCategoryName { index });
        }

        let tiers = category.tiers();
        if tiers.iter().all(|(_, words)| words.is_empty()) {
            issues.push(CatalogIssue::NoWords {
                category: category.name.clone(),
            });
        }

        for (tier, words) in tiers {
            for (index, word) in words.iter().enumerate() {
                if word.word.trim().is_empty() {
                    issues.push(CatalogIssue::BlankWord {
                        category: category.name.clone(),
                        tier,
                        index,
                    });
                }
            }
        }
    }

    issues
}

fn convert(raw: RawCatalog) -> Catalog {
    let words = |list: Vec<RawWord>| -> Vec<Word> {
        list.into_iter()
            .map(|w| Word::new(w.word.trim(), w.hint.trim()))
            .collect()
    };

    let categories = raw
        .categories
        .into_iter()
        .map(|c| Category::new(c.name.trim(), words(c.easy), words(c.medium), words(c.hard)))
        .collect();

    Catalog::new(raw.creator, raw.description, categories)
}

/// Parse and validate a catalog from JSON text
///
/// # Errors
///
/// `Parse` for invalid JSON or wrong field types, `Invalid` listing every
/// structural issue.
///
/// # Examples
/// ```
/// use hangman::catalog::loader::parse_catalog;
///
/// let json = r#"{"categories": [{"name": "Fruits", "easy": [{"word": "fig"}]}]}"#;
/// let catalog = parse_catalog(json).unwrap();
/// assert_eq!(catalog.categories()[0].name(), "Fruits");
/// ```
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let raw: RawCatalog = serde_json::from_str(json)?;

    let issues = validate(&raw);
    if !issues.is_empty() {
        return Err(CatalogError::Invalid(issues));
    }

    let catalog = convert(raw);
    debug!(
        categories = catalog.categories().len(),
        words = catalog.word_count(),
        "Catalog parsed"
    );
    Ok(catalog)
}

/// Load a catalog from a file
///
/// # Errors
///
/// `Io` if the file cannot be read, otherwise as [`parse_catalog`].
///
/// # Examples
/// ```no_run
/// use hangman::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("data/words.json").unwrap();
/// println!("Loaded {} categories", catalog.categories().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&content)?;
    info!(path = %path.display(), categories = catalog.categories().len(), "Catalog loaded");
    Ok(catalog)
}
