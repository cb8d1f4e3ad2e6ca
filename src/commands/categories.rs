//! Catalog listing

use crate::core::{Catalog, Difficulty};
use colored::Colorize;

/// Word counts of one category, by tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    /// Easy, medium, hard
    pub counts: [usize; 3],
}

impl CategorySummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Summaries in catalog order
#[must_use]
pub fn summarize(catalog: &Catalog) -> Vec<CategorySummary> {
    catalog
        .categories()
        .iter()
        .map(|category| CategorySummary {
            name: category.name().to_string(),
            counts: Difficulty::TIERS.map(|tier| category.count(tier)),
        })
        .collect()
}

/// Print every category with its per-tier word counts
pub fn print_categories(catalog: &Catalog) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {}", "WORD CATALOG".bright_cyan().bold());
    if !catalog.creator().is_empty() {
        println!(" by {}", catalog.creator());
    }
    if !catalog.description().is_empty() {
        println!(" {}", catalog.description().dimmed());
    }
    println!("{}", "═".repeat(50).cyan());

    println!(
        "\n{:<24} {:>6} {:>6} {:>6}",
        "Category".bold(),
        "Easy",
        "Medium",
        "Hard"
    );
    for summary in summarize(catalog) {
        let [easy, medium, hard] = summary.counts;
        println!(
            "{:<24} {easy:>6} {medium:>6} {hard:>6}",
            summary.name.bright_yellow()
        );
    }

    println!("\nTotal words: {}", catalog.word_count().to_string().green().bold());
}
