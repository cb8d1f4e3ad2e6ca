//! Word catalog types
//!
//! A catalog is an ordered list of categories. Each category holds up to three
//! difficulty tiers of words, and every word may carry a hint.

use std::fmt;

/// A word (or phrase) to guess, with an optional hint
///
/// The text is stored as given; the game lowercases it when a round starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    hint: String,
}

impl Word {
    /// Create a word with a hint (an empty hint means "no hint")
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Apple", "A fruit");
    /// assert_eq!(word.text(), "Apple");
    /// assert!(word.has_hint());
    /// ```
    pub fn new(text: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hint: hint.into(),
        }
    }

    /// Create a word without a hint
    pub fn bare(text: impl Into<String>) -> Self {
        Self::new(text, String::new())
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub fn has_hint(&self) -> bool {
        !self.hint.trim().is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Difficulty tier of a word list
///
/// `Unknown` means "not chosen yet" and never names a tier to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Unknown,
}

impl Difficulty {
    /// The playable tiers, in menu order
    pub const TIERS: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Parse a difficulty name
    ///
    /// Matching is case-insensitive. Anything unrecognized maps to `Unknown`
    /// rather than failing, so callers can fall back to asking the player.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Unknown,
        }
    }

    /// Index of the tier inside a category, `None` for `Unknown`
    #[must_use]
    pub const fn tier_index(self) -> Option<usize> {
        match self {
            Self::Easy => Some(0),
            Self::Medium => Some(1),
            Self::Hard => Some(2),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        self.tier_index().is_some()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named group of words split into difficulty tiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    tiers: [Vec<Word>; 3],
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>, easy: Vec<Word>, medium: Vec<Word>, hard: Vec<Word>) -> Self {
        Self {
            name: name.into(),
            tiers: [easy, medium, hard],
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Words of one tier, or `None` if the difficulty is `Unknown`
    #[must_use]
    pub fn words(&self, difficulty: Difficulty) -> Option<&[Word]> {
        difficulty
            .tier_index()
            .map(|index| self.tiers[index].as_slice())
    }

    /// Number of words in a tier (0 for `Unknown`)
    #[must_use]
    pub fn count(&self, difficulty: Difficulty) -> usize {
        self.words(difficulty).map_or(0, <[Word]>::len)
    }

    /// A category is playable when at least one tier has words
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.tiers.iter().any(|tier| !tier.is_empty())
    }
}

/// Read-only collection of categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    creator: String,
    description: String,
    categories: Vec<Category>,
}

impl Catalog {
    #[must_use]
    pub fn new(
        creator: impl Into<String>,
        description: impl Into<String>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            creator: creator.into(),
            description: description.into(),
            categories,
        }
    }

    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[inline]
    #[must_use]
    pub fn creator(&self) -> &str {
        &self.creator
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Total number of words across every category and tier
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|category| Difficulty::TIERS.map(|tier| category.count(tier)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Category {
        Category::new(
            "Fruits",
            vec![Word::new("apple", "A fruit"), Word::bare("kiwi")],
            vec![Word::new("banana", "Yellow")],
            Vec::new(),
        )
    }

    #[test]
    fn word_hint_presence() {
        assert!(Word::new("apple", "A fruit").has_hint());
        assert!(!Word::bare("apple").has_hint());
        assert!(!Word::new("apple", "   ").has_hint());
    }

    #[test]
    fn word_display() {
        let word = Word::new("hello world", "A greeting");
        assert_eq!(format!("{word}"), "hello world");
    }

    #[test]
    fn difficulty_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("MEDIUM"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name(" Hard "), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Unknown);
        assert_eq!(Difficulty::from_name(""), Difficulty::Unknown);
    }

    #[test]
    fn difficulty_unknown_has_no_tier() {
        assert_eq!(Difficulty::Unknown.tier_index(), None);
        assert!(!Difficulty::Unknown.is_known());
        assert!(Difficulty::TIERS.iter().all(|tier| tier.is_known()));
        assert_eq!(Difficulty::default(), Difficulty::Unknown);
    }

    #[test]
    fn category_words_by_tier() {
        let category = fruits();
        assert_eq!(category.count(Difficulty::Easy), 2);
        assert_eq!(category.count(Difficulty::Medium), 1);
        assert_eq!(category.count(Difficulty::Hard), 0);
        assert_eq!(category.words(Difficulty::Unknown), None);
        assert_eq!(category.words(Difficulty::Medium).unwrap()[0].text(), "banana");
    }

    #[test]
    fn category_playable_needs_one_tier() {
        assert!(fruits().is_playable());
        let empty = Category::new("Empty", Vec::new(), Vec::new(), Vec::new());
        assert!(!empty.is_playable());
    }

    #[test]
    fn catalog_word_count() {
        let catalog = Catalog::new("me", "test", vec![fruits(), fruits()]);
        assert_eq!(catalog.word_count(), 6);
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.creator(), "me");
    }
}
