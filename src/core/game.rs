//! Hangman game engine
//!
//! A `Game` is a pure state machine: it owns the target word and the set of
//! letters submitted so far, and answers questions about the round. It never
//! performs I/O and none of its operations can fail.

use super::word::Word;
use rustc_hash::FxHashSet;

/// Number of mistakes allowed when nothing else is configured
pub const DEFAULT_MAX_MISTAKES: u32 = 6;

/// Character shown for letters that have not been revealed yet
pub const PLACEHOLDER: char = '_';

const SPACE: char = ' ';

/// Stage of the gallows drawing, derived from the mistake ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Figure {
    Initial,
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl Figure {
    /// All stages, from empty gallows to the complete figure
    pub const STAGES: [Self; 7] = [
        Self::Initial,
        Self::Head,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Project `mistakes` out of `max_mistakes` onto the seven stages
    ///
    /// The bucket is `mistakes * 7 / max_mistakes`, clamped to the last stage.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Figure;
    ///
    /// assert_eq!(Figure::from_mistakes(0, 6), Figure::Initial);
    /// assert_eq!(Figure::from_mistakes(3, 8), Figure::Body);
    /// assert_eq!(Figure::from_mistakes(6, 6), Figure::RightLeg);
    /// ```
    #[must_use]
    pub fn from_mistakes(mistakes: u32, max_mistakes: u32) -> Self {
        let max = u64::from(max_mistakes.max(1));
        let bucket = u64::from(mistakes) * Self::STAGES.len() as u64 / max;
        let index = usize::try_from(bucket)
            .unwrap_or(usize::MAX)
            .min(Self::STAGES.len() - 1);
        Self::STAGES[index]
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Effect of a single guess on the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was already used (or is a space); nothing changed
    Repeated,
    /// New letter that occurs in the word
    Hit,
    /// New letter that does not occur in the word
    Miss,
    /// The round is already won or lost; nothing changed
    Finished,
}

/// State of one hangman round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    word: Word,
    max_mistakes: u32,
    attempts: u32,
    mistakes: u32,
    used: FxHashSet<char>,
    required: FxHashSet<char>,
}

impl Game {
    /// Start a round for `word`
    ///
    /// The word is lowercased. A space in the word is marked as used right
    /// away, so phrases only ask for their letters. `max_mistakes` below 1 is
    /// raised to 1.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, Word};
    ///
    /// let mut game = Game::new(&Word::new("Hello World", "A greeting"), 6);
    /// assert_eq!(game.pattern(), "_____ _____");
    ///
    /// game.guess('o');
    /// assert_eq!(game.pattern(), "____o _o___");
    /// assert_eq!(game.attempts(), 1);
    /// ```
    #[must_use]
    pub fn new(word: &Word, max_mistakes: u32) -> Self {
        let word = Word::new(word.text().to_lowercase(), word.hint());
        let required: FxHashSet<char> = word.text().chars().collect();

        let mut used = FxHashSet::default();
        if required.contains(&SPACE) {
            used.insert(SPACE);
        }

        Self {
            word,
            max_mistakes: max_mistakes.max(1),
            attempts: 0,
            mistakes: 0,
            used,
            required,
        }
    }

    /// Submit a letter
    ///
    /// Letters are compared lowercased. Repeats and the space character are
    /// no-ops; otherwise the letter counts as an attempt, and as a mistake
    /// when it does not occur in the word. Once the round is decided every
    /// guess is ignored, so `mistakes` never exceeds `max_mistakes`.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.is_finished() {
            return GuessOutcome::Finished;
        }

        let letter = fold_case(letter);

        if letter == SPACE || !self.used.insert(letter) {
            return GuessOutcome::Repeated;
        }

        self.attempts += 1;

        if self.required.contains(&letter) {
            GuessOutcome::Hit
        } else {
            self.mistakes += 1;
            GuessOutcome::Miss
        }
    }

    /// The word with unrevealed letters replaced by `_`
    #[must_use]
    pub fn pattern(&self) -> String {
        self.word
            .text()
            .chars()
            .map(|c| {
                if self.used.contains(&c) && self.required.contains(&c) {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    /// Every character of the word has been used
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.word.text().chars().all(|c| self.used.contains(&c))
    }

    #[must_use]
    pub const fn is_lose(&self) -> bool {
        self.mistakes >= self.max_mistakes
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// Result of the round once it is over
    ///
    /// Checks the word first; guessing stops at whichever happens first, so
    /// both cannot hold at once through `guess`.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_win() {
            Some(Outcome::Won)
        } else if self.is_lose() {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    /// The hint may be shown once half of the allowed mistakes are made
    #[must_use]
    pub const fn hint_available(&self) -> bool {
        self.mistakes >= self.max_mistakes / 2
    }

    #[must_use]
    pub fn figure(&self) -> Figure {
        Figure::from_mistakes(self.mistakes, self.max_mistakes)
    }

    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[inline]
    #[must_use]
    pub const fn max_mistakes(&self) -> u32 {
        self.max_mistakes
    }

    /// Mistakes left before the round is lost
    #[must_use]
    pub const fn remaining_mistakes(&self) -> u32 {
        self.max_mistakes.saturating_sub(self.mistakes)
    }

    /// The lowercased target word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        self.word.text()
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        self.word.hint()
    }

    /// Whether a letter has been submitted (spaces count as used in phrases)
    #[must_use]
    pub fn is_used(&self, letter: char) -> bool {
        self.used.contains(&fold_case(letter))
    }

    /// Used letters in sorted order
    #[must_use]
    pub fn used_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.used.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Used letters that are not in the word, sorted
    #[must_use]
    pub fn missed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.used.difference(&self.required).copied().collect();
        letters.sort_unstable();
        letters
    }
}

fn fold_case(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}
