//! Word validity oracle for the SpellingBee game.
//!
//! A [`WordOracle`] owns an immutable [`Vocabulary`] and answers three kinds
//! of question: is a string a word, is it a valid answer for a letter
//! configuration, and which words are valid answers for a configuration.
//! Every query is a pure function of its inputs.

use crate::debug_log;
use crate::letters::LetterConfiguration;
use crate::vocabulary::{Vocabulary, normalize};
use std::collections::BTreeSet;
use std::fmt;

/// Shortest accepted answer.
pub const MIN_WORD_LENGTH: usize = 4;

/// Outcome of checking a candidate against a letter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Empty,
    /// The configuration has no usable center letter.
    NoCenter,
    TooShort,
    MissingCenter,
    ForeignLetter(char),
    NotAWord,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Empty => write!(f, "empty word"),
            Self::NoCenter => write!(f, "letter configuration has no center letter"),
            Self::TooShort => write!(f, "shorter than {MIN_WORD_LENGTH} letters"),
            Self::MissingCenter => write!(f, "does not use the center letter"),
            Self::ForeignLetter(c) => write!(f, "uses '{c}', which is not an allowed letter"),
            Self::NotAWord => write!(f, "not in the word list"),
        }
    }
}

/// Constraint predicate without the vocabulary lookup. `word` must already
/// be normalized.
#[must_use]
pub fn check_constraints(word: &str, config: &LetterConfiguration) -> Verdict {
    if word.is_empty() {
        return Verdict::Empty;
    }
    let Some(center) = config.center() else {
        return Verdict::NoCenter;
    };
    if word.chars().count() < MIN_WORD_LENGTH {
        return Verdict::TooShort;
    }
    if let Some(c) = word.chars().find(|&c| !config.permits(c)) {
        return Verdict::ForeignLetter(c);
    }
    if !word.contains(center) {
        return Verdict::MissingCenter;
    }
    Verdict::Accepted
}

fn uses_only(word: &str, config: &LetterConfiguration) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH && word.chars().all(|c| config.permits(c))
}

/// Longest first, then alphabetical.
fn by_length_desc(a: &String, b: &String) -> std::cmp::Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

#[derive(Debug, Clone)]
pub struct WordOracle {
    vocabulary: Vocabulary,
}

impl WordOracle {
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Case- and whitespace-insensitive membership test.
    #[must_use]
    pub fn is_word(&self, candidate: &str) -> bool {
        let word = normalize(candidate);
        !word.is_empty() && self.vocabulary.contains(&word)
    }

    /// Full check with the reason for any rejection.
    #[must_use]
    pub fn check_answer(&self, candidate: &str, config: &LetterConfiguration) -> Verdict {
        let word = normalize(candidate);
        let verdict = match check_constraints(&word, config) {
            Verdict::Accepted if !self.vocabulary.contains(&word) => Verdict::NotAWord,
            verdict => verdict,
        };
        debug_log!("check_answer({word:?}, {config}) -> {verdict:?}");
        verdict
    }

    #[must_use]
    pub fn is_valid_answer(&self, candidate: &str, config: &LetterConfiguration) -> bool {
        self.check_answer(candidate, config) == Verdict::Accepted
    }

    /// Every vocabulary word that is a valid answer for `config`. Empty when
    /// the configuration has no center.
    #[must_use]
    pub fn all_valid_answers(&self, config: &LetterConfiguration) -> BTreeSet<String> {
        let answers: BTreeSet<String> = self
            .vocabulary
            .iter()
            .filter(|word| check_constraints(word, config) == Verdict::Accepted)
            .map(str::to_string)
            .collect();
        debug_log!("all_valid_answers({config}) -> {} words", answers.len());
        answers
    }

    /// Words of at least [`MIN_WORD_LENGTH`] letters spelled only from
    /// `letters`, ignoring any center requirement. Sorted longest first.
    #[must_use]
    pub fn find_words(&self, letters: &str) -> Vec<String> {
        let config = LetterConfiguration::without_center(letters);
        let mut words: Vec<String> = self
            .vocabulary
            .iter()
            .filter(|word| uses_only(word, &config))
            .map(str::to_string)
            .collect();
        words.sort_by(by_length_desc);
        debug_log!("find_words({letters:?}) -> {} words", words.len());
        words
    }
}
