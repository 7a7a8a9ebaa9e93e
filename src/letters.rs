//! Letter configuration for one SpellingBee round.

use std::collections::BTreeSet;
use std::fmt;

/// Center letter plus the permitted letter set for a round.
///
/// Letters are stored lowercase and the permitted set always contains the
/// center. A missing center (`None`) marks a configuration that can only be
/// used for permissive lookups; answer checks against it fail closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterConfiguration {
    center: Option<char>,
    letters: BTreeSet<char>,
}

fn fold(c: char) -> Option<char> {
    c.is_ascii_alphabetic().then(|| c.to_ascii_lowercase())
}

fn fold_all(letters: &str) -> BTreeSet<char> {
    letters.chars().filter_map(fold).collect()
}

impl LetterConfiguration {
    /// A non-alphabetic center is treated as missing.
    #[must_use]
    pub fn new(center: char, letters: &str) -> Self {
        let center = fold(center);
        let mut set = fold_all(letters);
        if let Some(c) = center {
            set.insert(c);
        }
        Self {
            center,
            letters: set,
        }
    }

    /// Letter set with no mandatory center.
    #[must_use]
    pub fn without_center(letters: &str) -> Self {
        Self {
            center: None,
            letters: fold_all(letters),
        }
    }

    /// Build from optional CLI/tool inputs; an empty or multi-character
    /// center string yields a configuration without a center.
    #[must_use]
    pub fn from_parts(center: Option<&str>, letters: &str) -> Self {
        let mut chars = center.map(str::trim).unwrap_or_default().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c, letters),
            _ => Self::without_center(letters),
        }
    }

    #[must_use]
    pub fn center(&self) -> Option<char> {
        self.center
    }

    #[must_use]
    pub fn letters(&self) -> &BTreeSet<char> {
        &self.letters
    }

    #[must_use]
    pub fn permits(&self, c: char) -> bool {
        self.letters.contains(&c)
    }
}

impl fmt::Display for LetterConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.letters {
            if Some(c) == self.center {
                write!(f, "[{}]", c.to_ascii_uppercase())?;
            } else {
                write!(f, "{}", c.to_ascii_uppercase())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_includes_center_in_letters() {
        let config = LetterConfiguration::new('P', "leAd");
        assert_eq!(config.center(), Some('p'));
        let expected: BTreeSet<char> = "plead".chars().collect();
        assert_eq!(config.letters(), &expected);
    }

    #[test]
    fn test_new_with_non_alphabetic_center_has_no_center() {
        let config = LetterConfiguration::new('3', "plead");
        assert_eq!(config.center(), None);
        assert!(!config.permits('3'));
    }

    #[test]
    fn test_letters_skip_non_alphabetic() {
        let config = LetterConfiguration::without_center("p, l, e-a d!");
        assert_eq!(config.letters().len(), 5);
        assert!(config.permits('d'));
        assert!(!config.permits(','));
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            LetterConfiguration::from_parts(Some(" p "), "lead").center(),
            Some('p')
        );
        assert_eq!(LetterConfiguration::from_parts(Some(""), "lead").center(), None);
        assert_eq!(LetterConfiguration::from_parts(Some("pl"), "lead").center(), None);
        assert_eq!(LetterConfiguration::from_parts(None, "lead").center(), None);
    }

    #[test]
    fn test_display_marks_center() {
        let config = LetterConfiguration::new('p', "lead");
        assert_eq!(config.to_string(), "ADEL[P]");
    }
}
