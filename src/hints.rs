//! Helpers that turn a game observation into word suggestions.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::LazyLock;

const MAX_WORDS_PER_LENGTH: usize = 10;

static ALLOWED_LETTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)allowed letters:\s*([a-z]+)").expect("static regex is valid")
});

/// Pull the lowercase letters out of an `Allowed Letters: xyz` line.
#[must_use]
pub fn extract_letters(observation: &str) -> Option<Vec<char>> {
    let captures = ALLOWED_LETTERS.captures(observation)?;
    let letters = captures[1].chars().map(|c| c.to_ascii_lowercase()).collect();
    Some(letters)
}

/// Number of words per length.
#[must_use]
pub fn length_distribution<S: AsRef<str>>(words: &[S]) -> BTreeMap<usize, usize> {
    let mut distribution = BTreeMap::new();
    for word in words {
        *distribution.entry(word.as_ref().len()).or_insert(0) += 1;
    }
    distribution
}

/// Word counts per length, longest first, followed by advice that depends
/// on how many words share the maximum length.
#[must_use]
pub fn render_strategy<S: AsRef<str>>(words: &[S]) -> String {
    let distribution = length_distribution(words);
    let mut out = String::from("Word length distribution:");
    for (length, count) in distribution.iter().rev() {
        let _ = write!(out, "\n- {length}-letter words: {count}");
    }

    out.push_str("\nStrategy:");
    match distribution.iter().next_back() {
        Some((&max_length, &1)) => {
            let _ = write!(
                out,
                "\n- Only one word has the maximum length ({max_length}); playing it first forces a win."
            );
        }
        Some((&max_length, &2)) => {
            let _ = write!(
                out,
                "\n- Only two words have the maximum length ({max_length}); let the opponent play one, then play the other."
            );
        }
        Some(_) => {
            out.push_str("\n- Play shorter words first to push the opponent toward the longer ones.");
        }
        None => out.push_str("\n- No playable words."),
    }
    out
}

/// Words grouped by length, longest group first, each group capped at ten
/// entries with a count of the rest.
#[must_use]
pub fn render_suggestions<S: AsRef<str>>(words: &[S]) -> String {
    let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for word in words {
        let word = word.as_ref();
        groups.entry(word.len()).or_default().push(word);
    }

    let mut out = format!("Found {} possible words:", words.len());
    for (length, group) in groups.iter().rev() {
        let shown = group.iter().take(MAX_WORDS_PER_LENGTH).copied();
        let _ = write!(
            out,
            "\n{length}-letter words: {}",
            shown.collect::<Vec<_>>().join(", ")
        );
        if group.len() > MAX_WORDS_PER_LENGTH {
            let _ = write!(out, " (and {} more)", group.len() - MAX_WORDS_PER_LENGTH);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_letters_from_observation() {
        let observation = "[GAME] You are playing Spelling Bee.\nAllowed Letters: ACEHIST\nSubmit a word.";
        assert_eq!(
            extract_letters(observation),
            Some(vec!['a', 'c', 'e', 'h', 'i', 's', 't'])
        );
    }

    #[test]
    fn test_extract_letters_case_insensitive_label() {
        assert_eq!(
            extract_letters("allowed letters: plead"),
            Some("plead".chars().collect())
        );
    }

    #[test]
    fn test_extract_letters_absent() {
        assert_eq!(extract_letters("Welcome to poker"), None);
        assert_eq!(extract_letters("Allowed Letters: 123"), None);
    }

    #[test]
    fn test_length_distribution() {
        let distribution = length_distribution(&["plead", "apple", "peal", "paddle"]);
        assert_eq!(distribution.get(&4), Some(&1));
        assert_eq!(distribution.get(&5), Some(&2));
        assert_eq!(distribution.get(&6), Some(&1));
        assert_eq!(distribution.get(&7), None);
    }

    #[test]
    fn test_render_strategy_single_longest_word() {
        let rendered = render_strategy(&["peal", "lead", "paddle", "plead"]);
        assert_eq!(
            rendered,
            "Word length distribution:\n- 6-letter words: 1\n- 5-letter words: 1\n- 4-letter words: 2\n\
             Strategy:\n- Only one word has the maximum length (6); playing it first forces a win."
        );
    }

    #[test]
    fn test_render_strategy_two_longest_words() {
        let rendered = render_strategy(&["peal", "plead", "apple"]);
        assert!(rendered.contains("- 5-letter words: 2"));
        assert!(rendered.ends_with(
            "Only two words have the maximum length (5); let the opponent play one, then play the other."
        ));
    }

    #[test]
    fn test_render_strategy_many_longest_words() {
        let rendered = render_strategy(&["peal", "lead", "leap"]);
        assert!(rendered.contains("- 4-letter words: 3"));
        assert!(rendered.ends_with("push the opponent toward the longer ones."));
    }

    #[test]
    fn test_render_strategy_no_words() {
        let words: [&str; 0] = [];
        assert_eq!(
            render_strategy(&words),
            "Word length distribution:\nStrategy:\n- No playable words."
        );
    }

    #[test]
    fn test_render_suggestions_groups_longest_first() {
        let rendered = render_suggestions(&["peal", "paddle", "plead"]);
        assert_eq!(
            rendered,
            "Found 3 possible words:\n6-letter words: paddle\n5-letter words: plead\n4-letter words: peal"
        );
    }

    #[test]
    fn test_render_suggestions_caps_groups() {
        let words: Vec<String> = (0..13).map(|i| format!("w{i:03}")).collect();
        let rendered = render_suggestions(&words);
        assert!(rendered.ends_with("(and 3 more)"));
        assert!(!rendered.contains("w012"));
    }

    #[test]
    fn test_render_suggestions_empty() {
        let words: [&str; 0] = [];
        assert_eq!(render_suggestions(&words), "Found 0 possible words:");
    }
}
