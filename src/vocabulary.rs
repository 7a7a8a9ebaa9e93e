use crate::error::{OracleError, Result};
use crate::info_log;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Small bundled sample list; full dictionaries are supplied with `-i`,
/// `SPELLING_BEE_WORDS`, or the per-user data file.
pub const EMBEDDED_WORDS: &str = include_str!("resources/words.txt");

const DATA_DIR_NAME: &str = "spelling-bee-oracle";
const WORDS_FILE_NAME: &str = "words.txt";

/// Trim and ASCII-lowercase a candidate before lookup.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_ascii_lowercase()
}

fn is_usable(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Immutable set of accepted words. Entries are lowercase ASCII letters only.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    /// Build from arbitrary words; entries are normalized and unusable ones dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| is_usable(w))
            .collect();
        Self { words }
    }

    /// Parse a newline-delimited word list held in memory.
    pub fn from_str_source(data: &str) -> Result<Self> {
        let vocabulary = Self::from_words(data.lines());
        if vocabulary.is_empty() {
            return Err(OracleError::EmptyWordSource("<inline>".to_string()));
        }
        Ok(vocabulary)
    }

    /// Load a newline-delimited word list from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let word_source_err = |source| OracleError::WordSource {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(word_source_err)?;
        let reader = BufReader::new(file);
        let mut words = HashSet::new();
        for line in reader.lines() {
            let word = normalize(&line.map_err(word_source_err)?);
            if is_usable(&word) {
                words.insert(word);
            }
        }
        if words.is_empty() {
            return Err(OracleError::EmptyWordSource(path.display().to_string()));
        }
        info_log!("Loaded {} words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// The word list compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_str_source(EMBEDDED_WORDS)
    }

    /// Membership test for an already-normalized word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Where a vocabulary is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    File(PathBuf),
    Embedded,
}

impl WordSource {
    /// Pick the word source: explicit path first, then the per-user data
    /// file if it exists, otherwise the embedded list.
    #[must_use]
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::File(path.to_path_buf());
        }
        if let Some(path) = default_words_path()
            && path.is_file()
        {
            return Self::File(path);
        }
        Self::Embedded
    }

    pub fn load(&self) -> Result<Vocabulary> {
        match self {
            Self::File(path) => Vocabulary::from_file(path),
            Self::Embedded => Vocabulary::embedded(),
        }
    }
}

/// `<data dir>/spelling-bee-oracle/words.txt`, when the platform has a data dir.
#[must_use]
pub fn default_words_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME).join(WORDS_FILE_NAME))
}
