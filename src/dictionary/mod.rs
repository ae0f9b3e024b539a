//! Dictionary of playable words
//!
//! One immutable set serves both purposes: drawing the hidden solution and
//! validating submitted guesses.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building or drawing from a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no words")]
    Empty,
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// An immutable set of five-letter words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<[u8; 5]>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicate entries
    ///
    /// Order of first appearance is kept so seeded draws are reproducible.
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| index.insert(*word.chars()))
            .collect();

        Self { words, index }
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(loader::words_from_slice(WORDS))
    }

    /// Load a dictionary from a newline-separated word file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_words(words))
    }

    /// Case-insensitive membership test
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words([Word::new("crane").unwrap()]);
    /// assert!(dictionary.contains("CRANE"));
    /// assert!(!dictionary.contains("slate"));
    /// ```
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// Look up the canonical word for `text`
    #[must_use]
    pub fn get(&self, text: &str) -> Option<Word> {
        Word::new(text)
            .ok()
            .filter(|word| self.index.contains(word.chars()))
    }

    /// Draw a uniformly random word
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if there is nothing to draw from.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, DictionaryError> {
        self.words.choose(rng).ok_or(DictionaryError::Empty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in load order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// The words as a slice, in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl<'d> IntoIterator for &'d Dictionary {
    type Item = &'d Word;
    type IntoIter = std::slice::Iter<'d, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
