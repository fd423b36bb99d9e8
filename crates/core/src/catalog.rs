//! Word catalog - the immutable pool of candidate words
//!
//! Loaded once from a line-oriented text resource: one word per line, lines
//! trimmed, blank lines skipped, everything normalized to uppercase.
//!
//! Only words a player can finish are kept: ASCII letters, at most
//! `MAX_TYPED_LEN` of them. Anything else is skipped with a warning.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{EmptyCatalogError, ResourceError};
use crate::rng::SimpleRng;
use crate::types::MAX_TYPED_LEN;

/// An uppercase word. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(Arc<str>);

impl Word {
    /// Build a word, normalizing it to uppercase.
    pub fn new(text: &str) -> Self {
        Self(Arc::from(text.trim().to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive comparison against typed text.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.eq_ignore_ascii_case(candidate)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    words: Vec<Word>,
}

impl WordCatalog {
    /// Load a catalog from a word-per-line file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ResourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_text(&text);
        if catalog.is_empty() {
            return Err(ResourceError::Empty {
                path: path.to_path_buf(),
            });
        }

        log::info!("loaded {} words from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a catalog from in-memory text using the file rules.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Build a catalog, skipping blank entries and words that cannot be typed.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let words = words
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|word| {
                let ok = is_typable(word);
                if !ok {
                    log::warn!(
                        "skipping word {:?}: only ASCII letters, at most {} of them",
                        word,
                        MAX_TYPED_LEN
                    );
                }
                ok
            })
            .map(Word::new)
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Uniform random pick.
    pub fn pick_random(&self, rng: &mut SimpleRng) -> Result<&Word, EmptyCatalogError> {
        let index = rng.pick_index(self.words.len()).ok_or(EmptyCatalogError)?;
        Ok(&self.words[index])
    }
}

/// True when every char is an ASCII letter and the typed buffer can hold it.
pub fn is_typable(text: &str) -> bool {
    !text.is_empty()
        && text.len() <= MAX_TYPED_LEN
        && text.bytes().all(|b| b.is_ascii_alphabetic())
}
