//! Immutable puzzle definition
//!
//! A `Puzzle` can only be built from four well-formed categories whose sixteen
//! words are pairwise distinct, so the engine never sees an invalid definition.

use super::{CATEGORY_COUNT, Category, CategoryIndex, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised while building or decoding a puzzle
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("options parameter is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("puzzle options are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("link has no options parameter")]
    MissingOptions,

    #[error("expected {expected} {what}, got {actual}")]
    Shape {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("category {category} is missing a word")]
    MissingWord { category: usize },

    #[error("category {category} is missing a name")]
    MissingName { category: usize },

    #[error("word '{word}' appears in more than one category")]
    DuplicateWord { word: Word },

    #[error("failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),

    #[error("no built-in puzzle #{0}")]
    UnknownBuiltin(usize),
}

/// A complete puzzle: four categories plus optional title and author
#[derive(Debug, Clone)]
pub struct Puzzle {
    title: String,
    author: String,
    categories: [Category; CATEGORY_COUNT],
    lookup: FxHashMap<Word, CategoryIndex>,
}

impl Puzzle {
    /// Build a puzzle from its categories
    ///
    /// # Errors
    /// Returns `PuzzleError::DuplicateWord` if any word belongs to more than
    /// one category (or appears twice in the same one).
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        categories: [Category; CATEGORY_COUNT],
    ) -> Result<Self, PuzzleError> {
        let mut lookup = FxHashMap::default();

        for (index, category) in CategoryIndex::ALL.into_iter().zip(&categories) {
            for word in category.words() {
                if lookup.insert(word.clone(), index).is_some() {
                    return Err(PuzzleError::DuplicateWord { word: word.clone() });
                }
            }
        }

        Ok(Self {
            title: title.into(),
            author: author.into(),
            categories,
            lookup,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub const fn categories(&self) -> &[Category; CATEGORY_COUNT] {
        &self.categories
    }

    /// Get a category by identity
    #[must_use]
    pub const fn category(&self, index: CategoryIndex) -> &Category {
        &self.categories[index.get()]
    }

    /// Look up which category holds `word`
    #[inline]
    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<CategoryIndex> {
        self.lookup.get(word).copied()
    }

    /// All sixteen words in definition order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.categories.iter().flat_map(|c| c.words().iter())
    }
}
