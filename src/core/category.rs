//! Category identity and membership
//!
//! A puzzle has exactly four categories. Their position in the definition is
//! their identity: it picks the row colour and the share-text emoji, and it is
//! never re-derived from a category's name or words.

use super::Word;
use std::fmt;

/// Number of categories in a puzzle
pub const CATEGORY_COUNT: usize = 4;

/// Number of words in each category (and in each guess)
pub const GROUP_SIZE: usize = 4;

/// Identity of a category (0-3), in definition order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryIndex(u8);

impl CategoryIndex {
    /// All category indices in definition order
    pub const ALL: [Self; CATEGORY_COUNT] = [Self(0), Self(1), Self(2), Self(3)];

    /// Create an index, or `None` if `value` is not in 0..4
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < CATEGORY_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Position of the category in the definition
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CategoryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

/// A set of category indices, stored as a 4-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    /// Every category
    pub const FULL: Self = Self(0b1111);

    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a category; returns `false` if it was already present
    pub const fn insert(&mut self, index: CategoryIndex) -> bool {
        let bit = 1 << index.0;
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[must_use]
    pub const fn contains(self, index: CategoryIndex) -> bool {
        self.0 & (1 << index.0) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == Self::FULL.0
    }

    /// Members in ascending index order
    pub fn iter(self) -> impl Iterator<Item = CategoryIndex> {
        CategoryIndex::ALL
            .into_iter()
            .filter(move |&index| self.contains(index))
    }
}

impl FromIterator<CategoryIndex> for CategorySet {
    fn from_iter<I: IntoIterator<Item = CategoryIndex>>(iter: I) -> Self {
        let mut set = Self::empty();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

/// One hidden group of four words sharing a theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    words: [Word; GROUP_SIZE],
}

impl Category {
    /// Create a category; words are ordered case-insensitively
    #[must_use]
    pub fn new(name: impl Into<String>, mut words: [Word; GROUP_SIZE]) -> Self {
        words.sort_by(Word::alphabetical);
        Self {
            name: name.into(),
            words,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn words(&self) -> &[Word; GROUP_SIZE] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}
