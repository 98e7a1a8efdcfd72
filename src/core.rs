//! Core types and key abstractions for Shelfsort.
//!
//! This module defines:
//! - [`Record`]: A single `(title, author)` catalog entry.
//! - [`fold_key`]: The one normalisation shared by sorting, searching and author de-duplication.
//! - [`Keyed`] / [`KeyAccessor`]: The traits the sort and search algorithms are generic over.

use std::collections::VecDeque;
use std::fmt;

/// Folds an author string into its comparison key.
///
/// Every ordering and equality decision in this crate goes through this function;
/// sort keys and query keys must be folded identically for the binary searches to hold.
///
/// ```
/// use shelfsort::core::fold_key;
///
/// assert_eq!(fold_key("Frank HERBERT"), "frank herbert");
/// ```
#[inline]
pub fn fold_key(author: &str) -> String {
    author.to_lowercase()
}

/// A single catalog entry.
///
/// The folded author key is computed once at construction; the original casing of
/// both fields is kept for display.
#[derive(Clone, Debug)]
pub struct Record {
    title: String,
    author: String,
    key: String,
}

impl Record {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        let title = title.into();
        let author = author.into();
        let key = fold_key(&author);
        Self { title, author, key }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// The case-folded author used for ordering.
    pub fn author_key(&self) -> &str {
        &self.key
    }
}

// Equality is by value of the displayed fields; the key is derived from `author`.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.author == other.author
    }
}

impl Eq for Record {}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// An item that exposes an already-folded sort key.
///
/// Implementors must return a key produced by [`fold_key`].
pub trait Keyed {
    fn sort_key(&self) -> &str;
}

impl Keyed for Record {
    #[inline]
    fn sort_key(&self) -> &str {
        &self.key
    }
}

impl<T: Keyed + ?Sized> Keyed for &T {
    #[inline]
    fn sort_key(&self) -> &str {
        (**self).sort_key()
    }
}

/// A trait for accessing sort keys from a collection by index.
///
/// The sort and search routines only ever need "the key at position `i`" and the
/// collection length, so they work over anything that can answer those two
/// questions without being handed owned records.
///
/// # Examples
///
/// Implementing for a column-oriented store:
///
/// ```
/// use shelfsort::core::{fold_key, KeyAccessor};
///
/// struct AuthorColumn {
///     folded: Vec<String>,
/// }
///
/// impl KeyAccessor for AuthorColumn {
///     fn get_key(&self, index: usize) -> &str {
///         &self.folded[index]
///     }
///
///     fn len(&self) -> usize {
///         self.folded.len()
///     }
/// }
///
/// let column = AuthorColumn {
///     folded: vec![fold_key("Orwell"), fold_key("Asimov")],
/// };
/// assert_eq!(shelfsort::merge_sort(&column), vec![1, 0]);
/// ```
pub trait KeyAccessor {
    /// Returns the folded key at the given index.
    fn get_key(&self, index: usize) -> &str;

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Keyed> KeyAccessor for [T] {
    fn get_key(&self, index: usize) -> &str {
        self[index].sort_key()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to avoid `.as_slice()` at call sites.
impl<T: Keyed> KeyAccessor for Vec<T> {
    fn get_key(&self, index: usize) -> &str {
        self[index].sort_key()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: Keyed> KeyAccessor for VecDeque<T> {
    fn get_key(&self, index: usize) -> &str {
        self[index].sort_key()
    }

    fn len(&self) -> usize {
        self.len()
    }
}
