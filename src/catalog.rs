//! The catalog facade: a sorted snapshot, its author index, and the query surface.
//!
//! A [`Catalog`] is immutable once built. The snapshot and the author index are always
//! built together and replaced together: [`SharedCatalog`] publishes a whole new
//! `Arc<Catalog>` with a single atomic store, so readers never pair a snapshot with a
//! stale author list.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::algo::{is_sorted_by_key, sort_records};
use crate::config::Config;
use crate::core::Record;
use crate::loader::{LoadReport, load_lines, load_path};
use crate::search::find_range;

pub const NO_AUTHORS_FOUND: &str = "No authors found.";
pub const NO_AUTHOR_SELECTED: &str = "No author selected.";
pub const NO_BOOKS_FOUND: &str = "No books found.";

/// Sorted records plus the de-duplicated author list derived from them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
    authors: Vec<String>,
}

impl Catalog {
    /// Sorts `records` and derives the author index.
    pub fn from_records(records: &[Record]) -> Self {
        let records = sort_records(records);
        debug_assert!(is_sorted_by_key(&records));
        let authors = distinct_authors(&records);
        tracing::debug!(
            records = records.len(),
            authors = authors.len(),
            "catalog built"
        );
        Self { records, authors }
    }

    pub fn from_report(report: &LoadReport) -> Self {
        Self::from_records(&report.records)
    }

    /// Loads, sorts and indexes in-memory lines.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::from_report(&load_lines(lines))
    }

    /// Builds a catalog from a file. A missing or unreadable file yields an empty catalog.
    pub fn open(path: &Path) -> Self {
        let report = load_path(path);
        let catalog = Self::from_report(&report);
        tracing::info!(
            path = %path.display(),
            records = catalog.len(),
            authors = catalog.authors.len(),
            rejected = report.rejected.len(),
            "catalog loaded"
        );
        catalog
    }

    pub fn from_config(config: &Config) -> Self {
        Self::open(&config.source)
    }

    /// The sorted snapshot.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct authors in first-sorted-occurrence order and casing.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records by `author`, matched case-insensitively. Empty for an empty name.
    pub fn find(&self, author: &str) -> &[Record] {
        find_range(&self.records, author)
    }

    /// Newline-joined author list, or [`NO_AUTHORS_FOUND`].
    pub fn list_authors(&self) -> String {
        if self.authors.is_empty() {
            NO_AUTHORS_FOUND.to_string()
        } else {
            self.authors.join("\n")
        }
    }

    /// Runs a display-ready author query.
    ///
    /// A missing or empty name is a no-op, not an error.
    ///
    /// ```
    /// use shelfsort::Catalog;
    ///
    /// let catalog = Catalog::from_lines(["Dune,Frank Herbert", "1984,George Orwell"]);
    ///
    /// let outcome = catalog.search("frank herbert");
    /// assert_eq!(outcome.header, "1 book by author 'frank herbert':");
    /// assert_eq!(outcome.details, "Dune by Frank Herbert");
    ///
    /// assert_eq!(catalog.search(None).header, "No author selected.");
    /// ```
    pub fn search<'a>(&self, author: impl Into<Option<&'a str>>) -> SearchOutcome {
        let author = match author.into() {
            Some(author) if !author.is_empty() => author,
            _ => return SearchOutcome::no_selection(),
        };

        let matches = self.find(author);
        let count = matches.len();
        let header = format!(
            "{count} book{} by author '{author}':",
            if count == 1 { "" } else { "s" }
        );
        let details = if matches.is_empty() {
            NO_BOOKS_FOUND.to_string()
        } else {
            matches
                .iter()
                .map(Record::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        };

        SearchOutcome {
            header,
            details,
            count,
        }
    }
}

/// Header and details text for one query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub header: String,
    pub details: String,
    pub count: usize,
}

impl SearchOutcome {
    fn no_selection() -> Self {
        Self {
            header: NO_AUTHOR_SELECTED.to_string(),
            details: String::new(),
            count: 0,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.details.is_empty() {
            write!(f, "{}", self.header)
        } else {
            write!(f, "{}\n{}", self.header, self.details)
        }
    }
}

/// One entry per case-insensitive author, keeping the casing seen first in sorted order.
fn distinct_authors(sorted: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    sorted
        .iter()
        .filter(|record| seen.insert(record.author_key()))
        .map(|record| record.author().to_string())
        .collect()
}

/// A catalog that can be swapped out while readers hold on to the previous one.
///
/// Reads are lock-free: [`snapshot`](Self::snapshot) pins the current `Arc<Catalog>`, and
/// a reader keeps seeing that catalog even if a reload publishes a new one meanwhile.
pub struct SharedCatalog {
    current: ArcSwap<Catalog>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: ArcSwap::from_pointee(catalog),
        }
    }

    /// The currently published catalog.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.load_full()
    }

    /// Publishes `catalog` and returns the one it replaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        self.current.swap(Arc::new(catalog))
    }

    /// Rebuilds from `path` and publishes the result.
    pub fn reload(&self, path: &Path) -> Arc<Catalog> {
        self.replace(Catalog::open(path))
    }

    pub fn list_authors(&self) -> String {
        self.current.load().list_authors()
    }

    pub fn search<'a>(&self, author: impl Into<Option<&'a str>>) -> SearchOutcome {
        self.current.load().search(author)
    }
}

impl Default for SharedCatalog {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl fmt::Debug for SharedCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.current.load();
        f.debug_struct("SharedCatalog")
            .field("records", &catalog.len())
            .field("authors", &catalog.authors.len())
            .finish()
    }
}
