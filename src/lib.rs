//! # Shelfsort
//!
//! `shelfsort` is a small in-memory book catalog. It loads `title,author` lines, orders the
//! records by author with a stable bottom-up merge sort, and answers "all books by author X"
//! with two binary searches over the sorted snapshot.
//!
//! ## Key Features
//!
//! - **Case-insensitive, stable ordering**: Records are ordered by their lower-cased author.
//!   Records by the same author keep the order they were loaded in.
//! - **Range queries**: A lookup costs two O(log n) binary searches, independent of how many
//!   books match, and returns a borrowed slice of the snapshot.
//! - **Forgiving loading**: Malformed lines and missing files are logged through `tracing`
//!   and skipped; a bad source degrades to an empty catalog rather than an error.
//! - **Atomic reload**: [`SharedCatalog`] publishes rebuilt catalogs with a single pointer
//!   swap, so concurrent readers never see a half-updated catalog.
//!
//! ## Usage
//!
//! ```rust
//! use shelfsort::Catalog;
//!
//! let catalog = Catalog::from_lines([
//!     "Dune,Frank Herbert",
//!     "1984,George Orwell",
//!     "Children of Dune,frank herbert",
//! ]);
//!
//! assert_eq!(catalog.authors(), ["Frank Herbert", "George Orwell"]);
//!
//! let outcome = catalog.search("FRANK HERBERT");
//! assert_eq!(outcome.header, "2 books by author 'FRANK HERBERT':");
//! assert_eq!(outcome.details, "Dune by Frank Herbert\nChildren of Dune by frank herbert");
//! ```
//!
//! ### Custom Collections
//!
//! The sort and search primitives are generic over [`KeyAccessor`], so they can run over
//! any indexable store of pre-folded keys, not just `Vec<Record>`.
//!
//! ## Performance Characteristics
//!
//! - **Sort**: O(n log n) comparisons, one auxiliary buffer of `n` indices.
//! - **Search**: O(log n) to locate the range, O(k) to render `k` matches.
//! - **Memory Overhead**: Each record caches its folded author key, so keys are never
//!   re-folded during sorting or searching.

pub mod algo;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod search;

pub use algo::{merge_sort, sort_records};
pub use catalog::{Catalog, SearchOutcome, SharedCatalog};
pub use config::Config;
pub use self::core::{KeyAccessor, Keyed, Record};
pub use error::{Error, Result};
pub use search::find_range;

pub mod prelude {
    pub use crate::algo::{merge_sort, sort_records};
    pub use crate::catalog::{Catalog, SearchOutcome, SharedCatalog};
    pub use crate::core::{KeyAccessor, Keyed, Record, fold_key};
    pub use crate::search::{equal_range, find_range, lower_bound, upper_bound};
}
