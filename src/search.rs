//! Binary-search range lookups over a key-sorted collection.
//!
//! All functions here assume the collection is sorted by [`merge_sort`](crate::merge_sort)'s
//! ordering. On unsorted input they still terminate and stay in bounds, but the
//! returned range is meaningless.

use std::ops::Range;

use crate::core::{KeyAccessor, Keyed, fold_key};

/// Smallest index whose key is `>= key`, or `len` if there is none.
///
/// `key` must already be folded.
pub fn lower_bound<K: KeyAccessor + ?Sized>(provider: &K, key: &str) -> usize {
    let (mut low, mut high) = (0, provider.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if provider.get_key(mid) < key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Smallest index whose key is `> key`, or `len` if there is none.
///
/// `key` must already be folded.
pub fn upper_bound<K: KeyAccessor + ?Sized>(provider: &K, key: &str) -> usize {
    let (mut low, mut high) = (0, provider.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if provider.get_key(mid) <= key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Half-open index range of entries whose key equals `query` after folding.
///
/// An empty query returns `0..0` without searching.
pub fn equal_range<K: KeyAccessor + ?Sized>(provider: &K, query: &str) -> Range<usize> {
    if query.is_empty() {
        return 0..0;
    }

    let key = fold_key(query);
    let start = lower_bound(provider, &key);
    let end = upper_bound(provider, &key).max(start);
    start..end
}

/// Returns the contiguous run of records whose author matches `query` case-insensitively.
///
/// Matches come back in their sorted order, so ties keep the order they were loaded in.
/// No match, or an empty query, yields an empty slice.
///
/// ```
/// use shelfsort::{find_range, sort_records, Record};
///
/// let sorted = sort_records(&[
///     Record::new("Dune", "Frank Herbert"),
///     Record::new("1984", "George Orwell"),
///     Record::new("Dune Messiah", "frank herbert"),
/// ]);
///
/// let found = find_range(&sorted, "FRANK HERBERT");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].title(), "Dune");
/// assert!(find_range(&sorted, "").is_empty());
/// ```
pub fn find_range<'a, T: Keyed>(sorted: &'a [T], query: &str) -> &'a [T] {
    &sorted[equal_range(sorted, query)]
}
