//! Stable bottom-up merge sort over folded author keys.
//!
//! The sort starts with runs of width 1 and repeatedly merges adjacent runs into runs of
//! twice the width until a single run covers the whole input. Merging is left-biased:
//! when the two heads compare equal the element from the left run is taken first, which
//! keeps records with equal keys in their input order.
//!
//! The main entry points are [`merge_sort`] (index-based) and [`sort_records`] (copying).

use crate::core::{KeyAccessor, Keyed};

/// Computes the stable sorted order of the provided collection.
///
/// This function does not modify the input collection. Instead, it returns a `Vec<usize>`
/// of indices such that walking the collection in that order yields non-decreasing keys,
/// and indices of equal keys appear in increasing order.
///
/// Runs in O(n log n) comparisons with one auxiliary buffer of `n` indices.
///
/// # Examples
///
/// ```
/// use shelfsort::{merge_sort, Record};
///
/// let data = vec![
///     Record::new("1984", "George Orwell"),
///     Record::new("Dune", "Frank Herbert"),
///     Record::new("Foundation", "Isaac Asimov"),
/// ];
///
/// assert_eq!(merge_sort(&data), vec![1, 0, 2]);
/// ```
pub fn merge_sort<K: KeyAccessor + ?Sized>(provider: &K) -> Vec<usize> {
    let len = provider.len();
    let mut current: Vec<usize> = (0..len).collect();
    if len <= 1 {
        return current;
    }

    let mut scratch = vec![0usize; len];
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge_runs(
                provider,
                &current[start..mid],
                &current[mid..end],
                &mut scratch[start..end],
            );
            start = end;
        }
        std::mem::swap(&mut current, &mut scratch);
        width *= 2;
    }

    current
}

/// Sorts records by folded author, returning a new vector.
///
/// The input slice is left untouched. Inputs of length 0 or 1 come back as a plain copy.
///
/// ```
/// use shelfsort::{sort_records, Record};
///
/// let books = vec![
///     Record::new("Dune", "frank herbert"),
///     Record::new("Children of Dune", "Frank Herbert"),
///     Record::new("Emma", "Austen"),
/// ];
/// let sorted = sort_records(&books);
///
/// assert_eq!(sorted[0].title(), "Emma");
/// assert_eq!(sorted[1].title(), "Dune");
/// assert_eq!(sorted[2].title(), "Children of Dune");
/// ```
pub fn sort_records<T: Keyed + Clone>(records: &[T]) -> Vec<T> {
    if records.len() <= 1 {
        return records.to_vec();
    }

    merge_sort(records)
        .into_iter()
        .map(|index| records[index].clone())
        .collect()
}

/// Returns `true` if every adjacent pair of keys is non-decreasing.
pub fn is_sorted_by_key<K: KeyAccessor + ?Sized>(provider: &K) -> bool {
    (1..provider.len()).all(|i| provider.get_key(i - 1) <= provider.get_key(i))
}

/// Merges two sorted runs of indices into `out`.
///
/// `out.len()` must equal `left.len() + right.len()`.
#[inline]
fn merge_runs<K: KeyAccessor + ?Sized>(
    provider: &K,
    left: &[usize],
    right: &[usize],
    out: &mut [usize],
) {
    debug_assert_eq!(out.len(), left.len() + right.len());

    let (mut l, mut r, mut o) = (0, 0, 0);
    while l < left.len() && r < right.len() {
        // `<=` takes from the left run on ties.
        if provider.get_key(left[l]) <= provider.get_key(right[r]) {
            out[o] = left[l];
            l += 1;
        } else {
            out[o] = right[r];
            r += 1;
        }
        o += 1;
    }

    let rest_left = &left[l..];
    out[o..o + rest_left.len()].copy_from_slice(rest_left);
    o += rest_left.len();

    let rest_right = &right[r..];
    out[o..o + rest_right.len()].copy_from_slice(rest_right);
}
