//! Bound-style searches in sequences sorted in non-descending order.
//! Each is a [`locate`] call with a one-line predicate.
//!
//! None of these functions check that the input is sorted (except
//! with `internal_checks`); on unsorted input, they return an
//! arbitrary index in `0..=seq.len()`, but never panic.
use std::ops::Range;

use crate::locate;
use crate::locate_from;
use crate::Sequence;

/// Returns the index of the first element greater than or equal to
/// `target`, or `seq.len()` if there is none.
///
/// This operation takes \\(\mathcal{O}(\log n)\\) time.
///
/// ```
/// use boundary_search::lower_bound;
///
/// assert_eq!(lower_bound(&[1, 2, 4, 4, 5, 6, 8], &4), 2);
/// assert_eq!(lower_bound(&[1, 2, 4, 4, 5, 6, 8], &9), 7);
/// ```
#[inline(always)]
pub fn lower_bound<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> usize {
    #[cfg(feature = "internal_checks")]
    assert!(crate::preconditions::is_sorted_ascending(seq));

    locate(seq.len(), |idx| seq.at(idx) >= target)
}

/// Returns the index of the first element strictly greater than
/// `target`, or `seq.len()` if there is none.
///
/// This operation takes \\(\mathcal{O}(\log n)\\) time.
#[inline(always)]
pub fn upper_bound<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> usize {
    #[cfg(feature = "internal_checks")]
    assert!(crate::preconditions::is_sorted_ascending(seq));

    locate(seq.len(), |idx| seq.at(idx) > target)
}

/// Returns the same value as [`lower_bound`], given a `hint` such that
/// all the elements before `hint` are less than `target`.
///
/// This is useful to look up a sorted batch of targets: feeding the
/// result for one target as the hint for the next makes each lookup
/// take time logarithmic in the distance from the previous result.
/// Invalid hints are detected in constant time and ignored.
pub fn lower_bound_from<S: Sequence + ?Sized>(seq: &S, target: &S::Item, hint: usize) -> usize {
    #[cfg(feature = "internal_checks")]
    assert!(crate::preconditions::is_sorted_ascending(seq));

    let len = seq.len();
    let hint = hint.min(len);
    // The element just before `hint` must be less than `target`.
    let hint = match hint.checked_sub(1) {
        Some(prev) if seq.at(prev) >= target => 0,
        _ => hint,
    };

    locate_from(len, hint, |idx| seq.at(idx) >= target)
}

/// Returns the index at which `target` should be inserted to keep
/// the sequence sorted.  Equal elements go before existing copies.
///
/// This is exactly [`lower_bound`].
#[inline(always)]
pub fn insert_position<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> usize {
    lower_bound(seq, target)
}

/// Returns the range of indices whose elements are equal to `target`.
///
/// The range is empty (but still positioned at the insertion point)
/// when `target` is absent.
#[inline(always)]
pub fn equal_range<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> Range<usize> {
    let start = lower_bound(seq, target);
    // Everything before `start` is less than `target`, so `upper_bound`
    // is in `start..=len`.
    let end = start + upper_bound_suffix(seq, start, target);
    start..end
}

/// Returns `upper_bound(&seq[start..], target)` for arbitrary [`Sequence`]s.
#[inline(always)]
fn upper_bound_suffix<S: Sequence + ?Sized>(seq: &S, start: usize, target: &S::Item) -> usize {
    crate::locate_in(start..seq.len(), |idx| seq.at(idx) > target) - start
}

/// Returns the index of the first element equal to `target`, if any.
#[inline(always)]
pub fn first_occurrence<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> Option<usize> {
    let idx = lower_bound(seq, target);
    if seq.get_at(idx)? == target {
        Some(idx)
    } else {
        None
    }
}

/// Returns the index of the last element equal to `target`, if any.
#[inline(always)]
pub fn last_occurrence<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> Option<usize> {
    first_and_last(seq, target).map(|(_, last)| last)
}

/// Returns the indices of the first and last elements equal to
/// `target`, if any.
pub fn first_and_last<S: Sequence + ?Sized>(
    seq: &S,
    target: &S::Item,
) -> Option<(usize, usize)> {
    let Range { start, end } = equal_range(seq, target);
    if start < end {
        Some((start, end - 1))
    } else {
        None
    }
}

/// Returns the number of elements equal to `target`.
///
/// Always equal to `upper_bound(seq, target) - lower_bound(seq, target)`.
#[inline(always)]
pub fn count_occurrences<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> usize {
    equal_range(seq, target).len()
}

/// Returns the number of elements in the closed interval `[lo, hi]`.
///
/// An inverted interval (`lo > hi`) is empty, and yields 0.
pub fn count_in_range<S: Sequence + ?Sized>(seq: &S, lo: &S::Item, hi: &S::Item) -> usize {
    if lo > hi {
        return 0;
    }

    // Saturate in case the input isn't actually sorted.
    upper_bound(seq, hi).saturating_sub(lower_bound(seq, lo))
}
