//! Find the only unpaired element in a sorted sequence where every
//! other value occurs exactly twice, e.g., `[1, 1, 2, 3, 3, 4, 4]`.
//!
//! Before the single element, each pair starts at an even index; from
//! the single element on, pairs start at odd indices.  Looking at even
//! indices `2k` only, the predicate "`seq[2k]` doesn't start a pair"
//! is thus monotonic in `k`, and its boundary is the single element.
use crate::locate;
use crate::Sequence;

/// Returns the index of the single unpaired element in `seq`, or
/// [`None`] if `seq` is empty.
///
/// The sequence must be sorted, with every value occurring exactly
/// twice, except for exactly one value that occurs once (so `seq.len()`
/// is odd).  When that's not the case, the result is arbitrary, but
/// always in bounds, or [`None`].
///
/// This operation takes \\(\mathcal{O}(\log n)\\) time.
pub fn find_single_index<S: Sequence + ?Sized>(seq: &S) -> Option<usize> {
    #[cfg(feature = "internal_checks")]
    assert!(seq.is_empty() || crate::preconditions::is_paired_but_one(seq));

    let len = seq.len();
    // Only test "pair slots" `k`, i.e., even candidate indices `2k`,
    // where `2k + 1` is in bounds.  If every such slot holds a pair,
    // the single element is the last one.
    let slot = locate(len / 2, |k| seq.at(2 * k) != seq.at(2 * k + 1));
    let idx = 2 * slot;

    if idx < len {
        Some(idx)
    } else {
        None
    }
}

/// Returns the single unpaired element in `seq`, or [`None`] if `seq`
/// is empty.  See [`find_single_index`] for the preconditions.
///
/// ```
/// use boundary_search::find_single;
///
/// assert_eq!(find_single(&[1, 1, 2, 3, 3, 4, 4, 8, 8]), Some(&2));
/// ```
#[inline(always)]
pub fn find_single<S: Sequence + ?Sized>(seq: &S) -> Option<&S::Item> {
    find_single_index(seq).map(|idx| seq.at(idx))
}
