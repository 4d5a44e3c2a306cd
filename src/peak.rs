//! Peak finding: a local maximum, where both logical neighbours
//! outside the sequence are treated as \\(-\infty\\).
use crate::locate;
use crate::Sequence;

/// Returns the index of a peak in `seq`: an element strictly greater
/// than its neighbours, where the missing neighbours of the first and
/// last elements are treated as \\(-\infty\\).  Returns [`None`] iff
/// `seq` is empty.
///
/// Adjacent elements must be distinct.  When there are multiple peaks,
/// any of them may be returned.
///
/// The predicate `seq[i] >= seq[i + 1]` ("descending at `i`") isn't
/// necessarily monotonic, but binary search for its first true value
/// still works: the search interval always contains a peak, since
/// `seq[low - 1] < seq[low]` (or `low == 0`) and the last index of
/// the interval is descending (or `n - 1`, with a \\(-\infty\\)
/// right neighbour).
///
/// This operation takes \\(\mathcal{O}(\log n)\\) time.
///
/// ```
/// use boundary_search::find_peak;
///
/// assert_eq!(find_peak(&[1, 2, 3, 1]), Some(2));
/// ```
pub fn find_peak<S: Sequence + ?Sized>(seq: &S) -> Option<usize> {
    #[cfg(feature = "internal_checks")]
    assert!(crate::preconditions::has_distinct_neighbors(seq));

    let last_idx = seq.len().checked_sub(1)?;
    let ret = locate(last_idx, |idx| seq.at(idx) >= seq.at(idx + 1));

    #[cfg(feature = "internal_checks")]
    assert!(is_peak(seq, ret));

    Some(ret)
}

/// Determines whether `idx` is a peak in `seq`: `seq[idx]` is strictly
/// greater than its neighbours, if any.
///
/// Returns false when `idx` is out of bounds.
pub fn is_peak<S: Sequence + ?Sized>(seq: &S, idx: usize) -> bool {
    let Some(value) = seq.get_at(idx) else {
        return false;
    };

    let left_ok = match idx.checked_sub(1) {
        Some(prev) => seq.at(prev) < value,
        None => true,
    };
    let right_ok = match seq.get_at(idx + 1) {
        Some(next) => value > next,
        None => true,
    };

    left_ok & right_ok
}
