//! Exact-match search in a rotated sorted sequence.
//!
//! At any point, a rotated sequence has at most one rotation point,
//! so at least one half of the search interval around the midpoint is
//! sorted.  We can tell which by comparing the midpoint with the
//! endpoints, and then whether the target lies in the sorted half with
//! two more comparisons.
use crate::Sequence;

/// Where to continue looking after a miss at `mid`.
enum Step {
    Left,
    Right,
}

/// Picks the half of `[first..=pivot..=last]` that may contain
/// `target`, given that the interval is a rotated sorted run and that
/// `pivot != target`.
///
/// `first <= pivot` must mean the left half is sorted; the duplicate
/// tolerant search guarantees that by skipping the case where all
/// three are equal.
#[inline(always)]
fn step<T: Ord>(first: &T, pivot: &T, last: &T, target: &T) -> Step {
    if first <= pivot {
        // `first..=pivot` is sorted.
        if first <= target && target < pivot {
            Step::Left
        } else {
            Step::Right
        }
    } else {
        // The rotation point is in the left half, so `pivot..=last` is sorted.
        if pivot < target && target <= last {
            Step::Right
        } else {
            Step::Left
        }
    }
}

/// Returns the index of `target` in a rotation of a strictly
/// ascending sequence, or [`None`] if `target` is absent.
///
/// This operation takes \\(\mathcal{O}(\log n)\\) time.
///
/// ```
/// use boundary_search::rotated_search;
///
/// assert_eq!(rotated_search(&[4, 5, 6, 7, 0, 1, 2], &0), Some(4));
/// assert_eq!(rotated_search(&[4, 5, 6, 7, 0, 1, 2], &3), None);
/// ```
pub fn rotated_search<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> Option<usize> {
    #[cfg(feature = "internal_checks")]
    assert!(crate::preconditions::is_rotated_ascending(seq));

    // Half-open `[low, high)`; the inclusive upper end is `high - 1`.
    let mut low = 0usize;
    let mut high = seq.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let pivot = seq.at(mid);
        if pivot == target {
            return Some(mid);
        }

        match step(seq.at(low), pivot, seq.at(high - 1), target) {
            Step::Left => high = mid,
            Step::Right => low = mid + 1,
        }
    }

    None
}

/// Determines whether `target` occurs in a rotation of a sequence
/// sorted in non-descending order (duplicates allowed).
///
/// With duplicates, an element may occur on both sides of the
/// rotation point, so there is no unique answer index; this function
/// only reports presence.
///
/// When the midpoint and both endpoints are equal, we can't tell which
/// half is sorted, and can only shrink the interval by one element on
/// each side.  The worst case (e.g., all elements equal but one) thus
/// takes \\(\mathcal{O}(n)\\) time; the search is logarithmic when no
/// such tie occurs.
pub fn rotated_search_with_duplicates<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> bool {
    #[cfg(feature = "internal_checks")]
    assert!(crate::preconditions::is_rotated_non_descending(seq));

    let mut low = 0usize;
    let mut high = seq.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let pivot = seq.at(mid);
        if pivot == target {
            return true;
        }

        let first = seq.at(low);
        let last = seq.at(high - 1);
        if first == pivot && pivot == last {
            // Neither endpoint is `target` (they equal `pivot`).  Drops
            // `seq[low]` and `seq[high - 1]`, the inclusive ends.
            low += 1;
            high -= 1;
            continue;
        }

        match step(first, pivot, last, target) {
            Step::Left => high = mid,
            Step::Right => low = mid + 1,
        }
    }

    false
}
