//! Exact-match search in a sorted sequence.  "Is `target` present" is
//! not a single monotonic boundary, so this is the one search that
//! doesn't go through [`crate::locate`]: it stops as soon as it hits
//! an equal element.
use std::cmp::Ordering;

use crate::Sequence;

/// Returns the index of some element equal to `target` in a sequence
/// sorted in non-descending order, or [`None`] if there is none.
///
/// When `target` occurs more than once, the index of any copy may be
/// returned; use [`crate::first_occurrence`] or
/// [`crate::last_occurrence`] to pin down a specific one.
///
/// This operation takes \\(\mathcal{O}(\log n)\\) time.
///
/// ```
/// use boundary_search::exact_search;
///
/// let values = [2, 5, 8, 12, 16, 23, 38, 45, 56, 67, 78];
/// assert_eq!(exact_search(&values, &23), Some(5));
/// assert_eq!(exact_search(&values, &100), None);
/// ```
pub fn exact_search<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> Option<usize> {
    #[cfg(feature = "internal_checks")]
    assert!(crate::preconditions::is_sorted_ascending(seq));

    // Half-open `[low, high)`: same probes as the inclusive
    // `[low, high - 1]` formulation, without underflow at `high = 0`.
    let mut low = 0usize;
    let mut high = seq.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match seq.at(mid).cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

/// Converts optional indices to the signed sentinel convention, where
/// `-1` means "not found".
///
/// The search functions in this crate return [`Option<usize>`]; this
/// trait is only for interoperating with code that expects sentinels.
pub trait SentinelIndex {
    /// Returns the index as an [`isize`], or `-1` for [`None`].
    ///
    /// Indices that don't fit in an [`isize`] can't come from a
    /// [`Sequence`] of non-zero-sized elements; they also map to `-1`.
    fn to_sentinel(self) -> isize;
}

impl SentinelIndex for Option<usize> {
    #[inline(always)]
    fn to_sentinel(self) -> isize {
        self.and_then(|idx| isize::try_from(idx).ok()).unwrap_or(-1)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod test {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn test_smoke() {
        let values = [2, 5, 8, 12, 16, 23, 38, 45, 56, 67, 78];

        assert_eq!(exact_search(&values, &23), Some(5));
        assert_eq!(exact_search(&values, &23).to_sentinel(), 5);
        assert_eq!(exact_search(&values, &100), None);
        assert_eq!(exact_search(&values, &100).to_sentinel(), -1);

        assert_eq!(exact_search(&values, &2), Some(0));
        assert_eq!(exact_search(&values, &78), Some(10));
        assert_eq!(exact_search(&values, &1), None);
        assert_eq!(exact_search(&values, &13), None);

        for (idx, value) in values.iter().enumerate() {
            assert_eq!(exact_search(&values, value), Some(idx));
        }
    }

    #[test]
    fn test_empty() {
        let empty: [u8; 0] = [];

        assert_eq!(exact_search(&empty, &0), None);
        assert_eq!(exact_search(&empty, &0).to_sentinel(), -1);
    }

    #[test]
    fn test_sentinel() {
        assert_eq!(Some(0usize).to_sentinel(), 0);
        assert_eq!(Some(isize::MAX as usize).to_sentinel(), isize::MAX);
        assert_eq!(Some(usize::MAX).to_sentinel(), -1);
        assert_eq!(None::<usize>.to_sentinel(), -1);
    }

    proptest::proptest! {
        #[test]
        fn test_exact_search(values in vec(any::<i8>(), 0..64), target in any::<i8>()) {
            let mut values = values;
            values.sort();

            match exact_search(&values, &target) {
                Some(idx) => assert_eq!(values[idx], target),
                None => assert!(!values.contains(&target)),
            }

            // The standard library agrees on presence.
            assert_eq!(exact_search(&values, &target).is_some(), values.binary_search(&target).is_ok());
        }
    }
}
