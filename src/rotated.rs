//! Minimum (rotation point) of a rotated sorted sequence.
//!
//! A rotated sequence is a sorted sequence whose elements were
//! cyclically shifted, e.g., `[4, 5, 6, 7, 0, 1, 2]` for
//! `[0, 1, 2, 4, 5, 6, 7]`.  The rotation count is the index where
//! the original first (minimum) element ended up, 4 in the example.
use std::cmp::Ordering;

use crate::locate;
use crate::Sequence;

/// Returns the index of the minimum element in a rotation of a
/// strictly ascending sequence, or [`None`] if the sequence is empty.
///
/// Every element up to the rotation point is greater than the last
/// element, and every element from the rotation point on is less
/// than or equal to it: the rotation point is the boundary of the
/// predicate `seq[i] <= seq[n - 1]`.  When the sequence isn't rotated
/// at all, that predicate is true everywhere and the result is 0.
///
/// This operation takes \\(\mathcal{O}(\log n)\\) time.
///
/// ```
/// use boundary_search::rotated_min_index;
///
/// assert_eq!(rotated_min_index(&[4, 5, 6, 7, 0, 1, 2]), Some(4));
/// assert_eq!(rotated_min_index(&[0, 1, 2, 4, 5, 6, 7]), Some(0));
/// ```
pub fn rotated_min_index<S: Sequence + ?Sized>(seq: &S) -> Option<usize> {
    #[cfg(feature = "internal_checks")]
    assert!(crate::preconditions::is_rotated_ascending(seq));

    let last_idx = seq.len().checked_sub(1)?;
    let last = seq.at(last_idx);

    // The last element always satisfies the predicate, no need to
    // evaluate it.
    Some(locate(last_idx, |idx| seq.at(idx) <= last))
}

/// Returns the number of positions by which a strictly ascending
/// sequence was rotated to produce `seq`, i.e., the index of its
/// minimum element.  An empty sequence isn't rotated.
#[inline(always)]
pub fn rotation_count<S: Sequence + ?Sized>(seq: &S) -> usize {
    rotated_min_index(seq).unwrap_or(0)
}

/// Returns the minimum element of a rotation of a strictly ascending
/// sequence, or [`None`] if the sequence is empty.
#[inline(always)]
pub fn rotated_min<S: Sequence + ?Sized>(seq: &S) -> Option<&S::Item> {
    rotated_min_index(seq).map(|idx| seq.at(idx))
}

/// Returns the index of a minimum element in a rotation of a sequence
/// sorted in non-descending order (duplicates allowed), or [`None`] if
/// the sequence is empty.
///
/// With duplicates, comparing the midpoint against the upper end of
/// the search interval may be inconclusive (they're equal); we then
/// only know the upper end can be dropped, since the midpoint is an
/// equal candidate.  That degrades the worst case (e.g., all elements
/// equal) to \\(\mathcal{O}(n)\\) time.
///
/// When the minimum value occurs more than once, the returned index
/// is not necessarily the rotation point.
pub fn rotated_min_index_with_duplicates<S: Sequence + ?Sized>(seq: &S) -> Option<usize> {
    #[cfg(feature = "internal_checks")]
    assert!(crate::preconditions::is_rotated_non_descending(seq));

    let mut low = 0usize;
    let mut high = seq.len().checked_sub(1)?;

    while low < high {
        let mid = low + (high - low) / 2;
        match seq.at(mid).cmp(seq.at(high)) {
            // The rotation point is strictly after `mid`.
            Ordering::Greater => low = mid + 1,
            // `mid..=high` is sorted, the minimum is at or before `mid`.
            Ordering::Less => high = mid,
            // `mid < high`, and `seq[mid]` is just as small as `seq[high]`.
            Ordering::Equal => high -= 1,
        }
    }

    Some(low)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod test {
    use super::*;
    use proptest::collection::btree_set;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    #[test]
    fn test_smoke() {
        let values = [4, 5, 6, 7, 0, 1, 2];

        assert_eq!(rotated_min_index(&values), Some(4));
        assert_eq!(rotated_min(&values), Some(&0));
        assert_eq!(rotation_count(&values), 4);
        assert_eq!(rotated_min_index_with_duplicates(&values), Some(4));

        assert_eq!(rotated_min_index(&[3, 4, 5, 1, 2]), Some(3));
        assert_eq!(rotated_min_index(&[2, 1]), Some(1));
        assert_eq!(rotated_min_index(&[1, 2]), Some(0));
        assert_eq!(rotated_min_index(&[7]), Some(0));
        assert_eq!(rotated_min_index(&[11, 13, 15, 17]), Some(0));
    }

    #[test]
    fn test_empty() {
        let empty: [i32; 0] = [];

        assert_eq!(rotated_min_index(&empty), None);
        assert_eq!(rotated_min(&empty), None);
        assert_eq!(rotation_count(&empty), 0);
        assert_eq!(rotated_min_index_with_duplicates(&empty), None);
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(rotated_min_index_with_duplicates(&[2, 2, 2, 0, 1]), Some(3));
        assert_eq!(rotated_min_index_with_duplicates(&[1, 3, 5]), Some(0));
        assert_eq!(rotated_min_index_with_duplicates(&[3, 3, 1, 3]), Some(2));
        assert!(rotated_min_index_with_duplicates(&[1, 1, 1, 1]).is_some());

        // Equal endpoints confuse the plain version, not this one.
        let tricky = [1, 1, 1, 0, 1];
        assert_eq!(rotated_min_index_with_duplicates(&tricky), Some(3));
        let tricky = [1, 0, 1, 1, 1];
        assert_eq!(rotated_min_index_with_duplicates(&tricky), Some(1));
    }

    #[test]
    fn test_ring_buffer() {
        // A ring buffer that was filled from both ends.
        let mut ring: VecDeque<u32> = VecDeque::new();
        for x in 10..20 {
            ring.push_back(x);
        }
        for x in (5..10).rev() {
            ring.push_front(x);
        }

        assert_eq!(rotated_min_index(&ring), Some(0));
        ring.rotate_right(3);
        assert_eq!(rotated_min_index(&ring), Some(3));
        assert_eq!(rotated_min(&ring), Some(&5));
    }

    proptest::proptest! {
        #[test]
        fn test_rotation_round_trip(values in btree_set(any::<i16>(), 1..64), shift in any::<usize>()) {
            let mut values: Vec<i16> = values.into_iter().collect();
            let min = values[0];
            let shift = shift % values.len();

            // Shifting right by `shift` moves the minimum to index `shift`.
            values.rotate_right(shift);

            assert_eq!(rotated_min_index(&values), Some(shift));
            assert_eq!(rotation_count(&values), shift);
            assert_eq!(rotated_min(&values), Some(&min));
            assert_eq!(rotated_min_index_with_duplicates(&values), Some(shift));
        }

        #[test]
        fn test_duplicates_min(values in vec(0u8..8, 1..64), shift in any::<usize>()) {
            let mut values = values;
            values.sort();
            let min = values[0];
            let shift = shift % values.len();
            values.rotate_right(shift);

            let idx = rotated_min_index_with_duplicates(&values).expect("non-empty");
            assert_eq!(values[idx], min);
        }
    }
}
