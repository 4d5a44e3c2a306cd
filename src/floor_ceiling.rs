//! Floor and ceiling queries: the closest elements on either side of
//! a target in a sorted sequence.
use crate::lower_bound;
use crate::Sequence;

/// Returns the index of the largest element less than or equal to
/// `target`, or [`None`] if every element is greater than `target`.
///
/// When `target` is present, this is the index of its first
/// occurrence.
pub fn floor_index<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> Option<usize> {
    let idx = lower_bound(seq, target);
    match seq.get_at(idx) {
        Some(hit) if hit == target => Some(idx),
        // Everything before `idx` is less than `target`.
        _ => idx.checked_sub(1),
    }
}

/// Returns the largest element less than or equal to `target`, or
/// [`None`] if there is no such element.
///
/// This operation takes \\(\mathcal{O}(\log n)\\) time.
#[inline(always)]
pub fn floor<'a, S: Sequence + ?Sized>(seq: &'a S, target: &S::Item) -> Option<&'a S::Item> {
    floor_index(seq, target).map(|idx| seq.at(idx))
}

/// Returns the index of the smallest element greater than or equal
/// to `target`, or [`None`] if every element is less than `target`.
#[inline(always)]
pub fn ceiling_index<S: Sequence + ?Sized>(seq: &S, target: &S::Item) -> Option<usize> {
    let idx = lower_bound(seq, target);
    if idx < seq.len() {
        Some(idx)
    } else {
        None
    }
}

/// Returns the smallest element greater than or equal to `target`,
/// or [`None`] if there is no such element.
///
/// This operation takes \\(\mathcal{O}(\log n)\\) time.
#[inline(always)]
pub fn ceiling<'a, S: Sequence + ?Sized>(seq: &'a S, target: &S::Item) -> Option<&'a S::Item> {
    ceiling_index(seq, target).map(|idx| seq.at(idx))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod test {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn test_smoke() {
        let values = [1, 2, 8, 10, 10, 12, 19];

        assert_eq!(floor(&values, &0), None);
        assert_eq!(ceiling(&values, &0), Some(&1));

        assert_eq!(floor(&values, &5), Some(&2));
        assert_eq!(ceiling(&values, &5), Some(&8));

        assert_eq!(floor(&values, &10), Some(&10));
        assert_eq!(floor_index(&values, &10), Some(3));
        assert_eq!(ceiling(&values, &10), Some(&10));
        assert_eq!(ceiling_index(&values, &10), Some(3));

        assert_eq!(floor(&values, &20), Some(&19));
        assert_eq!(floor_index(&values, &20), Some(6));
        assert_eq!(ceiling(&values, &20), None);
        assert_eq!(ceiling_index(&values, &20), None);
    }

    #[test]
    fn test_empty() {
        let empty: Vec<u8> = Vec::new();

        assert_eq!(floor(&empty, &0), None);
        assert_eq!(ceiling(&empty, &0), None);
        assert_eq!(floor_index(&empty, &0), None);
        assert_eq!(ceiling_index(&empty, &0), None);
    }

    #[test]
    fn test_strings() {
        let words = ["apple", "kiwi", "mango", "pear"];

        assert_eq!(floor(&words, &"banana"), Some(&"apple"));
        assert_eq!(ceiling(&words, &"banana"), Some(&"kiwi"));
        assert_eq!(ceiling(&words, &"zucchini"), None);
    }

    proptest::proptest! {
        #[test]
        fn test_bracketing(values in vec(any::<i8>(), 0..64), target in any::<i8>()) {
            let mut values = values;
            values.sort();

            let expected_floor = values.iter().rev().find(|x| **x <= target);
            let expected_ceiling = values.iter().find(|x| **x >= target);
            assert_eq!(floor(&values, &target), expected_floor);
            assert_eq!(ceiling(&values, &target), expected_ceiling);

            if let (Some(lo), Some(hi)) = (floor(&values, &target), ceiling(&values, &target)) {
                assert!(*lo <= target);
                assert!(target <= *hi);
                // Nothing strictly between floor and ceiling.
                assert!(!values.iter().any(|x| lo < x && x < hi));
            }
        }
    }
}
