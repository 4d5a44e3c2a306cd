//! The boundary locator: every search in this crate reduces to
//! finding the first index where a monotonic predicate flips from
//! `false` to `true`.
use std::ops::Range;

/// Returns the smallest index `i` in `0..=len` such that
/// `predicate(i)` is true, or `len` if the predicate is false
/// everywhere in `0..len`.
///
/// The predicate must be monotonic over `0..len`: all the `false`
/// values come before all the `true` values.  That's not checked;
/// a non-monotonic predicate yields some index in `0..=len` where
/// `predicate(i - 1)` (if evaluated) was false and `predicate(i)` (if
/// evaluated) was true.
///
/// This operation evaluates the predicate \\(\lceil \log_2 (\mathtt{len} + 1) \rceil\\)
/// times or fewer, and never with an index outside `0..len`.  In
/// particular, `locate(0, _)` returns 0 without calling `predicate`.
///
/// ```
/// let values = [1, 2, 4, 4, 5, 6, 8];
/// assert_eq!(boundary_search::locate(values.len(), |i| values[i] >= 4), 2);
/// assert_eq!(boundary_search::locate(values.len(), |i| values[i] > 8), 7);
/// ```
#[inline(always)]
pub fn locate(len: usize, predicate: impl FnMut(usize) -> bool) -> usize {
    locate_in(0..len, predicate)
}

/// Returns the smallest index `i` in `range.start..=range.end` such
/// that `predicate(i)` is true, or `range.end` if the predicate is
/// false everywhere in `range`.
///
/// Same contract as [`locate`], restricted to the half-open index
/// range `range`.  An empty (or inverted) `range` returns
/// `range.start` without calling `predicate`.
#[inline(always)]
pub fn locate_in(range: Range<usize>, mut predicate: impl FnMut(usize) -> bool) -> usize {
    let Range {
        start: mut low,
        end: mut high,
    } = range;

    // `low < high` and `high = mid` (not `mid - 1`): the interval
    // shrinks on every iteration, and collapses to the answer.
    while low < high {
        // Never `(low + high) / 2`, which overflows near `usize::MAX`.
        let mid = low + (high - low) / 2;
        if predicate(mid) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    low
}

/// Returns the largest index `i` in `0..len` such that `predicate(i)`
/// is true, or [`None`] if there is no such index.
///
/// This is the mirror image of [`locate`]: the predicate must be true
/// on a prefix of `0..len` and false on the remaining suffix.
#[inline(always)]
pub fn locate_last(len: usize, mut predicate: impl FnMut(usize) -> bool) -> Option<usize> {
    locate(len, |idx| !predicate(idx)).checked_sub(1)
}

/// Returns the number of linear probes [`locate_from`] tries before
/// switching to binary search on a sequence of `len` elements.
#[inline(always)]
fn compute_linear_work_factor(len: usize) -> usize {
    const MIN_LINEAR_WORK: usize = 8;
    const LINEAR_WORK_MASK: usize = (1usize << (1 + MIN_LINEAR_WORK / 2)) - 1;
    const _: () = assert!(LINEAR_WORK_MASK.count_ones() as usize == 1 + MIN_LINEAR_WORK / 2);

    2 * (len | LINEAR_WORK_MASK).ilog2() as usize
}

/// Returns the same index as [`locate`], given a `hint` such that
/// `predicate(i)` is known to be false for all `i < hint`.
///
/// The search first scans linearly from `hint` for a logarithmic
/// number of steps, then falls back to a binary search of the
/// remainder.  Repeated searches with non-decreasing predicates
/// (e.g., lower bounds for sorted queries) can thus feed each result
/// back as the next hint, and take time linear in the distance
/// between consecutive results, but never more than
/// \\(\mathcal{O}(\log \mathtt{len})\\).
///
/// A `hint` greater than `len` is clamped to `len`.
#[inline(never)]
pub fn locate_from(len: usize, hint: usize, mut predicate: impl FnMut(usize) -> bool) -> usize {
    let hint = hint.min(len);
    let linear_work_factor = compute_linear_work_factor(len);
    let linear_stop = hint.saturating_add(linear_work_factor).min(len);

    for idx in hint..linear_stop {
        if predicate(idx) {
            return idx;
        }
    }

    locate_in(linear_stop..len, predicate)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod test {
    use super::*;

    fn naive_locate(len: usize, predicate: impl Fn(usize) -> bool) -> usize {
        (0..len).find(|idx| predicate(*idx)).unwrap_or(len)
    }

    #[test]
    fn test_empty() {
        let mut calls = 0;
        assert_eq!(
            locate(0, |_| {
                calls += 1;
                true
            }),
            0
        );
        assert_eq!(calls, 0);

        assert_eq!(locate_in(5..5, |_| panic!("should not be called")), 5);
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = 7..3;
        assert_eq!(locate_in(inverted, |_| panic!("should not be called")), 7);
        assert_eq!(locate_last(0, |_| panic!("should not be called")), None);
    }

    #[test]
    fn test_smoke() {
        let values = [1u8, 2, 4, 4, 5, 6, 8];

        assert_eq!(locate(values.len(), |i| values[i] >= 4), 2);
        assert_eq!(locate(values.len(), |i| values[i] > 4), 4);
        assert_eq!(locate(values.len(), |i| values[i] >= 0), 0);
        assert_eq!(locate(values.len(), |i| values[i] > 8), values.len());

        assert_eq!(locate_in(3..values.len(), |i| values[i] >= 4), 3);
        assert_eq!(locate_in(0..2, |i| values[i] >= 4), 2);

        assert_eq!(locate_last(values.len(), |i| values[i] <= 4), Some(3));
        assert_eq!(locate_last(values.len(), |i| values[i] < 1), None);
        assert_eq!(locate_last(values.len(), |i| values[i] <= 8), Some(6));
    }

    #[test]
    fn test_no_overflow() {
        // A naive midpoint would wrap around here.
        let end = usize::MAX;
        let flip = usize::MAX - 3;
        assert_eq!(locate_in(end - 100..end, |i| i >= flip), flip);
        assert_eq!(locate(end, |i| i >= flip), flip);
        assert_eq!(locate(end, |_| false), end);
    }

    #[test]
    fn test_probe_count() {
        for len in 0..200usize {
            for flip in 0..=len {
                let mut calls = 0usize;
                let ret = locate(len, |i| {
                    assert!(i < len);
                    calls += 1;
                    i >= flip
                });

                assert_eq!(ret, flip);
                assert!(calls <= (len + 1).next_power_of_two().ilog2() as usize);
            }
        }
    }

    #[test]
    fn test_work_factor() {
        assert_eq!(compute_linear_work_factor(0), 8);
        for i in 0..32 {
            assert_eq!(compute_linear_work_factor(i), 8);
        }

        assert_eq!(compute_linear_work_factor(32), 10);
        assert_eq!(compute_linear_work_factor(33), 10);
        assert_eq!(compute_linear_work_factor(256), 16);
        assert_eq!(compute_linear_work_factor(usize::MAX), 126);
    }

    #[test]
    fn test_locate_from_bad_hint() {
        assert_eq!(locate_from(10, 100, |i| i >= 3), 10);
        assert_eq!(locate_from(0, 0, |_| panic!("should not be called")), 0);
    }

    proptest::proptest! {
        #[test]
        fn test_locate_matches_naive(len in 0usize..512, flip in 0usize..600) {
            let predicate = |i: usize| i >= flip;
            let expected = naive_locate(len, predicate);

            assert_eq!(locate(len, predicate), expected);
            assert_eq!(locate_last(len, |i| i < flip), expected.checked_sub(1));

            // Boundary property: false strictly before, true from the result on.
            let ret = locate(len, predicate);
            assert!((0..ret).all(|i| !predicate(i)));
            assert!((ret..len).all(predicate));
        }

        #[test]
        fn test_locate_in_matches_naive(start in 0usize..256, width in 0usize..256, flip in 0usize..600) {
            let end = start + width;
            let expected = (start..end).find(|i| *i >= flip).unwrap_or(end);

            assert_eq!(locate_in(start..end, |i| {
                assert!((start..end).contains(&i));
                i >= flip
            }), expected);
        }

        #[test]
        fn test_locate_from(len in 0usize..512, hint in 0usize..512, flip in 0usize..600) {
            // The hint must not skip past the boundary.
            let hint = hint.min(flip).min(len);
            let expected = naive_locate(len, |i| i >= flip);

            assert_eq!(locate_from(len, hint, |i| {
                assert!(i >= hint && i < len);
                i >= flip
            }), expected);
        }
    }
}
