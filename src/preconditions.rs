//! Linear-time checks for the preconditions of the logarithmic-time
//! searches.  The searches themselves never call these functions,
//! except to self-check when the `internal_checks` feature is enabled.
use crate::Sequence;

/// Determines whether the predicate is monotonic over `0..len`: once
/// `predicate(i)` is true, `predicate(j)` is true for all `j > i`.
///
/// This is the precondition of [`crate::locate`].  Checking it
/// evaluates the predicate exactly `len` times.
pub fn is_monotonic(len: usize, mut predicate: impl FnMut(usize) -> bool) -> bool {
    let mut seen_true = false;
    for idx in 0..len {
        let cur = predicate(idx);
        if seen_true & !cur {
            return false;
        }

        seen_true |= cur;
    }

    true
}

/// Determines whether the sequence is sorted in non-descending order,
/// the precondition for bound-style searches.
///
/// Checking this property takes time linear in the length of the sequence.
#[inline(always)]
pub fn is_sorted_ascending<S: Sequence + ?Sized>(seq: &S) -> bool {
    (1..seq.len()).all(|idx| seq.at(idx - 1) <= seq.at(idx))
}

/// Determines whether the sequence is a left rotation of a strictly
/// ascending sequence (i.e., without duplicates), the precondition for
/// [`crate::rotated_min_index`] and [`crate::rotated_search`].
///
/// An unrotated strictly ascending sequence is a rotation by zero.
///
/// Checking this property takes time linear in the length of the sequence.
pub fn is_rotated_ascending<S: Sequence + ?Sized>(seq: &S) -> bool {
    cyclic_descents(seq, |prev, cur| prev < cur) <= 1
}

/// Determines whether the sequence is a left rotation of a sequence
/// sorted in non-descending order (duplicates allowed), the
/// precondition for [`crate::rotated_search_with_duplicates`].
///
/// Checking this property takes time linear in the length of the sequence.
pub fn is_rotated_non_descending<S: Sequence + ?Sized>(seq: &S) -> bool {
    cyclic_descents(seq, |prev, cur| prev <= cur) <= 1
}

/// Counts the consecutive pairs of elements that are not `in_order`,
/// including the wrap-around pair from the last element to the first.
///
/// A rotation of a sorted sequence has at most one such pair.
#[inline(never)]
fn cyclic_descents<S: Sequence + ?Sized>(
    seq: &S,
    in_order: impl Fn(&S::Item, &S::Item) -> bool,
) -> usize {
    let len = seq.len();
    // A single element doesn't wrap around to itself.
    if len < 2 {
        return 0;
    }

    let mut descents = !in_order(seq.at(len - 1), seq.at(0)) as usize;
    for idx in 1..len {
        descents += !in_order(seq.at(idx - 1), seq.at(idx)) as usize;
    }

    descents
}

/// Determines whether no two adjacent elements are equal, the
/// precondition for [`crate::find_peak`].
///
/// Checking this property takes time linear in the length of the sequence.
#[inline(always)]
pub fn has_distinct_neighbors<S: Sequence + ?Sized>(seq: &S) -> bool {
    (1..seq.len()).all(|idx| seq.at(idx - 1) != seq.at(idx))
}

/// Determines whether the sequence is sorted, and every value occurs
/// exactly twice except for exactly one that occurs once: the
/// precondition for [`crate::find_single`].
///
/// Checking this property takes time linear in the length of the sequence.
pub fn is_paired_but_one<S: Sequence + ?Sized>(seq: &S) -> bool {
    if !is_sorted_ascending(seq) || seq.len() % 2 == 0 {
        return false;
    }

    let len = seq.len();
    let mut singles = 0usize;
    let mut idx = 0usize;
    while idx < len {
        let mut run = 1usize;
        while idx + run < len && seq.at(idx + run) == seq.at(idx) {
            run += 1;
        }

        match run {
            1 => singles += 1,
            2 => {}
            _ => return false,
        }

        idx += run;
    }

    singles == 1
}
