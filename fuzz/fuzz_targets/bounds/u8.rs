#![no_main]

use boundary_search::*;

use libfuzzer_sys::fuzz_target;

// for W in u8 i32; do cp i32.rs $W.rs; sed -i -re "s/type T = [ui][0-9]+;/type T = $W;/" $W.rs; done

type T = u8;

fn check(values: &[T], target: T) {
    let len = values.len();
    let lower = lower_bound(values, &target);
    let upper = upper_bound(values, &target);

    // Independent linear scans.
    assert_eq!(lower, values.iter().position(|x| *x >= target).unwrap_or(len));
    assert_eq!(upper, values.iter().position(|x| *x > target).unwrap_or(len));

    assert_eq!(insert_position(values, &target), lower);
    assert_eq!(equal_range(values, &target), lower..upper);
    assert_eq!(count_occurrences(values, &target), upper - lower);
    assert_eq!(lower_bound_from(values, &target, lower / 2), lower);

    match exact_search(values, &target) {
        Some(idx) => assert_eq!(values[idx], target),
        None => assert_eq!(lower, upper),
    }

    if lower < upper {
        assert_eq!(first_occurrence(values, &target), Some(lower));
        assert_eq!(last_occurrence(values, &target), Some(upper - 1));
        assert_eq!(floor(values, &target), Some(&target));
        assert_eq!(ceiling(values, &target), Some(&target));
    } else {
        assert_eq!(first_occurrence(values, &target), None);
        assert_eq!(last_occurrence(values, &target), None);
        assert_eq!(floor(values, &target), lower.checked_sub(1).map(|idx| &values[idx]));
        assert_eq!(ceiling(values, &target), values.get(lower));
    }
}

fuzz_target!(|input: (Vec<T>, T, T)| {
    let (mut values, target, other) = input;
    values.sort();

    check(&values, target);
    check(&values, other);

    let (lo, hi) = (target.min(other), target.max(other));
    let expected = values.iter().filter(|x| (lo..=hi).contains(*x)).count();
    assert_eq!(count_in_range(&values, &lo, &hi), expected);
    assert_eq!(count_in_range(&values, &hi, &lo), (lo == hi) as usize * expected);

    // Same answers through the sorted container.
    let sorted = SortedVec::from_vec(values.clone());
    assert_eq!(sorted.inner(), &values[..]);
    assert_eq!(sorted.count_in_range(&lo, &hi), expected);
    assert_eq!(sorted.range(&lo, &hi).len(), expected);
});
