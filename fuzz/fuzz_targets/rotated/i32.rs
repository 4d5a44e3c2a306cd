#![no_main]

use boundary_search::*;

use libfuzzer_sys::fuzz_target;

type T = i32;

fn check_distinct(mut values: Vec<T>, shift: usize, target: T) {
    values.sort();
    values.dedup();
    let shift = if values.is_empty() {
        0
    } else {
        shift % values.len()
    };
    values.rotate_right(shift);

    assert!(preconditions::is_rotated_ascending(&values));
    assert_eq!(rotation_count(&values), shift);
    if !values.is_empty() {
        assert_eq!(rotated_min_index(&values), Some(shift));
        assert_eq!(rotated_min_index_with_duplicates(&values), Some(shift));
    }

    match rotated_search(&values, &target) {
        Some(idx) => assert_eq!(values[idx], target),
        None => assert!(!values.contains(&target)),
    }
    assert_eq!(
        rotated_search_with_duplicates(&values, &target),
        values.contains(&target)
    );
}

fn check_duplicates(mut values: Vec<T>, shift: usize, target: T) {
    // Squash the values so duplicates are common.
    for value in values.iter_mut() {
        *value %= 4;
    }
    let target = target % 5;

    values.sort();
    let min = values.first().copied();
    let shift = if values.is_empty() {
        0
    } else {
        shift % values.len()
    };
    values.rotate_right(shift);

    assert!(preconditions::is_rotated_non_descending(&values));
    assert_eq!(
        rotated_min_index_with_duplicates(&values).map(|idx| values[idx]),
        min
    );
    assert_eq!(
        rotated_search_with_duplicates(&values, &target),
        values.contains(&target)
    );
}

fuzz_target!(|input: (Vec<T>, usize, T)| {
    let (values, shift, target) = input;

    check_distinct(values.clone(), shift, target);
    check_duplicates(values, shift, target);
});
