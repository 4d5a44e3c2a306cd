#![no_main]

use boundary_search::*;

use libfuzzer_sys::fuzz_target;

type T = i32;

fuzz_target!(|input: (Vec<T>, usize)| {
    let (mut values, which) = input;
    values.sort();
    values.dedup();
    if values.is_empty() {
        return;
    }

    let which = which % values.len();
    let mut seq = Vec::with_capacity(2 * values.len());
    for (idx, value) in values.iter().copied().enumerate() {
        seq.push(value);
        if idx != which {
            seq.push(value);
        }
    }

    assert!(preconditions::is_paired_but_one(&seq));
    assert_eq!(find_single_index(&seq), Some(2 * which));
    assert_eq!(find_single(&seq), Some(&values[which]));
});
