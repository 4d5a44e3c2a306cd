#![no_main]

use boundary_search::*;

use libfuzzer_sys::fuzz_target;

type T = i32;

fuzz_target!(|values: Vec<T>| {
    let mut values = values;
    values.dedup();

    match find_peak(&values) {
        Some(idx) => {
            let n = values.len();
            assert!(idx == 0 || values[idx - 1] < values[idx]);
            assert!(idx == n - 1 || values[idx] > values[idx + 1]);
            assert!(is_peak(&values, idx));
        }
        None => assert!(values.is_empty()),
    }
});
