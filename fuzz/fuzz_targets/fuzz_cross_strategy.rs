#![no_main]

use libfuzzer_sys::fuzz_target;

use fracsort_core::cancel::CancellationToken;
use fracsort_core::fraction::BigFraction;
use fracsort_core::strategy::{ComparisonSort, HeapSort, SortStrategy};

fuzz_target!(|data: &[u8]| {
    // Each 4-byte chunk becomes one fraction: i16 numerator over i16 denominator.
    let values: Vec<BigFraction> = data
        .chunks_exact(4)
        .filter_map(|c| {
            let n = i16::from_le_bytes([c[0], c[1]]);
            let d = i16::from_le_bytes([c[2], c[3]]);
            BigFraction::value_of(n, d, false).ok()
        })
        .collect();

    let cancel = CancellationToken::new();
    let quick = ComparisonSort::new().sort(&values, &cancel).unwrap();
    let heap = HeapSort::new().sort(&values, &cancel).unwrap();

    assert_eq!(quick.len(), values.len());
    assert!(heap.windows(2).all(|w| w[0] <= w[1]), "heap sort out of order");
    assert_eq!(quick, heap, "ComparisonSort != HeapSort");
});
