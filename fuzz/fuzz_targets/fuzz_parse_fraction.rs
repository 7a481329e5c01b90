#![no_main]

use libfuzzer_sys::fuzz_target;

use fracsort_core::generator::parse_fraction;

fuzz_target!(|data: &[u8]| {
    let Ok(literal) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing must never panic; anything it accepts must round-trip.
    if let Ok(value) = parse_fraction(literal) {
        let back = parse_fraction(&value.to_string()).expect("rendered literal parses");
        assert_eq!(back, value, "round-trip mismatch for {literal:?}");
        let _ = value.to_mixed_string();
    }
});
