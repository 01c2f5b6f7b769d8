#![no_main]

use chunkbuf::parse_size_spec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|spec: &str| {
    let Ok(parsed) = parse_size_spec(Some(spec)) else {
        return;
    };

    if spec.is_empty() {
        assert_eq!(parsed, None);
        return;
    }

    // Verify: accepted specs are digits plus an optional unit
    let lower = spec.to_ascii_lowercase();
    let digits = lower.trim_end_matches(|c| c == 'k' || c == 'm' || c == 'b');
    assert!(digits.trim_start_matches('+').bytes().all(|b| b.is_ascii_digit()));
    assert!(parsed.is_some());
});
