#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 never reaches the normalizer
    if let Ok(s) = std::str::from_utf8(data) {
        let once = learn::normalize(s);
        assert_eq!(learn::normalize(&once), once, "normalization must be idempotent");
    }
});
