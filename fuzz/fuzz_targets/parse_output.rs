#![no_main]

use libfuzzer_sys::fuzz_target;
use learn::harness::parse_output;

fuzz_target!(|data: &[u8]| {
    let output = String::from_utf8_lossy(data);
    let result = parse_output(&output, false);
    assert!(!result.passed);
    assert!(!result.tests.is_empty());
});
