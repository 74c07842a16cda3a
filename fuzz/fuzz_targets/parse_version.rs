#![no_main]

use iacv_version::Version;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(version) = Version::new(data) {
        // Display must reproduce the input exactly.
        assert_eq!(version.to_string(), data);
    }
});
