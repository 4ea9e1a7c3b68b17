#![no_main]

use libfuzzer_sys::fuzz_target;
use primecheck_core::{Candidate, is_prime};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the candidate parser
        if let Ok(candidate) = s.parse::<Candidate>() {
            // If parsing succeeds, fuzz the classifier
            let _ = is_prime(candidate);
        }
    }
});
