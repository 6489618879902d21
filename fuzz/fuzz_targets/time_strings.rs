//! Fuzz harness for time and date string parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textkit_time::{date_string_to_yyyymmdd, seconds_to_time_string, time_string_to_seconds, TimeFormat};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let seconds = time_string_to_seconds(input);
    let _ = date_string_to_yyyymmdd(input);

    // whatever we parsed must render under every format bit combination
    for bits in [0u32, 1, 2, 3, 4, 6, 7, 16, 19, 32, 64, 128, 256] {
        let _ = seconds_to_time_string(seconds, TimeFormat(bits));
    }
});
