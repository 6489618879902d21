//! Fuzz harness for whole-word search.
//!
//! The scanner walks raw bytes with a UTF-8 letter classifier; any reported
//! match offset must lie inside the haystack.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textkit_search::{find_end_bracket, find_words};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let mut mid = input.len() / 2;
    while !input.is_char_boundary(mid) {
        mid += 1;
    }
    let (haystack, needle) = input.split_at(mid);
    let needle_lower = needle.to_ascii_lowercase();

    if let Some(pos) = find_words(haystack, &needle_lower) {
        assert!(pos <= haystack.len());
    }

    if let Some(pos) = find_end_bracket(haystack, '(', ')', 0) {
        assert!(pos < haystack.len());
    }
});
