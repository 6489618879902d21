//! Fuzz harness for splitting and tokenizing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textkit_split::{join, split, split_multi, tokenize};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    for delimiter in [",", "::", ""] {
        for cap in [0usize, 1, 3] {
            let parts = split(input, delimiter, cap);
            if cap > 0 {
                assert!(parts.len() <= cap);
            }
            if !delimiter.is_empty() && !input.is_empty() {
                assert_eq!(join(parts, delimiter), input);
            }
        }
    }

    let _ = split_multi(&[input], &["/", "#", ":"], 5);

    for token in tokenize(input, ",; \t") {
        assert!(!token.is_empty());
    }
});
