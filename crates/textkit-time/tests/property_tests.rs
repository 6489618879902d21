//! Property tests for textkit-time
//!
//! Rendering and parsing must round-trip for every representable time.

use proptest::prelude::*;
use textkit_time::{seconds_to_time_string, time_string_to_seconds, TimeFormat};

proptest! {
    /// seconds -> HH:MM:SS -> seconds is the identity for non-negative input
    #[test]
    fn prop_hh_mm_ss_round_trip(n in 0i64..1_000_000) {
        let rendered = seconds_to_time_string(n, TimeFormat::HH_MM_SS);
        prop_assert_eq!(time_string_to_seconds(&rendered), n);
    }

    /// GUESS renders something that parses back to the same value
    #[test]
    fn prop_guess_round_trip(n in 0i64..1_000_000) {
        let rendered = seconds_to_time_string(n, TimeFormat::GUESS);
        prop_assert_eq!(time_string_to_seconds(&rendered), n);
    }

    /// Negative input renders with a leading minus and the magnitude of the
    /// positive rendition
    #[test]
    fn prop_negative_renders_sign(n in 1i64..1_000_000) {
        let positive = seconds_to_time_string(n, TimeFormat::HH_MM_SS);
        let negative = seconds_to_time_string(-n, TimeFormat::HH_MM_SS);
        prop_assert_eq!(negative, std::format!("-{positive}"));
    }

    /// Parsing never panics on arbitrary input
    #[test]
    fn prop_parse_total(s in "\\PC{0,32}") {
        let _ = time_string_to_seconds(&s);
    }

    /// The format descriptor serializes as its raw bits
    #[test]
    fn prop_format_serde_round_trip(bits in any::<u32>()) {
        let format = TimeFormat(bits);
        let json = serde_json::to_string(&format).expect("serialize");
        let back: TimeFormat = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(format, back);
    }
}
