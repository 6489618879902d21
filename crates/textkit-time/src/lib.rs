//! Time and date string conversion for textkit.
//!
//! Bidirectional string/seconds conversion driven by a bitmask format
//! descriptor, plus YYYYMMDD-style date packing. Parsing is forgiving:
//! malformed numeric fields read as 0 and nothing here errors.

use serde::{Deserialize, Serialize};
use textkit_compare::ends_with_nocase;
use textkit_edit::trim;
use textkit_split::split;

/// Bitmask selecting which fields appear in a rendered time string.
///
/// Combined values request compound output, e.g.
/// `TimeFormat::HH_MM_SS == TimeFormat::HH | TimeFormat::MM | TimeFormat::SS`.
/// [`TimeFormat::GUESS`] picks `MM_SS` or `HH_MM_SS` from the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeFormat(pub u32);

impl TimeFormat {
    /// Fallback used when no format was configured.
    pub const GUESS: TimeFormat = TimeFormat(0);
    /// `ss` — seconds only (2-digit).
    pub const SS: TimeFormat = TimeFormat(1);
    /// `mm` — minutes only (2-digit).
    pub const MM: TimeFormat = TimeFormat(2);
    /// `mm:ss` — minutes and seconds.
    pub const MM_SS: TimeFormat = TimeFormat(3);
    /// `hh` — hours only (2-digit).
    pub const HH: TimeFormat = TimeFormat(4);
    /// `hh:mm` — hours and minutes.
    pub const HH_MM: TimeFormat = TimeFormat(6);
    /// `hh:mm:ss` — hours, minutes and seconds.
    pub const HH_MM_SS: TimeFormat = TimeFormat(7);
    /// `xx` — AM/PM marker for a 12-hour clock.
    pub const XX: TimeFormat = TimeFormat(8);
    /// `hh:mm xx` — 12-hour clock hours and minutes.
    pub const HH_MM_XX: TimeFormat = TimeFormat(14);
    /// `hh:mm:ss xx` — 12-hour clock with seconds.
    pub const HH_MM_SS_XX: TimeFormat = TimeFormat(15);
    /// `h` — hours only, no leading zero.
    pub const H: TimeFormat = TimeFormat(16);
    /// `h:mm:ss` — 1-digit hours with minutes and seconds.
    pub const H_MM_SS: TimeFormat = TimeFormat(19);
    /// `h:mm:ss xx` — 1-digit hours, 12-hour clock.
    pub const H_MM_SS_XX: TimeFormat = TimeFormat(27);
    /// `secs` — total time in seconds.
    pub const SECS: TimeFormat = TimeFormat(32);
    /// `mins` — total time in minutes.
    pub const MINS: TimeFormat = TimeFormat(64);
    /// `hours` — total time in hours.
    pub const HOURS: TimeFormat = TimeFormat(128);
    /// `m` — minutes of the hour, no leading zero.
    pub const M: TimeFormat = TimeFormat(256);

    /// Checks whether every bit of `other` is set.
    pub fn contains(self, other: TimeFormat) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for TimeFormat {
    type Output = TimeFormat;

    fn bitor(self, rhs: TimeFormat) -> TimeFormat {
        TimeFormat(self.0 | rhs.0)
    }
}

/// C `atoi`: skip leading whitespace, optional sign, then digits; anything
/// unparseable reads as 0.
fn atoi(s: &str) -> i64 {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && textkit_chars::is_space(bytes[i]) {
        i += 1;
    }
    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'-' || bytes[i] == b'+') {
        negative = bytes[i] == b'-';
        i += 1;
    }
    let mut value: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(bytes[i] - b'0'));
        i += 1;
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Parses a time string to seconds.
///
/// `"<N> min"` (case-insensitive suffix) reads as minutes; otherwise up to
/// the first three `:`-separated fields read as hours, minutes and seconds,
/// extra fields ignored, malformed fields as 0.
///
/// ```
/// use textkit_time::time_string_to_seconds;
///
/// assert_eq!(time_string_to_seconds("2:04:03"), 7443);
/// assert_eq!(time_string_to_seconds("7 min"), 420);
/// ```
pub fn time_string_to_seconds(time_string: &str) -> i64 {
    let mut text = time_string.to_string();
    trim(&mut text);
    if ends_with_nocase(&text, " min") {
        return 60 * atoi(&text);
    }
    let mut seconds = 0;
    for field in split(&text, ":", 0).iter().take(3) {
        seconds = seconds * 60 + atoi(field);
    }
    seconds
}

/// Renders seconds using the given format descriptor.
///
/// Negative input renders with a leading `-` and is processed as its
/// absolute value. `SECS`/`MINS`/`HOURS` render a single rounded total; a
/// lone `M` bit renders the minutes of the hour; everything else decomposes
/// into zero-padded fields, with `GUESS` resolving to `HH_MM_SS` when the
/// value reaches an hour and `MM_SS` otherwise.
pub fn seconds_to_time_string(seconds: i64, format: TimeFormat) -> String {
    let negative = seconds < 0;
    let seconds = seconds.saturating_abs();

    let mut rendered = if format == TimeFormat::SECS {
        seconds.to_string()
    } else if format == TimeFormat::MINS {
        ((seconds as f64 / 60.0).round_ties_even() as i64).to_string()
    } else if format == TimeFormat::HOURS {
        ((seconds as f64 / 3600.0).round_ties_even() as i64).to_string()
    } else if format.contains(TimeFormat::M) {
        (seconds % 3600 / 60).to_string()
    } else {
        let hh = seconds / 3600;
        let mm = seconds % 3600 / 60;
        let ss = seconds % 60;

        let format = if format == TimeFormat::GUESS {
            if hh >= 1 {
                TimeFormat::HH_MM_SS
            } else {
                TimeFormat::MM_SS
            }
        } else {
            format
        };

        let mut out = String::new();
        if format.contains(TimeFormat::HH) {
            out.push_str(&format!("{hh:02}"));
        } else if format.contains(TimeFormat::H) {
            out.push_str(&hh.to_string());
        }
        if format.contains(TimeFormat::MM) {
            if out.is_empty() {
                out.push_str(&format!("{mm:02}"));
            } else {
                out.push_str(&format!(":{mm:02}"));
            }
        }
        if format.contains(TimeFormat::SS) {
            if out.is_empty() {
                out.push_str(&format!("{ss:02}"));
            } else {
                out.push_str(&format!(":{ss:02}"));
            }
        }
        out
    };

    if negative {
        rendered.insert(0, '-');
    }
    rendered
}

/// Packs a `-`-separated date string into an integer: `DD`, `MM-DD` or
/// `YYYY-MM-DD` become DD, MMDD or YYYYMMDD. More parts are `None`.
///
/// ```
/// use textkit_time::date_string_to_yyyymmdd;
///
/// assert_eq!(date_string_to_yyyymmdd("2012-07-06"), Some(20120706));
/// ```
pub fn date_string_to_yyyymmdd(date_string: &str) -> Option<i32> {
    let parts = split(date_string, "-", 0);
    let value = match parts.len() {
        1 => atoi(&parts[0]),
        2 => atoi(&parts[0]) * 100 + atoi(&parts[1]),
        3 => atoi(&parts[0]) * 10000 + atoi(&parts[1]) * 100 + atoi(&parts[2]),
        _ => return None,
    };
    Some(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format_bits() {
        assert_eq!(TimeFormat::HH | TimeFormat::MM | TimeFormat::SS, TimeFormat::HH_MM_SS);
        assert!(TimeFormat::HH_MM_SS.contains(TimeFormat::MM));
        assert!(!TimeFormat::MM_SS.contains(TimeFormat::HH));
    }

    #[test]
    fn test_time_string_to_seconds() {
        assert_eq!(time_string_to_seconds("21:30:55"), 77455);
        assert_eq!(time_string_to_seconds("1:01"), 61);
        assert_eq!(time_string_to_seconds("4:03"), 243);
        assert_eq!(time_string_to_seconds("2:04:03"), 7443);
        assert_eq!(time_string_to_seconds("   2:4:3"), 7443);
        assert_eq!(time_string_to_seconds("  \t\t 02:04:03 \n "), 7443);
    }

    #[test]
    fn test_time_string_to_seconds_minutes_suffix() {
        assert_eq!(time_string_to_seconds("7 min"), 420);
        assert_eq!(time_string_to_seconds("7 min\t"), 420);
        assert_eq!(time_string_to_seconds("   154 min"), 9240);
        assert_eq!(time_string_to_seconds("7 MIN"), 420);
    }

    #[test]
    fn test_time_string_to_seconds_extra_fields_ignored() {
        assert_eq!(time_string_to_seconds("01:05:02:04:03 \n "), 3902);
    }

    #[test]
    fn test_time_string_to_seconds_malformed() {
        assert_eq!(time_string_to_seconds("blah"), 0);
        assert_eq!(time_string_to_seconds("-"), 0);
        assert_eq!(time_string_to_seconds(""), 0);
        assert_eq!(time_string_to_seconds("x:y"), 0);
    }

    #[test]
    fn test_seconds_to_time_string_guess() {
        assert_eq!(seconds_to_time_string(77455, TimeFormat::GUESS), "21:30:55");
        assert_eq!(seconds_to_time_string(125, TimeFormat::GUESS), "02:05");
        assert_eq!(seconds_to_time_string(0, TimeFormat::GUESS), "00:00");
        assert_eq!(seconds_to_time_string(3600, TimeFormat::GUESS), "01:00:00");
    }

    #[test]
    fn test_seconds_to_time_string_fields() {
        assert_eq!(seconds_to_time_string(3661, TimeFormat::HH_MM_SS), "01:01:01");
        assert_eq!(seconds_to_time_string(3661, TimeFormat::H_MM_SS), "1:01:01");
        assert_eq!(seconds_to_time_string(3661, TimeFormat::MM_SS), "01:01");
        assert_eq!(seconds_to_time_string(3661, TimeFormat::HH), "01");
        assert_eq!(seconds_to_time_string(3661, TimeFormat::M), "1");
        assert_eq!(seconds_to_time_string(3599, TimeFormat::M), "59");
    }

    #[test]
    fn test_seconds_to_time_string_totals() {
        assert_eq!(seconds_to_time_string(90, TimeFormat::SECS), "90");
        assert_eq!(seconds_to_time_string(90, TimeFormat::MINS), "2");
        assert_eq!(seconds_to_time_string(150, TimeFormat::MINS), "2");
        assert_eq!(seconds_to_time_string(7200, TimeFormat::HOURS), "2");
    }

    #[test]
    fn test_seconds_to_time_string_negative() {
        assert_eq!(seconds_to_time_string(-3661, TimeFormat::HH_MM_SS), "-01:01:01");
        assert_eq!(seconds_to_time_string(-90, TimeFormat::SECS), "-90");
    }

    #[test]
    fn test_time_round_trip() {
        for &n in &[0, 59, 60, 3599, 3600, 7443, 77455, 359999] {
            let rendered = seconds_to_time_string(n, TimeFormat::HH_MM_SS);
            assert_eq!(time_string_to_seconds(&rendered), n, "round trip of {n}");
        }
    }

    #[test]
    fn test_date_string_to_yyyymmdd() {
        assert_eq!(date_string_to_yyyymmdd("2012-07-06"), Some(20120706));
        assert_eq!(date_string_to_yyyymmdd("07-06"), Some(706));
        assert_eq!(date_string_to_yyyymmdd("06"), Some(6));
        assert_eq!(date_string_to_yyyymmdd("2012-07-06-05"), None);
    }

    #[test]
    fn test_date_string_malformed_fields_read_zero() {
        assert_eq!(date_string_to_yyyymmdd("2012-xx-06"), Some(20120006));
        // empty input splits to no parts at all
        assert_eq!(date_string_to_yyyymmdd(""), None);
    }
}
