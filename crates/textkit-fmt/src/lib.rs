//! Formatting utilities for textkit.
//!
//! This crate renders printf-style templates against a typed argument slice,
//! humanizes byte counts, and converts between binary escape notation, raw
//! bytes and hexadecimal text.
//!
//! The template engine is total: malformed conversions are copied through
//! verbatim, a conversion with no argument left renders as nothing, and an
//! empty template renders an empty string. Nothing here panics.

mod printf;

pub use printf::{format, Arg};

/// Human-readable byte count using the largest base-1024 unit that keeps the
/// scaled value below 999.5.
///
/// Two decimals below 9.995, one below 99.95, none above; values under 1000
/// bytes render as a plain integer with a `B` suffix.
///
/// ```
/// use textkit_fmt::format_file_size;
///
/// assert_eq!(format_file_size(999), "999B");
/// assert_eq!(format_file_size(1024), "1.00kB");
/// assert_eq!(format_file_size(10387), "10.1kB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
    if bytes < 1000 {
        return format("%uB", &[Arg::Uint(bytes)]);
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while unit + 1 < UNITS.len() && value >= 999.5 {
        unit += 1;
        value /= 1024.0;
    }
    let decimals: u64 = if value < 9.995 {
        2
    } else if value < 99.95 {
        1
    } else {
        0
    };
    let template = format("%%.%uf%%s", &[Arg::Uint(decimals)]);
    format(&template, &[Arg::Float(value), Arg::Str(UNITS[unit])])
}

/// Decodes `\<decimal>` escapes in a string into raw byte values.
///
/// The digit run after a backslash is parsed greedily and truncated to a
/// byte. A backslash before any other character is dropped and the character
/// kept; a trailing lone backslash is dropped silently.
pub fn binary_string_to_bytes(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / 2);
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 1;
            if i == bytes.len() {
                break;
            }
            if bytes[i].is_ascii_digit() {
                let mut value: u64 = 0;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    value = value
                        .saturating_mul(10)
                        .saturating_add(u64::from(bytes[i] - b'0'));
                    i += 1;
                }
                out.push(value as u8);
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}

/// Lowercase two-digit hexadecimal encoding of each byte, no separators.
pub fn to_hexadecimal(input: &[u8]) -> String {
    hex::encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_small() {
        assert_eq!(format_file_size(0), "0B");
        assert_eq!(format_file_size(1), "1B");
        assert_eq!(format_file_size(999), "999B");
    }

    #[test]
    fn test_format_file_size_boundaries() {
        assert_eq!(format_file_size(1000), "0.98kB");
        assert_eq!(format_file_size(1024), "1.00kB");
        assert_eq!(format_file_size(10229), "9.99kB");
        assert_eq!(format_file_size(10387), "10.1kB");
        assert_eq!(format_file_size(102297), "99.9kB");
        assert_eq!(format_file_size(102400), "100kB");
        assert_eq!(format_file_size(1023431), "999kB");
        assert_eq!(format_file_size(1023897), "0.98MB");
        assert_eq!(format_file_size(1024000), "0.98MB");
    }

    #[test]
    fn test_format_file_size_large() {
        assert_eq!(format_file_size(6115888293969133568), "5.30EB");
        assert_eq!(format_file_size(u64::MAX), "16.0EB");
    }

    #[test]
    fn test_binary_string_to_bytes() {
        assert_eq!(binary_string_to_bytes("\\1\\2\\3"), vec![1, 2, 3]);
        assert_eq!(binary_string_to_bytes("a\\0b"), vec![b'a', 0, b'b']);
        assert_eq!(binary_string_to_bytes("\\123"), vec![123]);
        assert_eq!(binary_string_to_bytes("plain"), b"plain".to_vec());
    }

    #[test]
    fn test_binary_string_to_bytes_escapes() {
        // backslash before a non-digit is dropped, the character kept
        assert_eq!(binary_string_to_bytes("a\\bc"), vec![b'a', b'b', b'c']);
        // trailing lone backslash is dropped
        assert_eq!(binary_string_to_bytes("ab\\"), vec![b'a', b'b']);
        // digit run wider than a byte truncates
        assert_eq!(binary_string_to_bytes("\\1234"), vec![(1234u64 % 256) as u8]);
    }

    #[test]
    fn test_to_hexadecimal() {
        assert_eq!(to_hexadecimal(b""), "");
        assert_eq!(to_hexadecimal(b"abc"), "616263");
        assert_eq!(to_hexadecimal(b"a\x00b\n"), "6100620a");
        assert_eq!(to_hexadecimal(&[0xFF]), "ff");
    }
}
