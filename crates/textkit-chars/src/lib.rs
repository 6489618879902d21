//! Byte and character classification for textkit.
//!
//! This crate provides the locale-independent classifiers the rest of the
//! textkit ecosystem scans with: ASCII tests that are safe to run byte-wise
//! over UTF-8 data, and a small UTF-8 letter classifier for word-boundary
//! detection.

/// Checks if a byte is ASCII whitespace (space, tab, CR, LF, VT, FF).
///
/// Any byte with the high bit set is not a space, so this test can run
/// byte-wise over UTF-8 data without splitting multi-byte sequences.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Checks if a byte is an ASCII decimal digit (0-9).
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte is an ASCII hex digit (0-9, a-f, A-F).
pub fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Value of an ASCII decimal digit, `None` for anything else.
pub fn digit_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        _ => None,
    }
}

/// Value of an ASCII hex digit, `None` for anything else.
pub fn hex_digit_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Checks if a byte is an ASCII uppercase letter.
pub fn is_upper_letter(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// Checks if a byte is an ASCII lowercase letter.
pub fn is_lower_letter(b: u8) -> bool {
    b.is_ascii_lowercase()
}

/// Checks if a byte is an ASCII letter or digit.
pub fn is_alphanumeric(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Length in bytes of the letter starting at `s[0]`, or `None` if the next
/// byte sequence is not a letter.
///
/// Recognizes ASCII letters plus the two-byte UTF-8 ranges for Latin-1
/// Supplement (excluding the multiplication and division signs), Latin
/// Extended-A, Latin Extended-B and the IPA extensions. Anything else,
/// including truncated multi-byte sequences, is `None`.
pub fn utf8_letter_len(s: &[u8]) -> Option<usize> {
    let ch = *s.first()?;
    if ch.is_ascii_alphabetic() {
        return Some(1);
    }
    if ch & 0x80 == 0 {
        return None;
    }
    let ch2 = *s.get(1)?;
    // Latin-1 Supplement letters, minus 0xD7 '×' and 0xF7 '÷'
    if ch == 0xC3 && (0x80..=0xBF).contains(&ch2) && ch2 != 0x97 && ch2 != 0xB7 {
        return Some(2);
    }
    // Latin Extended-A
    if (0xC4..=0xC7).contains(&ch) && (0x80..=0xBF).contains(&ch2) {
        return Some(2);
    }
    // Latin Extended-B and IPA extensions
    if ((ch == 0xC8 || ch == 0xC9) && (0x80..=0xBF).contains(&ch2))
        || (ch == 0xCA && (0x80..=0xAF).contains(&ch2))
    {
        return Some(2);
    }
    None
}

/// Number of UTF-8 characters in the string (continuation bytes skipped).
pub fn utf8_len(s: &str) -> usize {
    s.bytes().filter(|b| b & 0xC0 != 0x80).count()
}
