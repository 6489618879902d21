//! In-place string editing for textkit.
//!
//! Trimming, whitespace collapsing, replacement and escaping. The editing
//! functions mutate the caller's `String` and hand it back for chaining;
//! the escaping helpers return a fresh string.
//!
//! Default trimming uses the byte-wise ASCII space test from
//! [`textkit_chars`], which never misreads a byte of a multi-byte UTF-8
//! sequence as whitespace.

use std::sync::LazyLock;

use regex::Regex;
use textkit_chars::is_space;

/// Trims ASCII whitespace from both ends, in place.
pub fn trim(s: &mut String) -> &mut String {
    trim_right(s);
    trim_left(s)
}

/// Trims ASCII whitespace from the start, in place.
pub fn trim_left(s: &mut String) -> &mut String {
    let start = s
        .bytes()
        .position(|b| !is_space(b))
        .unwrap_or(s.len());
    s.drain(..start);
    s
}

/// Trims ASCII whitespace from the end, in place.
pub fn trim_right(s: &mut String) -> &mut String {
    let end = s
        .bytes()
        .rposition(|b| !is_space(b))
        .map_or(0, |i| i + 1);
    s.truncate(end);
    s
}

/// Trims every character in `set` from both ends, in place.
pub fn trim_matching<'a>(s: &'a mut String, set: &str) -> &'a mut String {
    trim_right_matching(s, set);
    trim_left_matching(s, set)
}

/// Trims every character in `set` from the start, in place.
pub fn trim_left_matching<'a>(s: &'a mut String, set: &str) -> &'a mut String {
    let keep = s.trim_start_matches(|c| set.contains(c)).len();
    let cut = s.len() - keep;
    s.drain(..cut);
    s
}

/// Trims every character in `set` from the end, in place.
pub fn trim_right_matching<'a>(s: &'a mut String, set: &str) -> &'a mut String {
    let keep = s.trim_end_matches(|c| set.contains(c)).len();
    s.truncate(keep);
    s
}

/// Strips trailing carriage returns and line feeds, in place.
pub fn remove_crlf(s: &mut String) -> &mut String {
    trim_right_matching(s, "\n\r")
}

/// Converts tabs to spaces and collapses every run of spaces into one,
/// in a single pass, in place.
pub fn remove_duplicated_spaces_and_tabs(s: &mut String) -> &mut String {
    let mut out = String::with_capacity(s.len());
    let mut on_space = false;
    for mut c in s.chars() {
        if c == '\t' {
            c = ' ';
        }
        if c == ' ' {
            if on_space {
                continue;
            }
            on_space = true;
        } else {
            on_space = false;
        }
        out.push(c);
    }
    *s = out;
    s
}

/// Replaces every occurrence of a character, returning the number replaced.
pub fn replace_char(s: &mut String, old: char, new: char) -> usize {
    let count = s.matches(old).count();
    if count > 0 {
        let replaced: String = s.chars().map(|c| if c == old { new } else { c }).collect();
        *s = replaced;
    }
    count
}

/// Replaces every occurrence of `old` with `new`, returning the number
/// replaced.
///
/// An empty search pattern replaces nothing. Scanning resumes after the
/// replacement text, so a replacement containing the pattern cannot loop.
pub fn replace(s: &mut String, old: &str, new: &str) -> usize {
    if old.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut index = 0;
    while index < s.len() {
        let Some(found) = s[index..].find(old) else {
            break;
        };
        let at = index + found;
        s.replace_range(at..at + old.len(), new);
        index = at + new.len();
        count += 1;
    }
    count
}

/// Replaces every byte outside the RFC 3986 unreserved set
/// (`A-Z a-z 0-9 - . _ ~`) with an underscore.
pub fn make_safe_url(s: &str) -> String {
    s.bytes()
        .map(|b| match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => b as char,
            _ => '_',
        })
        .collect()
}

/// Replaces every character below 0x20 with a space.
pub fn make_safe_string(s: &str) -> String {
    s.chars()
        .map(|c| if (c as u32) < 0x20 { ' ' } else { c })
        .collect()
}

static MAC_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[(\[]?([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})[)\]]?").unwrap()
});

/// Removes MAC-address-shaped tokens (`aa:bb:cc:dd:ee:ff`, `:` or `-`
/// separated, optionally bracketed).
pub fn remove_mac_address(s: &str) -> String {
    MAC_ADDRESS.replace_all(s, "").into_owned()
}

/// Maps a word onto telephone-keypad digits, in place.
///
/// Letters go through the 26-entry keypad table, digits pass, everything
/// else becomes a space.
pub fn word_to_digits(s: &mut String) -> &mut String {
    const KEYPAD: &[u8; 26] = b"22233344455566677778889999";
    let mapped: String = s
        .bytes()
        .map(|b| match b.to_ascii_lowercase() {
            l @ b'a'..=b'z' => KEYPAD[usize::from(l - b'a')] as char,
            b'0'..=b'9' => b as char,
            _ => ' ',
        })
        .collect();
    *s = mapped;
    s
}

/// Escapes backslashes, then double quotes, then wraps the whole string in
/// double quotes. The order matters: quoting first would escape the wrapper.
pub fn paramify(s: &str) -> String {
    let mut result = s.to_string();
    replace(&mut result, "\\", "\\\\");
    replace(&mut result, "\"", "\\\"");
    format!("\"{result}\"")
}

/// First `count` characters of the string.
pub fn left(s: &str, count: usize) -> String {
    s.chars().take(count).collect()
}

/// Up to `count` characters starting at character position `first`.
/// Out-of-range bounds clamp; nothing panics.
pub fn mid(s: &str, first: usize, count: usize) -> String {
    s.chars().skip(first).take(count).collect()
}

/// Last `count` characters of the string.
pub fn right(s: &str, count: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(count)).collect()
}

/// Concatenates every decimal digit in the string and parses the result,
/// saturating on overflow. No digits parse as 0.
pub fn digits_value(s: &str) -> i64 {
    s.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        })
}

/// Checks the string matches `[ \t]*[0-9]+[ \t]*`.
pub fn is_natural_number(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && is_space(bytes[i]) {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let digits = i - digits_start;
    while i < bytes.len() && is_space(bytes[i]) {
        i += 1;
    }
    i == bytes.len() && digits > 0
}

/// Checks the string matches `[ \t]*-?[0-9]+[ \t]*`.
pub fn is_integer(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && is_space(bytes[i]) {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'-' {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let digits = i - digits_start;
    while i < bytes.len() && is_space(bytes[i]) {
        i += 1;
    }
    i == bytes.len() && digits > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        let mut s = String::from(" test test   ");
        trim(&mut s);
        assert_eq!(s, "test test");

        let mut s = String::from("\t\n already \r\n");
        trim(&mut s);
        assert_eq!(s, "already");
    }

    #[test]
    fn test_trim_sides() {
        let mut s = String::from(" test test   ");
        trim_left(&mut s);
        assert_eq!(s, "test test   ");

        let mut s = String::from(" test test   ");
        trim_right(&mut s);
        assert_eq!(s, " test test");
    }

    #[test]
    fn test_trim_preserves_utf8() {
        // U+00A0 no-break space is a high-bit byte sequence and must survive
        let mut s = String::from(" \u{00A0}x\u{00A0} ");
        trim(&mut s);
        assert_eq!(s, "\u{00A0}x\u{00A0}");
    }

    #[test]
    fn test_trim_matching() {
        let mut s = String::from("xxtestxx");
        trim_matching(&mut s, "x");
        assert_eq!(s, "test");

        let mut s = String::from("abctestcba");
        trim_matching(&mut s, "abc");
        assert_eq!(s, "test");
    }

    #[test]
    fn test_remove_crlf() {
        let mut s = String::from("test\r\nstring\nblah blah\n");
        remove_crlf(&mut s);
        assert_eq!(s, "test\r\nstring\nblah blah");
    }

    #[test]
    fn test_remove_duplicated_spaces_and_tabs() {
        let mut s = String::from("a  b\t\tc \t d");
        remove_duplicated_spaces_and_tabs(&mut s);
        assert_eq!(s, "a b c d");
    }

    #[test]
    fn test_replace_char() {
        let mut s = String::from("test test");
        assert_eq!(replace_char(&mut s, 's', 'x'), 2);
        assert_eq!(s, "text text");
        assert_eq!(replace_char(&mut s, 's', 'x'), 0);
        assert_eq!(s, "text text");
    }

    #[test]
    fn test_replace() {
        let mut s = String::from("test test");
        assert_eq!(replace(&mut s, "s", "x"), 2);
        assert_eq!(s, "text text");
        assert_eq!(replace(&mut s, "s", "x"), 0);
    }

    #[test]
    fn test_replace_empty_pattern() {
        let mut s = String::from("abc");
        assert_eq!(replace(&mut s, "", "x"), 0);
        assert_eq!(s, "abc");
    }

    #[test]
    fn test_replace_self_containing() {
        // replacement containing the pattern must not loop
        let mut s = String::from("aaa");
        assert_eq!(replace(&mut s, "a", "aa"), 3);
        assert_eq!(s, "aaaaaa");
    }

    #[test]
    fn test_make_safe_url() {
        assert_eq!(make_safe_url("a/b c?d=1"), "a_b_c_d_1");
        assert_eq!(make_safe_url("A-Z.a_z~0.9"), "A-Z.a_z~0.9");
        // every byte of a multi-byte sequence is replaced
        assert_eq!(make_safe_url("é"), "__");
    }

    #[test]
    fn test_make_safe_string() {
        assert_eq!(make_safe_string("a\x01b\x1Fc"), "a b c");
        assert_eq!(make_safe_string("plain"), "plain");
    }

    #[test]
    fn test_remove_mac_address() {
        assert_eq!(remove_mac_address("aa:bb:cc:dd:ee:ff"), "");
        assert_eq!(remove_mac_address("host (00:11:22:33:44:55)"), "host ");
        assert_eq!(remove_mac_address("host [00-11-22-33-44-55]!"), "host !");
        assert_eq!(remove_mac_address("no mac here"), "no mac here");
    }

    #[test]
    fn test_word_to_digits() {
        let mut s = String::from("test string");
        word_to_digits(&mut s);
        assert_eq!(s, "8378 787464");

        let mut s = String::from("Mix3d UP!");
        word_to_digits(&mut s);
        assert_eq!(s, "64933 87 ");
    }

    #[test]
    fn test_paramify() {
        assert_eq!(
            paramify(r#"some, very \ odd "string""#),
            r#""some, very \\ odd \"string\"""#
        );
        assert_eq!(paramify(""), "\"\"");
    }

    #[test]
    fn test_left_mid_right() {
        assert_eq!(left("test", 0), "");
        assert_eq!(left("test", 2), "te");
        assert_eq!(left("test", 10), "test");

        assert_eq!(mid("test", 0, 2), "te");
        assert_eq!(mid("test", 2, 2), "st");
        assert_eq!(mid("test", 1, 2), "es");
        assert_eq!(mid("test", 0, 10), "test");
        assert_eq!(mid("test", 9, 2), "");

        assert_eq!(right("test", 0), "");
        assert_eq!(right("test", 2), "st");
        assert_eq!(right("test", 10), "test");
    }

    #[test]
    fn test_digits_value() {
        assert_eq!(digits_value("a1b2c3"), 123);
        assert_eq!(digits_value("no digits"), 0);
        assert_eq!(digits_value("9999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_is_natural_number() {
        assert!(is_natural_number("10"));
        assert!(is_natural_number(" 10"));
        assert!(is_natural_number("0"));
        assert!(!is_natural_number(" 1 0"));
        assert!(!is_natural_number("1.0"));
        assert!(!is_natural_number("0x1"));
        assert!(!is_natural_number("blah"));
        assert!(!is_natural_number("120 h"));
        assert!(!is_natural_number(" "));
        assert!(!is_natural_number(""));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("10"));
        assert!(is_integer(" -10"));
        assert!(is_integer("0"));
        assert!(!is_integer(" 1 0"));
        assert!(!is_integer("1.0"));
        assert!(!is_integer("-"));
        assert!(!is_integer(""));
    }

    #[test]
    fn test_chaining() {
        let mut s = String::from("  a\t\tb  ");
        assert_eq!(remove_duplicated_spaces_and_tabs(trim(&mut s)).as_str(), "a b");
    }
}
