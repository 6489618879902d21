//! Case conversion for textkit.
//!
//! ASCII gets a fast path; everything else goes through a pair of fixed,
//! sorted case-fold tables covering the Latin supplements and extensions,
//! IPA, Greek, Cyrillic, Armenian, Georgian and the fullwidth forms.
//! Codepoints without a table entry pass through unchanged — this is a
//! case-fold table, not a full Unicode database.

mod tables;

use tables::{LOWER_TO_UPPER, UPPER_TO_LOWER};

/// Uppercase a single character via the fold tables.
pub fn to_upper_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    match LOWER_TO_UPPER.binary_search_by_key(&c, |&(lower, _)| lower) {
        Ok(i) => LOWER_TO_UPPER[i].1,
        Err(_) => c,
    }
}

/// Lowercase a single character via the fold tables.
pub fn to_lower_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    match UPPER_TO_LOWER.binary_search_by_key(&c, |&(upper, _)| upper) {
        Ok(i) => UPPER_TO_LOWER[i].1,
        Err(_) => c,
    }
}

/// Uppercase a string in place, returning it for chaining.
pub fn to_upper(s: &mut String) -> &mut String {
    if s.is_ascii() {
        s.make_ascii_uppercase();
    } else {
        let folded: String = s.chars().map(to_upper_char).collect();
        *s = folded;
    }
    s
}

/// Lowercase a string in place, returning it for chaining.
pub fn to_lower(s: &mut String) -> &mut String {
    if s.is_ascii() {
        s.make_ascii_lowercase();
    } else {
        let folded: String = s.chars().map(to_lower_char).collect();
        *s = folded;
    }
    s
}

/// Uppercase only the ASCII letters of a string, in place.
pub fn to_upper_ascii(s: &mut String) -> &mut String {
    s.make_ascii_uppercase();
    s
}

/// Lowercase only the ASCII letters of a string, in place.
pub fn to_lower_ascii(s: &mut String) -> &mut String {
    s.make_ascii_lowercase();
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_sorted_by_key() {
        assert!(LOWER_TO_UPPER.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(UPPER_TO_LOWER.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_ascii() {
        assert_eq!(to_upper_char('a'), 'A');
        assert_eq!(to_lower_char('Z'), 'z');
        assert_eq!(to_upper_char('3'), '3');
    }

    #[test]
    fn test_latin_supplement() {
        assert_eq!(to_upper_char('é'), 'É');
        assert_eq!(to_lower_char('Ü'), 'ü');
        assert_eq!(to_upper_char('ÿ'), 'Ÿ');
    }

    #[test]
    fn test_greek_cyrillic() {
        assert_eq!(to_upper_char('α'), 'Α');
        assert_eq!(to_lower_char('Ω'), 'ω');
        assert_eq!(to_upper_char('д'), 'Д');
        assert_eq!(to_lower_char('Я'), 'я');
    }

    #[test]
    fn test_unmapped_passthrough() {
        assert_eq!(to_upper_char('中'), '中');
        assert_eq!(to_lower_char('中'), '中');
        assert_eq!(to_upper_char('!'), '!');
    }

    #[test]
    fn test_dotless_i_folds_down_to_i() {
        // both 'i' and 'ı' uppercase to 'I'; folding down picks 'i'
        assert_eq!(to_upper_char('ı'), 'I');
        assert_eq!(to_lower_char('I'), 'i');
    }

    #[test]
    fn test_to_upper_string() {
        let mut s = String::from("TeSt");
        to_upper(&mut s);
        assert_eq!(s, "TEST");

        // 'ß' has no single-character uppercase in the tables and passes through
        let mut s = String::from("straße");
        to_upper(&mut s);
        assert_eq!(s, "STRAßE");
    }

    #[test]
    fn test_to_lower_string() {
        let mut s = String::from("TeSt");
        to_lower(&mut s);
        assert_eq!(s, "test");

        let mut s = String::from("ΑΒΓ");
        to_lower(&mut s);
        assert_eq!(s, "αβγ");
    }

    #[test]
    fn test_ascii_only_variants() {
        let mut s = String::from("Grüße");
        to_upper_ascii(&mut s);
        assert_eq!(s, "GRüßE");
        to_lower_ascii(&mut s);
        assert_eq!(s, "grüße");
    }

    #[test]
    fn test_chaining() {
        let mut s = String::from("  ab  ");
        assert_eq!(to_upper(&mut s).trim(), "AB");
    }
}
