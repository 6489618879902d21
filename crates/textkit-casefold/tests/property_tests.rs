//! Property tests for textkit-casefold
//!
//! Case conversion must be idempotent and fold-stable for every input.

use proptest::prelude::*;
use textkit_casefold::{to_lower, to_lower_char, to_upper, to_upper_char};

proptest! {
    /// Uppercasing twice is the same as uppercasing once
    #[test]
    fn prop_to_upper_idempotent(s in "\\PC*") {
        let mut once = s.clone();
        to_upper(&mut once);
        let mut twice = once.clone();
        to_upper(&mut twice);
        prop_assert_eq!(once, twice);
    }

    /// Lowercasing twice is the same as lowercasing once
    #[test]
    fn prop_to_lower_idempotent(s in "\\PC*") {
        let mut once = s.clone();
        to_lower(&mut once);
        let mut twice = once.clone();
        to_lower(&mut twice);
        prop_assert_eq!(once, twice);
    }

    /// A character that folds up and back down lands on a stable lowercase
    #[test]
    fn prop_fold_round_trip_stable(c in any::<char>()) {
        let down = to_lower_char(to_upper_char(c));
        prop_assert_eq!(to_lower_char(to_upper_char(down)), down);
    }

    /// Conversion never changes the character count
    #[test]
    fn prop_length_preserved(s in "\\PC*") {
        let mut upper = s.clone();
        to_upper(&mut upper);
        prop_assert_eq!(s.chars().count(), upper.chars().count());
    }
}
