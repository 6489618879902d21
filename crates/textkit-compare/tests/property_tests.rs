//! Property tests for textkit-compare
//!
//! Comparison must behave like an order: symmetric equality, antisymmetric
//! ordering, and agreement between the equality and comparison forms.

use proptest::prelude::*;
use textkit_compare::{alphanumeric_compare, compare_nocase, equals_nocase, natural_cmp};

proptest! {
    /// Case-insensitive equality is symmetric
    #[test]
    fn prop_equals_nocase_symmetric(a in "\\PC{0,32}", b in "\\PC{0,32}") {
        prop_assert_eq!(equals_nocase(&a, &b), equals_nocase(&b, &a));
    }

    /// equals_nocase and compare_nocase agree
    #[test]
    fn prop_equals_matches_compare(a in "\\PC{0,32}", b in "\\PC{0,32}") {
        prop_assert_eq!(equals_nocase(&a, &b), compare_nocase(&a, &b) == 0);
    }

    /// Comparing a string with itself is 0
    #[test]
    fn prop_compare_reflexive(a in "\\PC{0,32}") {
        prop_assert_eq!(compare_nocase(&a, &a), 0);
        prop_assert_eq!(alphanumeric_compare(&a, &a), 0);
    }

    /// Swapping operands flips the sign
    #[test]
    fn prop_compare_antisymmetric(a in "\\PC{0,32}", b in "\\PC{0,32}") {
        let forward = compare_nocase(&a, &b);
        let backward = compare_nocase(&b, &a);
        prop_assert_eq!(forward.signum(), -backward.signum());
    }

    /// Natural order flips under operand swap
    #[test]
    fn prop_natural_cmp_antisymmetric(a in "[a-z0-9]{0,16}", b in "[a-z0-9]{0,16}") {
        prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
    }
}
