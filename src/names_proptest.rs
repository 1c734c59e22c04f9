//! Property-based tests for channel name allocation.
//!
//! These tests use proptest to generate zone and group names and verify that
//! the allocator's guarantees hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::config::Limits;
    use crate::merge::names::{allocate_name, disambiguate, shrink_name};
    use proptest::prelude::*;
    use std::collections::HashSet;

    // ============================================================================
    // shrink_name property tests
    // ============================================================================

    proptest! {
        /// Property: the shrunk name always fits the budget
        #[test]
        fn shrink_name_fits_budget(
            zone in "[a-zA-Z0-9 ]{0,32}",
            group in "[a-zA-Z0-9 ]{0,32}",
            max_len in 1usize..=32,
        ) {
            let name = shrink_name(&zone, &group, max_len);
            prop_assert!(
                name.chars().count() <= max_len,
                "'{}' is longer than {}",
                name,
                max_len
            );
        }

        /// Property: a name that already fits is used as is
        #[test]
        fn shrink_name_keeps_fitting_names(
            zone in "[a-zA-Z]{1,7}",
            group in "[a-zA-Z]{1,8}",
        ) {
            prop_assert_eq!(shrink_name(&zone, &group, 16), format!("{} {}", zone, group));
        }

        /// Property: non-ASCII names are measured in characters
        #[test]
        fn shrink_name_counts_characters(
            zone in "[äöüßø ]{0,20}",
            group in "[äöüßø ]{0,20}",
        ) {
            let name = shrink_name(&zone, &group, 16);
            prop_assert!(name.chars().count() <= 16);
        }
    }

    // ============================================================================
    // allocate_name property tests
    // ============================================================================

    proptest! {
        /// Property: allocation is deterministic
        #[test]
        fn allocate_name_is_deterministic(
            zone in "[a-zA-Z ]{1,20}",
            group in "[a-zA-Z ]{1,20}",
            taken in prop::collection::hash_set("[a-zA-Z ]{1,16}", 0..8),
        ) {
            let limits = Limits::default();
            let first = allocate_name(&zone, &group, &taken, &limits);
            let second = allocate_name(&zone, &group, &taken, &limits);
            prop_assert_eq!(first, second);
        }

        /// Property: repeated allocation into one zone yields unique names
        /// within the budget, as long as each name is registered
        #[test]
        fn allocate_name_unique_when_registered(
            zone in "[a-zA-Z]{1,10}( [a-zA-Z]{1,10})?",
            groups in prop::collection::vec("[a-zA-Z0-9 ]{1,20}", 1..16),
        ) {
            let limits = Limits::default();
            let mut used = HashSet::new();

            for group in &groups {
                let name = allocate_name(&zone, group, &used, &limits);
                prop_assert!(name.chars().count() <= limits.max_name_len);
                prop_assert!(!used.contains(&name), "'{}' handed out twice", name);
                used.insert(name);
            }
            prop_assert_eq!(used.len(), groups.len());
        }

        /// Property: disambiguation keeps the character count
        #[test]
        fn disambiguate_preserves_length(candidate in "[a-zA-Z ]{2,16}", rounds in 1usize..12) {
            let mut used = HashSet::new();
            let mut name = candidate.clone();
            for _ in 0..rounds {
                used.insert(name.clone());
                name = disambiguate(candidate.clone(), &used);
                prop_assert_eq!(name.chars().count(), candidate.chars().count());
            }
        }

        /// Property: a taken natural name is replaced by one ending in "2"
        #[test]
        fn first_collision_ends_in_two(
            zone in "[a-zA-Z]{1,7}",
            group in "[a-zA-Z]{1,8}",
        ) {
            let natural = format!("{} {}", zone, group);
            let taken: HashSet<String> = [natural].into_iter().collect();
            let name = allocate_name(&zone, &group, &taken, &Limits::default());
            prop_assert!(name.ends_with('2'), "'{}' should end in 2", name);
        }
    }
}
