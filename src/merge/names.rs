//! Channel name allocation
//!
//! Radios show channel names on small displays with a fixed label budget, so a
//! synthesized channel name has to be squeezed out of its zone name and its
//! talkgroup name. [`allocate_name`] tries progressively terser forms and
//! takes the first that fits:
//!
//! 1. `"{zone} {group}"`
//! 2. `"{first word of zone} {group}"`
//! 3. `"{first word of zone} {group cut to the remaining budget}"`
//! 4. the first half-budget characters of both, with no separator
//! 5. the step 4 result cut to the budget
//!
//! The chosen name is then made unique against the names already in use by
//! overwriting its tail with a counter (`"Hood PNW"` becomes `"Hood PN2"`),
//! which keeps the length fixed but can eat into readable text once the
//! counter reaches two digits.

use std::collections::HashSet;
use std::hash::BuildHasher;

use crate::config::Limits;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Shrink `"{zone} {group}"` until it fits `max_len` characters.
pub fn shrink_name(zone: &str, group: &str, max_len: usize) -> String {
    let fits = |candidate: &str| char_len(candidate) <= max_len;

    let candidate = format!("{zone} {group}");
    if fits(&candidate) {
        return candidate;
    }

    let word = zone.split_whitespace().next().unwrap_or(zone);
    let candidate = format!("{word} {group}");
    if fits(&candidate) {
        return candidate;
    }

    let group_budget = max_len.saturating_sub(char_len(word) + 1);
    if group_budget > 0 {
        let candidate = format!("{word} {}", take_chars(group, group_budget));
        if fits(&candidate) {
            return candidate;
        }
    }

    let half = max_len / 2;
    let candidate = format!("{}{}", take_chars(word, half), take_chars(group, half));
    if fits(&candidate) {
        return candidate;
    }

    take_chars(&candidate, max_len)
}

/// Overwrite the tail of `candidate` with an increasing counter until the
/// result is not in `used`.
///
/// The length in characters is kept, so `"Foo Bar9"` is followed by
/// `"Foo Ba10"`, not `"Foo Bar10"`.
pub fn disambiguate<S: BuildHasher>(candidate: String, used: &HashSet<String, S>) -> String {
    let mut name = candidate;
    let mut counter: u64 = 1;

    while used.contains(&name) {
        counter += 1;
        let suffix = counter.to_string();
        let keep = char_len(&name).saturating_sub(char_len(&suffix));
        name = take_chars(&name, keep) + &suffix;
    }

    name
}

/// Allocate a channel name for `group` in `zone`.
///
/// The result fits the label budget of `limits` and is not in `used`. `used`
/// is only read: the caller registers the returned name before asking again.
pub fn allocate_name<S: BuildHasher>(
    zone: &str,
    group: &str,
    used: &HashSet<String, S>,
    limits: &Limits,
) -> String {
    disambiguate(shrink_name(zone, group, limits.max_name_len), used)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn allocate(zone: &str, group: &str, names: &[&str]) -> String {
        allocate_name(zone, group, &used(names), &Limits::default())
    }

    #[test]
    fn test_full_name_when_it_fits() {
        assert_eq!(allocate("Mt Hood", "PNW", &[]), "Mt Hood PNW");
        assert_eq!(allocate("Portland", "Statewi", &[]), "Portland Statewi");
    }

    #[test]
    fn test_first_word_of_zone() {
        assert_eq!(
            allocate("Mt Hood Timberline", "PNW Regional", &[]),
            "Mt PNW Regional"
        );
    }

    #[test]
    fn test_group_cut_to_remaining_budget() {
        assert_eq!(
            allocate("Timberline Lodge", "Statewide Talk", &[]),
            "Timberline State"
        );
    }

    #[test]
    fn test_halves_without_separator() {
        // A single 16 character word leaves no room for any group text.
        assert_eq!(
            allocate("Wickersham-Ridge", "Statewide", &[]),
            "WickershStatewid"
        );
        // A 15 character word only leaves room for the separator.
        assert_eq!(allocate("Wickersham-Ridg", "XY", &[]), "WickershXY");
    }

    #[test]
    fn test_small_budgets() {
        assert_eq!(shrink_name("Abcdefghij", "Klmnopqrst", 12), "Abcdefghij K");
        assert_eq!(shrink_name("Abcdefghij", "Klmnopqrst", 5), "AbKl");
    }

    #[test]
    fn test_respects_custom_budget() {
        let limits = Limits {
            max_name_len: 10,
            max_zone_channels: 16,
        };
        let name = allocate_name("Mt Hood", "PNW Regional", &HashSet::new(), &limits);
        assert_eq!(name, "Mt PNW Reg");
    }

    #[test]
    fn test_collision_ends_in_two() {
        assert_eq!(allocate("Mt Hood", "PNW", &["Mt Hood PNW"]), "Mt Hood PN2");
    }

    #[test]
    fn test_collision_counter_increments() {
        assert_eq!(
            allocate("Mt Hood", "PNW", &["Mt Hood PNW", "Mt Hood PN2"]),
            "Mt Hood PN3"
        );
    }

    #[test]
    fn test_uniqueness_pass_runs_on_every_shrink_step() {
        assert_eq!(
            allocate("Wickersham-Ridge", "Statewide", &["WickershStatewid"]),
            "WickershStatewi2"
        );
    }

    #[test]
    fn test_two_digit_counter_overwrites_readable_text() {
        // Known sharp edge: the counter eats into the name rather than
        // growing it, so "Foo Bar9" is followed by "Foo Ba10".
        let taken: Vec<String> = (1..=9).map(|n| format!("Foo Bar{n}")).collect();
        let taken: Vec<&str> = taken.iter().map(String::as_str).collect();
        assert_eq!(allocate("Foo", "Bar1", &taken), "Foo Ba10");
    }

    #[test]
    fn test_allocation_is_deterministic() {
        let names = ["Mt Hood PNW", "Mt Hood PN2"];
        let first = allocate("Mt Hood", "PNW", &names);
        let second = allocate("Mt Hood", "PNW", &names);
        assert_eq!(first, second);
    }

    #[test]
    fn test_used_set_is_not_modified() {
        let names = used(&["Mt Hood PNW"]);
        let _ = allocate_name("Mt Hood", "PNW", &names, &Limits::default());
        assert_eq!(names, used(&["Mt Hood PNW"]));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 16 characters, 19 bytes.
        assert_eq!(allocate("Zürich", "Ålesund ø", &[]), "Zürich Ålesund ø");
    }

    #[test]
    fn test_blank_zone_name() {
        assert_eq!(allocate("", "Statewide", &[]), " Statewide");
        assert_eq!(allocate("   ", "TAC", &[]), "    TAC");
    }
}
