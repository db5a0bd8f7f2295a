use proptest::prelude::*;

use durphrase::{format_duration, format_duration_with, FormatOptions, TimeUnit};

/// Reads "<count> <unit>[s]" fragments back out of a phrase and sums them.
fn recombine(phrase: &str) -> u64 {
    if phrase == "now" {
        return 0;
    }
    phrase
        .split(", ")
        .flat_map(|chunk| chunk.split(" and "))
        .map(|fragment| {
            let (count, name) = fragment.split_once(' ').unwrap();
            let count: u64 = count.parse().unwrap();
            let name = name.strip_suffix('s').unwrap_or(name);
            let unit = TimeUnit::ALL
                .into_iter()
                .find(|u| u.name() == name)
                .unwrap();
            count * unit.seconds()
        })
        .sum()
}

proptest! {
    /// Printed counts times unit sizes add back up to the input.
    #[test]
    fn phrase_conserves_seconds(secs in 0i64..i64::MAX) {
        let phrase = format_duration(secs).unwrap();
        prop_assert_eq!(recombine(&phrase), secs as u64);
    }

    /// " and " appears at most once and is never preceded by a comma.
    #[test]
    fn single_conjunction(secs in 1i64..10_000_000_000) {
        let phrase = format_duration(secs).unwrap();
        prop_assert!(phrase.matches(" and ").count() <= 1);
        prop_assert!(!phrase.contains(", and"));
        prop_assert_eq!(phrase.trim(), phrase.as_str());
    }

    /// A count of exactly one never takes a plural suffix.
    #[test]
    fn plural_only_when_not_one(secs in 1i64..10_000_000_000) {
        let phrase = format_duration(secs).unwrap();
        for fragment in phrase.split(", ").flat_map(|c| c.split(" and ")) {
            let (count, name) = fragment.split_once(' ').unwrap();
            prop_assert_eq!(count == "1", !name.ends_with('s'));
        }
    }

    /// Every negative input is rejected with its own value in the message.
    #[test]
    fn negative_rejected(secs in i64::MIN..0) {
        let err = format_duration(secs).unwrap_err();
        prop_assert_eq!(err.to_string(), format!("Duration cannot be negative: {}", secs));
    }

    /// Limiting units keeps a prefix of the full decomposition.
    #[test]
    fn max_units_is_prefix(secs in 1i64..10_000_000_000, max in 1usize..6) {
        let full = format_duration(secs).unwrap();
        let short = format_duration_with(secs, &FormatOptions { max_units: Some(max) }).unwrap();
        let first = short.split(" and ").next().unwrap();
        prop_assert!(full.starts_with(first));
        prop_assert!(recombine(&short) <= secs as u64);
    }
}
