use crate::api::errors::ConfigError;
use core::fmt;
use core::str::FromStr;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use tracing::warn;

/// Strategy used to pick a subset of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Evenly spaced indices starting at the first file.
    #[default]
    Even,

    /// Uniform sample without replacement, re-sorted into input order.
    Random,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Even => "even",
            SelectionMode::Random => "random",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "even" => Ok(SelectionMode::Even),
            "random" => Ok(SelectionMode::Random),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// How many files to select, either absolute or relative to the number available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionAmount {
    Count(usize),
    Ratio(f64),
}

impl SelectionAmount {
    /// Resolves to a concrete count for `total` available files.
    ///
    /// A ratio rounds half to even and selects at least one file.
    /// The result never exceeds `total`; a larger request is clamped with a warning.
    pub fn resolve(&self, total: usize) -> usize {
        let requested = match *self {
            SelectionAmount::Count(count) => count,
            SelectionAmount::Ratio(ratio) => {
                ((total as f64 * ratio).round_ties_even() as usize).max(1)
            }
        };

        if requested > total {
            warn!(
                "Selection count ({}) exceeds available files ({}), selecting all",
                requested, total
            );
            return total;
        }

        requested
    }
}

/// Evenly spaced indices: index `i` maps to `floor(i * n / count)`.
///
/// Computed in integer arithmetic, so the indices are strictly increasing and the first
/// is always 0. Selects every index when `count >= n`.
pub fn select_even_indices(n: usize, count: usize) -> Vec<usize> {
    if count >= n {
        return (0..n).collect();
    }

    (0..count)
        .map(|i| (i as u128 * n as u128 / count as u128) as usize)
        .collect()
}

/// `count` distinct indices drawn uniformly from `0..n`, sorted ascending.
///
/// The same `seed` always yields the same indices; without a seed the generator is
/// seeded from the thread-local generator. Selects every index when `count >= n`.
pub fn select_random_indices(n: usize, count: usize, seed: Option<u64>) -> Vec<usize> {
    if count >= n {
        return (0..n).collect();
    }

    let mut rng = match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
    };

    let mut indices = rand::seq::index::sample(&mut rng, n, count).into_vec();
    indices.sort_unstable();
    indices
}

/// Selects `count` of `items` with the given strategy, preserving input order.
///
/// # Arguments
/// * `items` - The ordered candidates
/// * `count` - Number of items to select; values above `items.len()` select everything
/// * `mode` - Selection strategy
/// * `seed` - Seed for [`SelectionMode::Random`], ignored otherwise
pub fn select_files<T: Clone>(
    items: &[T],
    count: usize,
    mode: SelectionMode,
    seed: Option<u64>,
) -> Vec<T> {
    let indices = match mode {
        SelectionMode::Even => select_even_indices(items.len(), count),
        SelectionMode::Random => select_random_indices(items.len(), count, seed),
    };

    indices.into_iter().map(|i| items[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::rstest;

    #[test]
    fn even_ten_of_hundred() {
        assert_eq!(
            select_even_indices(100, 10),
            vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90]
        );
    }

    #[rstest(n, count, expected,
        case(10, 3, vec![0, 3, 6]),
        case(7, 2, vec![0, 3]),
        case(5, 5, vec![0, 1, 2, 3, 4]),     // Identity
        case(3, 10, vec![0, 1, 2]),          // More requested than available
        case(0, 4, vec![]),
        case(10, 0, vec![])
    )]
    fn even_indices(n: usize, count: usize, expected: Vec<usize>) {
        assert_eq!(select_even_indices(n, count), expected);
    }

    #[test]
    fn even_indices_are_strictly_increasing() {
        for n in 1..=200 {
            for count in 1..=n {
                let indices = select_even_indices(n, count);
                assert_eq!(indices.len(), count);
                assert_eq!(indices[0], 0);
                assert!(indices.iter().tuple_windows().all(|(a, b)| a < b));
                assert!(*indices.last().unwrap() < n);
            }
        }
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let first = select_random_indices(100, 10, Some(42));
        let second = select_random_indices(100, 10, Some(42));
        assert_eq!(first, second);
    }

    #[test]
    fn random_indices_are_sorted_distinct_and_in_range() {
        for seed in 0..50 {
            let indices = select_random_indices(37, 12, Some(seed));
            assert_eq!(indices.len(), 12);
            assert!(indices.iter().tuple_windows().all(|(a, b)| a < b));
            assert!(indices.iter().all(|&i| i < 37));
        }
    }

    #[test]
    fn unseeded_random_selects_requested_count() {
        let indices = select_random_indices(20, 5, None);
        assert_eq!(indices.len(), 5);
        assert!(indices.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[rstest]
    fn whole_set_when_count_covers_it(
        #[values(SelectionMode::Even, SelectionMode::Random)] mode: SelectionMode,
    ) {
        let items = vec!["a", "b", "c"];
        assert_eq!(select_files(&items, 3, mode, Some(1)), items);
        assert_eq!(select_files(&items, 8, mode, None), items);
    }

    #[test]
    fn select_files_keeps_input_order() {
        let items: Vec<String> = (1..=10).map(|i| format!("part_{:02}.jsonl", i)).collect();
        let selected = select_files(&items, 4, SelectionMode::Random, Some(7));
        assert_eq!(selected.len(), 4);
        assert!(selected.iter().tuple_windows().all(|(a, b)| a < b));

        let even = select_files(&items, 5, SelectionMode::Even, None);
        assert_eq!(
            even,
            vec![
                "part_01.jsonl",
                "part_03.jsonl",
                "part_05.jsonl",
                "part_07.jsonl",
                "part_09.jsonl"
            ]
        );
    }

    #[rstest(amount, total, expected,
        case(SelectionAmount::Ratio(0.1), 100, 10),
        case(SelectionAmount::Ratio(0.1), 5, 1),     // 0.5 rounds to even, then at least one
        case(SelectionAmount::Ratio(0.25), 10, 2),   // 2.5 rounds to even
        case(SelectionAmount::Ratio(0.35), 10, 4),   // 3.5 rounds to even
        case(SelectionAmount::Ratio(0.01), 10, 1),   // At least one
        case(SelectionAmount::Ratio(2.0), 10, 10),   // Clamped
        case(SelectionAmount::Count(3), 10, 3),
        case(SelectionAmount::Count(30), 10, 10)     // Clamped
    )]
    fn amount_resolves(amount: SelectionAmount, total: usize, expected: usize) {
        assert_eq!(amount.resolve(total), expected);
    }

    #[rstest(text, expected,
        case("even", SelectionMode::Even),
        case("random", SelectionMode::Random)
    )]
    fn mode_parses(text: &str, expected: SelectionMode) {
        let mode: SelectionMode = text.parse().unwrap();
        assert_eq!(mode, expected);
        assert_eq!(mode.to_string(), text);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(matches!(
            "shuffle".parse::<SelectionMode>(),
            Err(ConfigError::InvalidMode(mode)) if mode == "shuffle"
        ));
    }
}
