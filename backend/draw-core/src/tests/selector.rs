use crate::parser::parse_names;
use crate::selector::{select_positions, select_winners};

use models::{NameList, WinnerCount};

use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::StdRng;

const SEED: u64 = 0x5EED_1077;

/// **VALUE**: Verifies every valid (names, count) pair yields exactly `count` winners
/// drawn from the list.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one in the partial shuffle loop or a
/// truncate to the wrong length.
#[test]
fn given_valid_counts_when_selecting_then_length_matches_and_winners_come_from_list() {
    // GIVEN: A five-name list
    let names = parse_names("Ana, Bruno, Carla, Davi, Eva");
    let mut rng = StdRng::seed_from_u64(SEED);

    for count in 1..=names.len() {
        // WHEN: Selecting `count` winners
        let winners = select_winners(&names, WinnerCount::new(count as i64), &mut rng);

        // THEN: Exactly `count` distinct candidates from the list
        assert_eq!(winners.len(), count);
        assert!(winners.iter().all(|winner| names.iter().any(|n| n == winner)));
        let unique: HashSet<&str> = winners.iter().collect();
        assert_eq!(unique.len(), count, "no name drawn twice from a duplicate-free list");
    }
}

/// **VALUE**: Verifies selection is positional: no position is ever chosen twice.
///
/// **WHY THIS MATTERS**: Duplicate strings are separate candidates, so uniqueness must be
/// checked on positions, not on names.
#[test]
fn given_any_count_when_selecting_positions_then_positions_are_distinct_and_in_range() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for len in 1..=8 {
        for count in 0..=len {
            let positions = select_positions(len, count, &mut rng);

            assert_eq!(positions.len(), count);
            assert!(positions.iter().all(|&p| p < len));
            let unique: HashSet<usize> = positions.iter().copied().collect();
            assert_eq!(unique.len(), count);
        }
    }
}

#[test]
fn given_duplicate_names_when_selecting_all_then_each_copy_is_drawn() {
    let names = parse_names("a,a,b");
    let mut rng = StdRng::seed_from_u64(SEED);

    let winners = select_winners(&names, WinnerCount::new(3), &mut rng);

    let mut drawn: Vec<&str> = winners.iter().collect();
    drawn.sort_unstable();
    assert_eq!(drawn, ["a", "a", "b"]);
}

#[test]
fn given_same_seed_when_selecting_then_outcome_is_reproducible() {
    let names = parse_names("a,b,c,d,e,f");

    let first = select_winners(&names, WinnerCount::new(3), &mut StdRng::seed_from_u64(7));
    let second = select_winners(&names, WinnerCount::new(3), &mut StdRng::seed_from_u64(7));

    assert_eq!(first, second);
}

/// **VALUE**: Distribution check for single-winner draws.
///
/// **WHY THIS MATTERS**: A sort-by-random-comparator shuffle favours some positions.
/// Each candidate must win about `1/len` of the time.
///
/// **BUG THIS CATCHES**: Would catch a biased swap range such as `gen_range(0..len)`
/// (the classic naive shuffle) or `gen_range(i + 1..len)` (Sattolo's cycle, which
/// never leaves a position in place).
#[test]
fn given_many_single_winner_draws_when_counting_then_each_name_wins_about_equally() {
    // GIVEN: Four candidates and a fixed seed
    let names = NameList::from_segments(["A", "B", "C", "D"]);
    let mut rng = StdRng::seed_from_u64(SEED);
    let runs = 40_000;

    // WHEN: Drawing one winner many times
    let mut wins: HashMap<String, usize> = HashMap::new();
    for _ in 0..runs {
        let winners = select_winners(&names, WinnerCount::new(1), &mut rng);
        *wins.entry(winners.as_slice()[0].clone()).or_default() += 1;
    }

    // THEN: Every name lands within 2 points of 25%
    for name in names.iter() {
        let share = wins.get(name).copied().unwrap_or_default() as f64 / runs as f64;
        assert!((share - 0.25).abs() < 0.02, "{name} won {share:.4} of draws");
    }
}

#[test]
fn given_many_two_winner_draws_when_counting_then_every_ordered_pair_is_equally_likely() {
    let names = NameList::from_segments(["A", "B", "C"]);
    let mut rng = StdRng::seed_from_u64(SEED);
    let runs = 60_000;

    let mut outcomes: HashMap<(String, String), usize> = HashMap::new();
    for _ in 0..runs {
        let winners = select_winners(&names, WinnerCount::new(2), &mut rng);
        let pair = (winners.as_slice()[0].clone(), winners.as_slice()[1].clone());
        *outcomes.entry(pair).or_default() += 1;
    }

    assert_eq!(outcomes.len(), 6, "all ordered pairs should occur");
    for (pair, hits) in &outcomes {
        let share = *hits as f64 / runs as f64;
        assert!(
            (share - 1.0 / 6.0).abs() < 0.015,
            "{pair:?} occurred {share:.4} of draws"
        );
    }
}
