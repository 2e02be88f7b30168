//! Unbiased winner selection.

use models::{NameList, WinnerCount, WinnerList};

use rand::Rng;

/// Draw `count` winners from `names` without replacement.
///
/// Selection is by position, so a name entered twice is two candidates and
/// may win twice. The result order is the reveal order.
///
/// `count` must not exceed `names.len()`; the validator guarantees this
/// before a draw starts.
pub fn select_winners<R>(names: &NameList, count: WinnerCount, rng: &mut R) -> WinnerList
where
    R: Rng + ?Sized,
{
    let winners = select_positions(names.len(), count.get(), rng)
        .into_iter()
        .filter_map(|position| names.get(position))
        .map(String::from)
        .collect();

    WinnerList::new(winners)
}

/// Partial Fisher-Yates over `0..len`: after step `i` the prefix `0..=i` is a
/// uniform random ordered sample, so every ordered outcome is equally likely.
pub(crate) fn select_positions<R>(len: usize, count: usize, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    debug_assert!(count <= len, "selecting {count} of {len} candidates");
    let count = count.min(len);

    let mut positions: Vec<usize> = (0..len).collect();
    for i in 0..count {
        let j = rng.gen_range(i..len);
        positions.swap(i, j);
    }

    positions.truncate(count);
    positions
}
