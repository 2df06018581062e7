use crate::error::{Error, Result};
use itertools::Itertools;
use log::info;
use std::cmp::Reverse;

/// Exhaustive search stops being practical beyond this. C(24, 12) is ~2.7M splits.
pub const MAX_ROSTER_SIZE: usize = 24;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub rating: i64,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, rating: i64) -> PlayerRecord {
        PlayerRecord {
            name: name.into(),
            rating,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceResult {
    pub team_a: Vec<PlayerRecord>,
    pub team_b: Vec<PlayerRecord>,
    pub avg_rating_a: i64,
    pub avg_rating_b: i64,
    pub rating_diff: i128,
}

/// Highest rating first. Stable, so equal ratings keep their lobby order.
pub fn sort_by_rating(roster: &[PlayerRecord]) -> Vec<PlayerRecord> {
    let mut sorted = roster.to_vec();
    sorted.sort_by_key(|player| Reverse(player.rating));
    sorted
}

/// Floor of the mean rating, 0 for an empty team.
pub fn average_rating(team: &[PlayerRecord]) -> i64 {
    if team.is_empty() {
        return 0;
    }
    let total: i128 = team.iter().map(|player| i128::from(player.rating)).sum();
    // a mean lies within the range of its inputs, so it narrows back to i64
    total.div_euclid(team.len() as i128) as i64
}

/// Splits the lobby into a team of `n / 2` players and a team of the rest,
/// minimizing the difference between the teams' rating totals.
///
/// Every combination of positions in the rating-sorted roster is tried in
/// lexicographic order and the first one reaching the minimum wins, so the
/// same lobby always produces the same teams. Both teams keep the sorted order.
pub fn balance(roster: &[PlayerRecord]) -> Result<BalanceResult> {
    if roster.len() > MAX_ROSTER_SIZE {
        return Err(Error::RosterTooLarge {
            size: roster.len(),
            max: MAX_ROSTER_SIZE,
        });
    }

    let sorted = sort_by_rating(roster);
    let half_size = sorted.len() / 2;
    // i128 so even extreme ratings can't overflow the totals
    let total: i128 = sorted.iter().map(|player| i128::from(player.rating)).sum();

    let mut best: Option<(Vec<usize>, i128)> = None;
    for combo in (0..sorted.len()).combinations(half_size) {
        let team_a_total: i128 = combo.iter().map(|&i| i128::from(sorted[i].rating)).sum();
        // |a - b| where b = total - a
        let diff = (2 * team_a_total - total).abs();

        if best.as_ref().is_none_or(|(_, best_diff)| diff < *best_diff) {
            best = Some((combo, diff));
            if diff == 0 {
                break;
            }
        }
    }

    // combinations(k) always yields at least one combination when k <= n
    let (chosen, rating_diff) = best.unwrap_or_default();
    info!("Found optimal team assignment with MMR difference of {}", rating_diff);

    // Split by position so duplicate name/rating pairs stay distinct players
    let mut on_team_a = vec![false; sorted.len()];
    for &i in chosen.iter() {
        on_team_a[i] = true;
    }
    let (team_a, team_b): (Vec<_>, Vec<_>) = sorted
        .into_iter()
        .zip(on_team_a)
        .partition(|(_, is_a)| *is_a);
    let team_a: Vec<PlayerRecord> = team_a.into_iter().map(|(player, _)| player).collect();
    let team_b: Vec<PlayerRecord> = team_b.into_iter().map(|(player, _)| player).collect();

    Ok(BalanceResult {
        avg_rating_a: average_rating(&team_a),
        avg_rating_b: average_rating(&team_b),
        team_a,
        team_b,
        rating_diff,
    })
}
