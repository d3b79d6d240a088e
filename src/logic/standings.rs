//! Standings: win counts derived from recorded matches.

use crate::models::{GameMatch, PlayerId, Tournament};
use serde::Serialize;

/// One row of the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub nickname: String,
    /// Matches won, round-robin and tie-break alike.
    pub score: u32,
}

/// Number of matches in `matches` won by `player`.
pub fn wins_for<'a>(matches: impl IntoIterator<Item = &'a GameMatch>, player: PlayerId) -> u32 {
    matches
        .into_iter()
        .filter(|m| m.winner == Some(player))
        .count() as u32
}

/// Score of every player, in registration order.
pub fn compute_standings(tournament: &Tournament) -> Vec<Standing> {
    tournament
        .players
        .iter()
        .map(|p| Standing {
            player_id: p.id,
            nickname: p.nickname.clone(),
            score: wins_for(&tournament.matches, p.id),
        })
        .collect()
}
