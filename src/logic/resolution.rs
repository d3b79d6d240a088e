//! Winner resolution: picks the tournament winner once the round-robin is done and schedules
//! tie-break rounds while several players share first place.
//!
//! Round r (r >= 1) is a round-robin among the players still tied after round r - 1 (or after
//! the regular schedule for r = 1). Only wins in the latest round decide who stays tied; every
//! participant of a round entered it with the same overall score, so this agrees with the overall
//! standings. Rounds stop at `max_tiebreak_rounds`, after which the tie is reported as a deadlock.

use crate::logic::registration::generate_round_robin_matches;
use crate::logic::standings::wins_for;
use crate::models::{PlayerId, RoundType, Tournament};
use serde::Serialize;

/// Outcome of [`resolve_winner`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Resolution {
    /// Round-robin matches are still being played.
    Pending,
    /// A single player holds first place.
    Winner { player: PlayerId },
    /// Several players are tied; tie-break round `round` is scheduled or in progress.
    TieBreak { round: u32, tied: Vec<PlayerId> },
    /// Still tied after the last allowed tie-break round; needs resolving outside the system.
    Deadlock { tied: Vec<PlayerId> },
}

impl Resolution {
    /// The winner, the tied players, or nothing while pending.
    pub fn winner_ids(&self) -> Vec<PlayerId> {
        match self {
            Resolution::Pending => Vec::new(),
            Resolution::Winner { player } => vec![*player],
            Resolution::TieBreak { tied, .. } | Resolution::Deadlock { tied } => tied.clone(),
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Resolution::Winner { player } => Some(*player),
            _ => None,
        }
    }
}

/// Players of `candidates` with the most wins over matches of `round`. Keeps candidate order.
fn leaders(tournament: &Tournament, round: RoundType, candidates: &[PlayerId]) -> Vec<PlayerId> {
    let scored: Vec<(PlayerId, u32)> = candidates
        .iter()
        .map(|&p| (p, wins_for(tournament.matches_in_round(round), p)))
        .collect();
    let max = scored.iter().map(|&(_, s)| s).max().unwrap_or(0);
    scored
        .into_iter()
        .filter(|&(_, s)| s == max)
        .map(|(p, _)| p)
        .collect()
}

/// Resolve the winner, scheduling the next tie-break round when one is due.
///
/// This is the only place tie-break matches are created, so repeated calls without new results
/// return the same resolution and leave the tournament unchanged.
pub fn resolve_winner(tournament: &mut Tournament, max_tiebreak_rounds: u32) -> Resolution {
    if !tournament.is_complete() {
        return Resolution::Pending;
    }

    let roster: Vec<PlayerId> = tournament.players.iter().map(|p| p.id).collect();
    let mut tied = leaders(tournament, RoundType::RoundRobin, &roster);
    let mut round = 1;

    loop {
        if tied.len() == 1 {
            let player = tied[0];
            log::debug!("Tournament {}: winner {}", tournament.id, player);
            return Resolution::Winner { player };
        }

        let stage = RoundType::TieBreak(round);
        let (scheduled, complete) = tournament
            .matches_in_round(stage)
            .fold((0usize, true), |(n, all), m| (n + 1, all && m.is_complete));

        if scheduled == 0 {
            if round > max_tiebreak_rounds {
                log::debug!(
                    "Tournament {}: {} players still tied after {} tie-break rounds",
                    tournament.id,
                    tied.len(),
                    max_tiebreak_rounds
                );
                return Resolution::Deadlock { tied };
            }
            let matches = generate_round_robin_matches(&tied, stage);
            log::info!(
                "Tournament {}: {} players tied, scheduling tie-break round {} ({} matches)",
                tournament.id,
                tied.len(),
                round,
                matches.len()
            );
            tournament.matches.extend(matches);
            return Resolution::TieBreak { round, tied };
        }

        if !complete {
            return Resolution::TieBreak { round, tied };
        }

        tied = leaders(tournament, stage, &tied);
        round += 1;
    }
}
