//! Registration: bulk player registration and round-robin match generation.

use crate::models::{GameMatch, Player, PlayerId, RoundType, Tournament, TournamentError};
use std::collections::HashSet;

/// All unordered pairs in list order: index i is paired with every higher index.
pub fn round_robin_pairs(players: &[PlayerId]) -> Vec<(PlayerId, PlayerId)> {
    players
        .iter()
        .enumerate()
        .flat_map(|(i, &p1)| players[i + 1..].iter().map(move |&p2| (p1, p2)))
        .collect()
}

/// One fresh (unplayed) match per pair of `players`, all in the given round.
pub fn generate_round_robin_matches(players: &[PlayerId], round: RoundType) -> Vec<GameMatch> {
    round_robin_pairs(players)
        .into_iter()
        .map(|(p1, p2)| GameMatch::new(p1, p2, round))
        .collect()
}

/// Register the full roster at once and schedule the round-robin.
///
/// Everything is validated before the tournament is touched: on error no player or match is added.
pub fn register_players<S: AsRef<str>>(
    tournament: &mut Tournament,
    nicknames: &[S],
) -> Result<(), TournamentError> {
    if !tournament.players.is_empty() {
        return Err(TournamentError::PlayersAlreadyRegistered);
    }
    if nicknames.len() != tournament.participants_count {
        return Err(TournamentError::WrongNumberOfPlayers {
            expected: tournament.participants_count,
            provided: nicknames.len(),
        });
    }

    let mut seen = HashSet::new();
    let mut players = Vec::with_capacity(nicknames.len());
    for name in nicknames {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyNickname);
        }
        if !seen.insert(name) {
            return Err(TournamentError::DuplicateNickname(name.to_string()));
        }
        players.push(Player::new(name));
    }

    let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
    let matches = generate_round_robin_matches(&ids, RoundType::RoundRobin);
    log::info!(
        "Tournament {}: registered {} players, scheduled {} matches",
        tournament.id,
        players.len(),
        matches.len()
    );

    tournament.players = players;
    tournament.matches = matches;
    Ok(())
}
