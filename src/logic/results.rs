//! Match results: starting a match and recording its final score.

use crate::models::{GameMatch, MatchId, Tournament, TournamentError};
use crate::view::MatchStart;

/// Record the final score of a match. Fails if the match is unknown or already complete.
pub fn record_match_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    score_1: u32,
    score_2: u32,
) -> Result<&GameMatch, TournamentError> {
    let tournament_id = tournament.id;
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.record_result(score_1, score_2)?;
    log::info!(
        "Tournament {}: match {} finished {}-{}",
        tournament_id,
        match_id,
        score_1,
        score_2
    );
    Ok(m)
}

/// Pairing info for a match about to be played. Completed matches cannot be started.
pub fn start_match(tournament: &Tournament, match_id: MatchId) -> Result<MatchStart, TournamentError> {
    let m = tournament
        .get_match(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.is_complete {
        return Err(TournamentError::MatchAlreadyComplete(match_id));
    }
    Ok(MatchStart {
        match_id,
        tournament_id: tournament.id,
        player1: tournament.nickname(m.player_1)?.to_string(),
        player2: tournament.nickname(m.player_2)?.to_string(),
    })
}
