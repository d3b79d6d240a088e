//! API views of a tournament and its matches (JSON response bodies).

use crate::logic::{compute_standings, resolve_winner, Resolution};
use crate::models::{
    GameMatch, MatchId, PlayerId, RoundType, Tournament, TournamentError, TournamentId,
    TournamentStatus,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Header block of [`TournamentView`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TournamentSummary {
    pub id: TournamentId,
    pub name: String,
    pub participants_count: usize,
    pub created_at: DateTime<Utc>,
    pub status: TournamentStatus,
    /// Single winner, the currently tied players, or empty while pending.
    pub winner_ids: Vec<PlayerId>,
    pub resolution: Resolution,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub nickname: String,
    pub score: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchView {
    pub id: MatchId,
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub score_player1: Option<u32>,
    pub score_player2: Option<u32>,
    pub winner: Option<PlayerId>,
    pub is_complete: bool,
    pub is_additional: bool,
    pub round: RoundType,
}

impl From<&GameMatch> for MatchView {
    fn from(m: &GameMatch) -> Self {
        Self {
            id: m.id,
            player1: m.player_1,
            player2: m.player_2,
            score_player1: m.score_player_1,
            score_player2: m.score_player_2,
            winner: m.winner,
            is_complete: m.is_complete,
            is_additional: m.is_additional(),
            round: m.round,
        }
    }
}

/// Everything a client needs to render a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TournamentView {
    pub tournament: TournamentSummary,
    pub players: Vec<PlayerView>,
    pub matches: Vec<MatchView>,
}

/// Build the view. Resolves the winner first, which may schedule a tie-break round.
pub fn tournament_view(tournament: &mut Tournament, max_tiebreak_rounds: u32) -> TournamentView {
    let resolution = resolve_winner(tournament, max_tiebreak_rounds);
    let players = compute_standings(tournament)
        .into_iter()
        .map(|s| PlayerView {
            id: s.player_id,
            nickname: s.nickname,
            score: s.score,
        })
        .collect();
    TournamentView {
        tournament: TournamentSummary {
            id: tournament.id,
            name: tournament.name.clone(),
            participants_count: tournament.participants_count,
            created_at: tournament.created_at,
            status: tournament.status(),
            winner_ids: resolution.winner_ids(),
            resolution,
        },
        players,
        matches: tournament.matches.iter().map(MatchView::from).collect(),
    }
}

/// Returned when a client starts playing a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchStart {
    pub match_id: MatchId,
    pub tournament_id: TournamentId,
    pub player1: String,
    pub player2: String,
}

/// Match details keyed by nickname rather than id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchDetails {
    pub player1: String,
    pub player2: String,
    pub score_player1: Option<u32>,
    pub score_player2: Option<u32>,
    pub winner: Option<String>,
    pub is_complete: bool,
}

pub fn match_details(tournament: &Tournament, match_id: MatchId) -> Result<MatchDetails, TournamentError> {
    let m = tournament
        .get_match(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    Ok(MatchDetails {
        player1: tournament.nickname(m.player_1)?.to_string(),
        player2: tournament.nickname(m.player_2)?.to_string(),
        score_player1: m.score_player_1,
        score_player2: m.score_player_2,
        winner: m
            .winner
            .map(|w| tournament.nickname(w).map(str::to_string))
            .transpose()?,
        is_complete: m.is_complete,
    })
}
