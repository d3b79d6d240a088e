//! Data structures for the round-robin tournament: players, matches, tournament.

mod game;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, RoundType};
pub use player::{Player, PlayerId};
pub use tournament::{
    ErrorKind, Tournament, TournamentError, TournamentId, TournamentStatus, MAX_PARTICIPANTS,
    MIN_PARTICIPANTS,
};
