//! Tournament, TournamentStatus and the error type shared by all operations.

use crate::models::game::{GameMatch, MatchId, RoundType};
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Smallest allowed roster.
pub const MIN_PARTICIPANTS: usize = 3;
/// Largest allowed roster.
pub const MAX_PARTICIPANTS: usize = 8;

const DEFAULT_NAME: &str = "Tournament";

/// Coarse classification of [`TournamentError`], used to pick a response status.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    AlreadyComplete,
    Internal,
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Participant count outside 3..=8.
    InvalidParticipantCount(usize),
    /// Players can only be registered once.
    PlayersAlreadyRegistered,
    /// Number of nicknames does not match the declared participant count.
    WrongNumberOfPlayers { expected: usize, provided: usize },
    /// A nickname is empty after trimming.
    EmptyNickname,
    /// The same nickname was submitted twice.
    DuplicateNickname(String),
    TournamentNotFound(Uuid),
    MatchNotFound(MatchId),
    /// A match references a player missing from the roster.
    PlayerNotFound(PlayerId),
    /// Results can only be recorded once per match.
    MatchAlreadyComplete(MatchId),
    /// Unexpected failure in the store (e.g. a poisoned lock).
    Internal(String),
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        use TournamentError::*;
        match self {
            InvalidParticipantCount(_)
            | PlayersAlreadyRegistered
            | WrongNumberOfPlayers { .. }
            | EmptyNickname
            | DuplicateNickname(_) => ErrorKind::Validation,
            TournamentNotFound(_) | MatchNotFound(_) => ErrorKind::NotFound,
            MatchAlreadyComplete(_) => ErrorKind::AlreadyComplete,
            PlayerNotFound(_) | Internal(_) => ErrorKind::Internal,
        }
    }
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidParticipantCount(n) => write!(
                f,
                "participants_count must be between {} and {} (got {})",
                MIN_PARTICIPANTS, MAX_PARTICIPANTS, n
            ),
            TournamentError::PlayersAlreadyRegistered => {
                write!(f, "Players are already registered for this tournament")
            }
            TournamentError::WrongNumberOfPlayers { expected, provided } => write!(
                f,
                "Number of nicknames must match participants_count (expected {}, got {})",
                expected, provided
            ),
            TournamentError::EmptyNickname => write!(f, "Nicknames must not be empty"),
            TournamentError::DuplicateNickname(name) => {
                write!(f, "Duplicate nickname detected: {}", name)
            }
            TournamentError::TournamentNotFound(_) => write!(f, "Tournament not found"),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            TournamentError::MatchAlreadyComplete(_) => write!(f, "Match is already completed"),
            TournamentError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Derived status: complete once every round-robin match has a result.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TournamentStatus {
    Incomplete,
    Complete,
}

/// Full tournament state: roster and every match played or scheduled.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Declared roster size; registration must supply exactly this many nicknames.
    pub participants_count: usize,
    pub created_at: DateTime<Utc>,
    /// Registration order. Empty until players are registered.
    pub players: Vec<Player>,
    /// Round-robin matches first, then tie-break rounds in order.
    pub matches: Vec<GameMatch>,
}

impl Tournament {
    /// Create an empty tournament. `participants_count` must be within 3..=8.
    pub fn new(participants_count: usize, name: Option<&str>) -> Result<Self, TournamentError> {
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&participants_count) {
            return Err(TournamentError::InvalidParticipantCount(participants_count));
        }
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_NAME);
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            participants_count,
            created_at: Utc::now(),
            players: Vec::new(),
            matches: Vec::new(),
        })
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    pub fn nickname(&self, id: PlayerId) -> Result<&str, TournamentError> {
        self.get_player(id)
            .map(|p| p.nickname.as_str())
            .ok_or(TournamentError::PlayerNotFound(id))
    }

    /// Matches of one round (round-robin or a specific tie-break round).
    pub fn matches_in_round(&self, round: RoundType) -> impl Iterator<Item = &GameMatch> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    /// True when players are registered and every round-robin match has a result.
    /// Tie-break matches are not considered.
    pub fn is_complete(&self) -> bool {
        !self.players.is_empty()
            && self
                .matches_in_round(RoundType::RoundRobin)
                .all(|m| m.is_complete)
    }

    pub fn status(&self) -> TournamentStatus {
        if self.is_complete() {
            TournamentStatus::Complete
        } else {
            TournamentStatus::Incomplete
        }
    }
}
