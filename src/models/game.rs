//! Match (game) and RoundType for 1v1 games.

use crate::models::player::PlayerId;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which schedule a match belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundType {
    /// The initial full round-robin, created at registration.
    RoundRobin,
    /// Additional matches among players tied for first; rounds are numbered from 1.
    TieBreak(u32),
}

/// A single 1v1 match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub player_1: PlayerId,
    pub player_2: PlayerId,
    /// None until the match is finished.
    pub score_player_1: Option<u32>,
    pub score_player_2: Option<u32>,
    /// None if not yet played or drawn.
    pub winner: Option<PlayerId>,
    pub is_complete: bool,
    pub round: RoundType,
}

impl GameMatch {
    pub fn new(player_1: PlayerId, player_2: PlayerId, round: RoundType) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_1,
            player_2,
            score_player_1: None,
            score_player_2: None,
            winner: None,
            is_complete: false,
            round,
        }
    }

    /// True for tie-break matches.
    pub fn is_additional(&self) -> bool {
        self.round != RoundType::RoundRobin
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.player_1 == player || self.player_2 == player
    }

    /// Record the final score. The higher score wins; equal scores are a draw.
    pub fn record_result(&mut self, score_1: u32, score_2: u32) -> Result<(), TournamentError> {
        if self.is_complete {
            return Err(TournamentError::MatchAlreadyComplete(self.id));
        }
        self.score_player_1 = Some(score_1);
        self.score_player_2 = Some(score_2);
        self.winner = match score_1.cmp(&score_2) {
            std::cmp::Ordering::Greater => Some(self.player_1),
            std::cmp::Ordering::Less => Some(self.player_2),
            std::cmp::Ordering::Equal => None,
        };
        self.is_complete = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_leaves_winner_empty() {
        let mut m = GameMatch::new(Uuid::new_v4(), Uuid::new_v4(), RoundType::RoundRobin);
        m.record_result(2, 2).unwrap();
        assert!(m.is_complete);
        assert_eq!(m.winner, None);
        assert_eq!(m.score_player_1, Some(2));
    }

    #[test]
    fn second_result_is_rejected_and_keeps_first() {
        let mut m = GameMatch::new(Uuid::new_v4(), Uuid::new_v4(), RoundType::TieBreak(1));
        m.record_result(0, 5).unwrap();
        assert!(matches!(
            m.record_result(5, 0),
            Err(TournamentError::MatchAlreadyComplete(id)) if id == m.id
        ));
        assert_eq!(m.winner, Some(m.player_2));
        assert_eq!(m.score_player_1, Some(0));
        assert!(m.is_additional());
    }
}
