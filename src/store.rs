//! In-memory tournament store shared by request handlers.
//!
//! Each operation holds the lock for its whole read-modify-write, so registration (players plus
//! schedule) is atomic and concurrent submissions for one match serialize: the later one sees
//! the match complete.

use crate::config::ResolverSettings;
use crate::export;
use crate::logic::{self, compute_standings};
use crate::models::{GameMatch, MatchId, Tournament, TournamentError, TournamentId};
use crate::view::{self, MatchDetails, MatchStart, TournamentView};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Inner {
    tournaments: HashMap<TournamentId, Tournament>,
    /// Which tournament owns each match.
    match_owner: HashMap<MatchId, TournamentId>,
}

impl Inner {
    fn tournament_mut(&mut self, id: TournamentId) -> Result<&mut Tournament, TournamentError> {
        self.tournaments
            .get_mut(&id)
            .ok_or(TournamentError::TournamentNotFound(id))
    }

    fn owner_of(&self, match_id: MatchId) -> Result<TournamentId, TournamentError> {
        self.match_owner
            .get(&match_id)
            .copied()
            .ok_or(TournamentError::MatchNotFound(match_id))
    }

    fn tournament_of_match(&self, match_id: MatchId) -> Result<&Tournament, TournamentError> {
        let id = self.owner_of(match_id)?;
        self.tournaments
            .get(&id)
            .ok_or(TournamentError::MatchNotFound(match_id))
    }

    /// Index matches added since the last call (registration or a new tie-break round).
    fn index_matches(&mut self, id: TournamentId) {
        if let Some(t) = self.tournaments.get(&id) {
            for m in &t.matches {
                self.match_owner.entry(m.id).or_insert(id);
            }
        }
    }
}

/// Thread-safe collection of tournaments.
#[derive(Default)]
pub struct TournamentStore {
    inner: RwLock<Inner>,
    settings: ResolverSettings,
}

impl TournamentStore {
    pub fn new(settings: ResolverSettings) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            settings,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, TournamentError> {
        self.inner
            .read()
            .map_err(|_| TournamentError::Internal("lock error".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, TournamentError> {
        self.inner
            .write()
            .map_err(|_| TournamentError::Internal("lock error".to_string()))
    }

    /// Create an empty tournament and return its id.
    pub fn create_tournament(
        &self,
        participants_count: usize,
        name: Option<&str>,
    ) -> Result<TournamentId, TournamentError> {
        let tournament = Tournament::new(participants_count, name)?;
        let id = tournament.id;
        self.write()?.tournaments.insert(id, tournament);
        log::info!("Created tournament {} for {} players", id, participants_count);
        Ok(id)
    }

    /// Register the roster and schedule the round-robin in one step.
    pub fn register_players<S: AsRef<str>>(
        &self,
        id: TournamentId,
        nicknames: &[S],
    ) -> Result<TournamentView, TournamentError> {
        let mut g = self.write()?;
        logic::register_players(g.tournament_mut(id)?, nicknames)?;
        g.index_matches(id);
        let view = view::tournament_view(g.tournament_mut(id)?, self.settings.max_tiebreak_rounds);
        Ok(view)
    }

    /// Record a final score. Exactly one submission per match succeeds.
    pub fn submit_match_result(
        &self,
        match_id: MatchId,
        score_1: u32,
        score_2: u32,
    ) -> Result<GameMatch, TournamentError> {
        let mut g = self.write()?;
        let id = g.owner_of(match_id)?;
        let t = g.tournament_mut(id)?;
        let m = logic::record_match_result(t, match_id, score_1, score_2)?;
        Ok(m.clone())
    }

    pub fn start_match(&self, match_id: MatchId) -> Result<MatchStart, TournamentError> {
        let g = self.read()?;
        logic::start_match(g.tournament_of_match(match_id)?, match_id)
    }

    pub fn match_details(&self, match_id: MatchId) -> Result<MatchDetails, TournamentError> {
        let g = self.read()?;
        view::match_details(g.tournament_of_match(match_id)?, match_id)
    }

    /// Current view of a tournament. Takes the write lock because resolving the winner may
    /// schedule a tie-break round.
    pub fn view(&self, id: TournamentId) -> Result<TournamentView, TournamentError> {
        let mut g = self.write()?;
        let view = view::tournament_view(g.tournament_mut(id)?, self.settings.max_tiebreak_rounds);
        g.index_matches(id);
        Ok(view)
    }

    pub fn standings_csv(&self, id: TournamentId) -> Result<String, TournamentError> {
        let g = self.read()?;
        let t = g
            .tournaments
            .get(&id)
            .ok_or(TournamentError::TournamentNotFound(id))?;
        export::standings_csv(&compute_standings(t))
    }

    /// Snapshot of a stored tournament.
    pub fn get(&self, id: TournamentId) -> Result<Tournament, TournamentError> {
        self.read()?
            .tournaments
            .get(&id)
            .cloned()
            .ok_or(TournamentError::TournamentNotFound(id))
    }
}
