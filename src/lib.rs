//! Round-robin tournament manager: library with models, business logic and an in-memory store.

pub mod config;
pub mod export;
pub mod logic;
pub mod models;
pub mod store;
pub mod view;

pub use config::{ResolverSettings, ServerConfig};
pub use logic::{
    compute_standings, generate_round_robin_matches, record_match_result, register_players,
    resolve_winner, round_robin_pairs, start_match, Resolution, Standing,
};
pub use models::{
    ErrorKind, GameMatch, MatchId, Player, PlayerId, RoundType, Tournament, TournamentError,
    TournamentId, TournamentStatus,
};
pub use store::TournamentStore;
pub use view::{tournament_view, MatchDetails, MatchStart, TournamentView};
