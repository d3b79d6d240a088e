//! Tournament business logic: registration, results, standings, winner resolution.

mod registration;
mod resolution;
mod results;
mod standings;

pub use registration::{generate_round_robin_matches, register_players, round_robin_pairs};
pub use resolution::{resolve_winner, Resolution};
pub use results::{record_match_result, start_match};
pub use standings::{compute_standings, wins_for, Standing};
