//! CSV export of the standings table.

use crate::logic::Standing;
use crate::models::TournamentError;
use serde::Serialize;

#[derive(Serialize)]
struct StandingRow<'a> {
    rank: usize,
    nickname: &'a str,
    score: u32,
}

/// Standings as CSV (`rank,nickname,score`), best first. Equal scores share a rank.
pub fn standings_csv(standings: &[Standing]) -> Result<String, TournamentError> {
    let mut sorted: Vec<&Standing> = standings.iter().collect();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));

    let mut wtr = csv::Writer::from_writer(Vec::new());
    let mut rank = 0;
    let mut prev_score = None;
    for (i, s) in sorted.iter().enumerate() {
        if prev_score != Some(s.score) {
            rank = i + 1;
            prev_score = Some(s.score);
        }
        wtr.serialize(StandingRow {
            rank,
            nickname: &s.nickname,
            score: s.score,
        })
        .map_err(|e| TournamentError::Internal(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| TournamentError::Internal(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TournamentError::Internal(e.to_string()))
}
