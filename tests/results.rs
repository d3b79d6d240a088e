//! Integration tests for match results and standings.

use round_robin_tournament::{
    compute_standings, record_match_result, register_players, start_match, view::match_details,
    GameMatch, RoundType, Tournament, TournamentError, TournamentStatus,
};
use uuid::Uuid;

fn tournament(n: usize) -> Tournament {
    let names: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
    let mut t = Tournament::new(n, None).unwrap();
    register_players(&mut t, &names).unwrap();
    t
}

#[test]
fn higher_score_wins_and_equal_is_draw() {
    let mut t = tournament(3);
    let ids: Vec<_> = t.matches.iter().map(|m| m.id).collect();

    let m = record_match_result(&mut t, ids[0], 5, 3).unwrap().clone();
    assert_eq!(m.winner, Some(m.player_1));
    assert!(m.is_complete);

    let m = record_match_result(&mut t, ids[1], 1, 4).unwrap().clone();
    assert_eq!(m.winner, Some(m.player_2));

    let m = record_match_result(&mut t, ids[2], 2, 2).unwrap().clone();
    assert_eq!(m.winner, None);
    assert!(m.is_complete);

    assert_eq!(t.status(), TournamentStatus::Complete);
}

#[test]
fn completed_match_is_not_resubmitted() {
    let mut t = tournament(3);
    let id = t.matches[0].id;
    record_match_result(&mut t, id, 3, 1).unwrap();
    let before = t.matches[0].clone();

    assert_eq!(
        record_match_result(&mut t, id, 0, 9),
        Err(TournamentError::MatchAlreadyComplete(id))
    );
    assert_eq!(t.matches[0], before);
}

#[test]
fn unknown_match_is_not_found() {
    let mut t = tournament(3);
    let missing = Uuid::new_v4();
    assert_eq!(
        record_match_result(&mut t, missing, 1, 0),
        Err(TournamentError::MatchNotFound(missing))
    );
    assert_eq!(start_match(&t, missing), Err(TournamentError::MatchNotFound(missing)));
}

#[test]
fn start_match_returns_nicknames_until_played() {
    let mut t = tournament(3);
    let id = t.matches[0].id;
    let start = start_match(&t, id).unwrap();
    assert_eq!(start.tournament_id, t.id);
    assert_eq!((start.player1.as_str(), start.player2.as_str()), ("P0", "P1"));

    record_match_result(&mut t, id, 1, 0).unwrap();
    assert_eq!(start_match(&t, id), Err(TournamentError::MatchAlreadyComplete(id)));
}

#[test]
fn scores_sum_to_decided_matches() {
    let mut t = tournament(5);
    let ids: Vec<_> = t.matches.iter().map(|m| m.id).collect();
    for (i, id) in ids.iter().enumerate() {
        // every third match is a draw, the rest alternate winners
        let (s1, s2) = match i % 3 {
            0 => (2, 2),
            1 => (3, 0),
            _ => (0, 3),
        };
        record_match_result(&mut t, *id, s1, s2).unwrap();
    }

    let standings = compute_standings(&t);
    let decided = t.matches.iter().filter(|m| m.is_complete && m.winner.is_some()).count();
    assert_eq!(standings.iter().map(|s| s.score as usize).sum::<usize>(), decided);
    for s in &standings {
        let won = t.matches.iter().filter(|m| m.winner == Some(s.player_id)).count();
        assert_eq!(s.score as usize, won);
    }
}

#[test]
fn dangling_player_reference_is_reported() {
    let mut t = tournament(3);
    let ghost = Uuid::new_v4();
    let m = GameMatch::new(t.players[0].id, ghost, RoundType::RoundRobin);
    let id = m.id;
    t.matches.push(m);

    assert_eq!(start_match(&t, id), Err(TournamentError::PlayerNotFound(ghost)));
    assert_eq!(match_details(&t, id), Err(TournamentError::PlayerNotFound(ghost)));
}
