//! Integration tests for the shared tournament store.

use round_robin_tournament::{
    ErrorKind, ResolverSettings, RoundType, TournamentError, TournamentStatus, TournamentStore,
};
use std::sync::Arc;
use std::thread;
use uuid::Uuid;

fn store() -> TournamentStore {
    TournamentStore::new(ResolverSettings::default())
}

#[test]
fn create_validates_participant_count() {
    let s = store();
    assert_eq!(
        s.create_tournament(2, None),
        Err(TournamentError::InvalidParticipantCount(2))
    );
    assert_eq!(s.create_tournament(9, None).unwrap_err().kind(), ErrorKind::Validation);
    let id = s.create_tournament(8, Some("Friday Pong")).unwrap();
    assert_eq!(s.get(id).unwrap().name, "Friday Pong");
}

#[test]
fn empty_tournament_is_incomplete_without_winner() {
    let s = store();
    let id = s.create_tournament(3, None).unwrap();
    let view = s.view(id).unwrap();
    assert_eq!(view.tournament.status, TournamentStatus::Incomplete);
    assert!(view.tournament.winner_ids.is_empty());
    assert!(view.matches.is_empty());
}

#[test]
fn unknown_ids_are_not_found() {
    let s = store();
    let missing = Uuid::new_v4();
    assert_eq!(s.view(missing), Err(TournamentError::TournamentNotFound(missing)));
    assert_eq!(
        s.register_players(missing, &["A", "B", "C"]).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        s.submit_match_result(missing, 1, 0),
        Err(TournamentError::MatchNotFound(missing))
    );
    assert_eq!(s.match_details(missing).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn failed_registration_leaves_tournament_empty() {
    let s = store();
    let id = s.create_tournament(4, None).unwrap();
    let err = s.register_players(id, &["A", "B", "B", "C"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let t = s.get(id).unwrap();
    assert!(t.players.is_empty());
    assert!(t.matches.is_empty());

    let view = s.register_players(id, &["A", "B", "C", "D"]).unwrap();
    assert_eq!(view.players.len(), 4);
    assert_eq!(view.matches.len(), 6);
    assert_eq!(view.tournament.status, TournamentStatus::Incomplete);
    assert!(view.tournament.winner_ids.is_empty());
}

#[test]
fn full_flow_through_tie_break() {
    let s = store();
    let id = s.create_tournament(3, None).unwrap();
    let view = s.register_players(id, &["A", "B", "C"]).unwrap();

    // player_1 wins every regular match: A 2, B 1, C 0 -> A wins outright
    for m in &view.matches {
        let start = s.start_match(m.id).unwrap();
        assert_eq!(start.tournament_id, id);
        s.submit_match_result(m.id, 11, 7).unwrap();
    }
    let view = s.view(id).unwrap();
    assert_eq!(view.tournament.status, TournamentStatus::Complete);
    assert_eq!(view.tournament.winner_ids, vec![view.players[0].id]);

    let details = s.match_details(view.matches[0].id).unwrap();
    assert_eq!(details.winner.as_deref(), Some("A"));
    assert_eq!(details.score_player1, Some(11));
}

#[test]
fn tie_break_matches_can_be_submitted_by_id() {
    let s = store();
    let id = s.create_tournament(3, None).unwrap();
    let view = s.register_players(id, &["A", "B", "C"]).unwrap();
    for m in &view.matches {
        s.submit_match_result(m.id, 3, 3).unwrap();
    }

    let view = s.view(id).unwrap();
    let extra: Vec<_> = view.matches.iter().filter(|m| m.is_additional).collect();
    assert_eq!(extra.len(), 3);
    assert!(extra.iter().all(|m| m.round == RoundType::TieBreak(1)));
    assert_eq!(view.tournament.winner_ids.len(), 3);
    assert_eq!(s.view(id).unwrap(), view);

    // first tie-break: A beats B, A beats C, B beats C
    for m in &extra {
        s.submit_match_result(m.id, 2, 1).unwrap();
    }
    let view = s.view(id).unwrap();
    assert_eq!(view.tournament.winner_ids, vec![view.players[0].id]);
    assert_eq!(view.players[0].score, 2);
}

#[test]
fn resubmission_is_rejected() {
    let s = store();
    let id = s.create_tournament(3, None).unwrap();
    let match_id = s.register_players(id, &["A", "B", "C"]).unwrap().matches[0].id;

    let first = s.submit_match_result(match_id, 1, 0).unwrap();
    let err = s.submit_match_result(match_id, 0, 1).unwrap_err();
    assert_eq!(err, TournamentError::MatchAlreadyComplete(match_id));
    assert_eq!(err.kind(), ErrorKind::AlreadyComplete);
    assert_eq!(s.start_match(match_id).unwrap_err().kind(), ErrorKind::AlreadyComplete);

    let t = s.get(id).unwrap();
    assert_eq!(t.get_match(match_id), Some(&first));
}

#[test]
fn concurrent_submissions_for_one_match_only_one_wins() {
    let s = Arc::new(store());
    let id = s.create_tournament(3, None).unwrap();
    let match_id = s.register_players(id, &["A", "B", "C"]).unwrap().matches[0].id;

    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            let s = Arc::clone(&s);
            thread::spawn(move || s.submit_match_result(match_id, i + 1, 0))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == TournamentError::MatchAlreadyComplete(match_id)));
}

#[test]
fn standings_export() {
    let s = store();
    let id = s.create_tournament(3, None).unwrap();
    let view = s.register_players(id, &["A", "B", "C"]).unwrap();
    for m in &view.matches {
        s.submit_match_result(m.id, 0, 5).unwrap();
    }
    // player_2 wins every match: C 2, B 1, A 0
    let csv = s.standings_csv(id).unwrap();
    assert_eq!(csv, "rank,nickname,score\n1,C,2\n2,B,1\n3,A,0\n");
}
