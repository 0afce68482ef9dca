use std::sync::Arc;

use crate::config::StoreConfig;
use crate::domain::calls::{Call, CallType};
use crate::domain::draft::RoundDraft;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::Phase;
use crate::domain::teams::TeamId;
use crate::errors::domain::{RoundError, SubmitError};
use crate::errors::ErrorCode;
use crate::persistence::MemoryKv;
use crate::store::{GameStore, LoadOutcome};

fn store_with(kv: &Arc<MemoryKv>) -> GameStore {
    GameStore::new(kv.clone(), &StoreConfig::default())
}

fn stored_snapshot(kv: &MemoryKv) -> GameSnapshot {
    let raw = kv.raw("tichuGameState").expect("snapshot saved");
    GameSnapshot::from_json(&raw).expect("valid snapshot")
}

#[tokio::test]
async fn add_round_saves_snapshot() {
    let kv = Arc::new(MemoryKv::new());
    let mut store = store_with(&kv);

    let round = store.add_round(100, 0, vec![Call::tichu(TeamId::A, true)]);
    assert_eq!(round.id, 1);
    assert_eq!((round.team_a_points, round.team_b_points), (200, 0));

    store.flush().await;
    let snapshot = stored_snapshot(&kv);
    assert_eq!(snapshot.rounds.len(), 1);
    assert_eq!(snapshot.rounds[0].team_a_points, 200);
}

#[tokio::test]
async fn submit_rejects_hard_errors_without_touching_state() {
    let kv = Arc::new(MemoryKv::new());
    let mut store = store_with(&kv);

    let err = store.submit_round(None, Some(50), vec![], false).unwrap_err();
    assert_eq!(
        err,
        SubmitError::Invalid(RoundError::EmptyPoints { team: TeamId::A })
    );

    let err = store.submit_round(Some(130), Some(-30), vec![], true).unwrap_err();
    assert_eq!(err.code(), ErrorCode::PointsOutOfRange);

    let pending = vec![Call::pending(CallType::Tichu, TeamId::B)];
    let err = store.submit_round(Some(50), Some(50), pending, true).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IncompleteCalls);
    assert!(!err.is_confirmable());

    store.flush().await;
    assert!(store.rounds().is_empty());
    assert_eq!(kv.write_count(), 0);
}

#[tokio::test]
async fn submit_sum_mismatch_needs_confirmation() {
    let mut store = GameStore::in_memory();

    let err = store.submit_round(Some(60), Some(60), vec![], false).unwrap_err();
    assert_eq!(err, SubmitError::SumMismatch { sum: 120 });
    assert!(err.is_confirmable());
    assert!(store.rounds().is_empty());

    let round = store.submit_round(Some(60), Some(60), vec![], true).unwrap();
    assert_eq!((round.team_a_points, round.team_b_points), (60, 60));
}

#[tokio::test]
async fn zero_sum_round_is_balanced() {
    let mut store = GameStore::in_memory();
    let calls = vec![Call::one_two(TeamId::A)];
    let round = store.submit_round(Some(0), Some(0), calls, false).unwrap();
    assert_eq!((round.team_a_points, round.team_b_points), (200, 0));
}

#[tokio::test]
async fn submit_draft_uses_draft_entries() {
    let mut store = GameStore::in_memory();
    let mut draft = RoundDraft::new();
    draft.set_points(TeamId::A, Some(35));
    assert!(draft.toggle_call(TeamId::B, CallType::GrandTichu));

    let err = store.submit_draft(&draft, false).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IncompleteCalls);

    assert!(draft.set_outcome(TeamId::B, CallType::GrandTichu, false));
    let round = store.submit_draft(&draft, false).unwrap();
    assert_eq!((round.team_a_points, round.team_b_points), (35, -135));
}

#[tokio::test]
async fn crossing_threshold_ends_game_and_undo_reopens() {
    let mut store = GameStore::in_memory();
    store.set_winning_score(300);

    store.add_round(100, 0, vec![Call::tichu(TeamId::A, true)]);
    assert!(!store.is_game_over());
    store.add_round(100, 0, vec![]);
    assert_eq!(store.phase(), Phase::GameOver { winner: TeamId::A });
    assert_eq!(store.winning_team(), Some(TeamId::A));

    let removed = store.undo_last_round().unwrap();
    assert_eq!(removed.id, 2);
    assert!(!store.is_game_over());
    assert_eq!(store.total_score(TeamId::A), 200);
}

#[tokio::test]
async fn undo_on_empty_store_does_not_save() {
    let kv = Arc::new(MemoryKv::new());
    let mut store = store_with(&kv);

    assert!(store.undo_last_round().is_none());
    store.flush().await;
    assert_eq!(kv.write_count(), 0);
}

#[tokio::test]
async fn start_new_game_keeps_settings_reset_does_not() {
    let mut store = GameStore::in_memory();
    store.set_team_name(TeamId::A, "Dragons");
    store.set_winning_score(500);
    store.add_round(70, 30, vec![]);

    store.start_new_game();
    assert!(store.rounds().is_empty());
    assert_eq!(store.team(TeamId::A).name, "Dragons");
    assert_eq!(store.winning_score(), 500);

    store.reset_game();
    assert_eq!(store.team(TeamId::A).name, "Team A");
    assert_eq!(store.winning_score(), 1000);
}

#[tokio::test]
async fn load_restores_saved_game() {
    let kv = Arc::new(MemoryKv::new());
    let mut first = store_with(&kv);
    first.set_team_name(TeamId::B, "Phoenix");
    first.add_round(25, 75, vec![Call::grand_tichu(TeamId::B, true)]);
    first.shutdown().await;

    let mut second = store_with(&kv);
    assert_eq!(second.load_game().await, LoadOutcome::Restored { rounds: 1 });
    assert_eq!(second.team(TeamId::B).name, "Phoenix");
    assert_eq!(second.total_score(TeamId::B), 275);
    assert_eq!(second.leader(), Some(TeamId::B));
}

#[tokio::test]
async fn load_with_nothing_stored_keeps_defaults() {
    let mut store = GameStore::in_memory();
    assert_eq!(store.load_game().await, LoadOutcome::Missing);
    assert_eq!(store.winning_score(), 1000);
}

#[tokio::test]
async fn corrupt_snapshot_is_discarded() {
    let kv = Arc::new(MemoryKv::new());
    kv.insert_raw("tichuGameState", "{not json");
    let mut store = store_with(&kv);
    store.set_team_name(TeamId::A, "Kept");

    assert_eq!(store.load_game().await, LoadOutcome::Discarded);
    assert_eq!(store.team(TeamId::A).name, "Kept");
    assert!(store.rounds().is_empty());
}

#[tokio::test]
async fn overflowing_snapshot_is_discarded() {
    let kv = Arc::new(MemoryKv::new());
    kv.insert_raw(
        "tichuGameState",
        r#"{"teams":{"A":{"id":"A","name":"Team A"},"B":{"id":"B","name":"Team B"}},
            "winningScore":1000,
            "rounds":[{"id":1,"teamAPoints":2147483647,"teamBPoints":0,"calls":[]},
                      {"id":2,"teamAPoints":10,"teamBPoints":90,"calls":[]}],
            "isGameOver":false,"winningTeam":null}"#,
    );
    let mut store = store_with(&kv);

    assert_eq!(store.load_game().await, LoadOutcome::Discarded);
    assert!(store.rounds().is_empty());
    assert_eq!(store.total_score(TeamId::A), 0);
}

#[tokio::test]
async fn unvalidated_huge_rounds_do_not_panic() {
    let mut store = GameStore::in_memory();
    store.add_round(i32::MAX, 0, vec![Call::tichu(TeamId::A, true)]);
    store.add_round(i32::MAX, 0, vec![]);

    assert_eq!(store.total_score(TeamId::A), i32::MAX);
    assert_eq!(store.winning_team(), Some(TeamId::A));
    assert_eq!(store.running_totals()[1].team_a, i32::MAX);
}

#[tokio::test]
async fn storage_failures_never_surface() {
    let kv = Arc::new(MemoryKv::new());
    kv.set_fail_reads(true);
    kv.set_fail_writes(true);
    let mut store = store_with(&kv);

    assert_eq!(store.load_game().await, LoadOutcome::Discarded);
    store.add_round(50, 50, vec![]);
    store.flush().await;

    assert_eq!(store.rounds().len(), 1);
    assert_eq!(kv.raw("tichuGameState"), None);

    // next mutation after recovery persists everything
    kv.set_fail_writes(false);
    store.add_round(50, 50, vec![]);
    store.flush().await;
    assert_eq!(stored_snapshot(&kv).rounds.len(), 2);
}

#[tokio::test]
async fn stats_and_running_totals_follow_rounds() {
    let mut store = GameStore::in_memory();
    store.add_round(100, 0, vec![Call::tichu(TeamId::A, true)]);
    store.add_round(30, 70, vec![Call::tichu(TeamId::A, false)]);

    let totals: Vec<_> = store
        .running_totals()
        .iter()
        .map(|p| (p.team_a, p.team_b))
        .collect();
    assert_eq!(totals, vec![(200, 0), (130, 70)]);

    let stats = store.stats();
    assert_eq!(stats.get(TeamId::A).tichu.declared, 2);
    assert_eq!(stats.get(TeamId::A).tichu.successful, 1);
    assert_eq!(stats.games_played, 1);
}
