mod common;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use common::{board_two_lists, MockStore};
use trellis_domain::{Board, TaskStatus};
use trellis_engine::{BoardEngine, EngineRuntime};

fn board_with_stale_bucket() -> Board {
    let mut board = board_two_lists();
    // due long ago, but still bucketed as if the deadline were ahead
    board.lists[0].cards[0].due_date = Some(Utc::now() - chrono::Duration::days(10));
    board.lists[0].cards[0].status = TaskStatus::ThisWeek;
    board
}

fn engine_with(board: Board) -> BoardEngine {
    let mut store = MockStore::new();
    store.expect_save().returning(|_| Ok(()));
    BoardEngine::with_board(Arc::new(store), board)
}

#[tokio::test(start_paused = true)]
async fn hourly_sweep_rebuckets_overdue_cards() {
    let engine = engine_with(board_with_stale_bucket());
    let (runtime, handle) = EngineRuntime::new(engine, Duration::from_secs(3600));
    let running = tokio::spawn(runtime.run());
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_secs(3601)).await;
    tokio::task::yield_now().await;

    handle.shutdown();
    let engine = running.await.unwrap();
    assert_eq!(
        engine.board().find_card("c1").unwrap().status,
        TaskStatus::Missed
    );
}

#[tokio::test(start_paused = true)]
async fn sweep_does_not_fire_early() {
    let engine = engine_with(board_with_stale_bucket());
    // default config carries the one-hour sweep interval
    let (runtime, handle) = EngineRuntime::from_config(engine, &trellis_core::AppConfig::default());
    let running = tokio::spawn(runtime.run());
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_secs(1800)).await;
    tokio::task::yield_now().await;

    handle.shutdown();
    let engine = running.await.unwrap();
    // half an hour in, nothing has been recomputed yet
    assert_eq!(
        engine.board().find_card("c1").unwrap().status,
        TaskStatus::ThisWeek
    );
}

#[tokio::test(start_paused = true)]
async fn sweep_preserves_manual_done() {
    let mut board = board_with_stale_bucket();
    board.lists[0].cards[0].status = TaskStatus::Done;
    let engine = engine_with(board);

    let (runtime, handle) = EngineRuntime::new(engine, Duration::from_secs(3600));
    let running = tokio::spawn(runtime.run());
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_secs(7201)).await;
    tokio::task::yield_now().await;

    handle.shutdown();
    let engine = running.await.unwrap();
    assert_eq!(
        engine.board().find_card("c1").unwrap().status,
        TaskStatus::Done
    );
}

#[tokio::test]
async fn manual_refresh_is_idempotent() {
    let mut engine = engine_with(board_with_stale_bucket());

    engine.refresh_statuses();
    let after_first = engine.board().clone();
    engine.refresh_statuses();

    assert_eq!(engine.board(), &after_first);
    assert_eq!(
        engine.board().find_card("c1").unwrap().status,
        TaskStatus::Missed
    );
}
