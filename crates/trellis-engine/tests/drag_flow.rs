mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{board_two_lists, MockStore};
use trellis_engine::{BoardEngine, DragController, EngineRuntime};

fn engine_with_saves() -> BoardEngine {
    let mut store = MockStore::new();
    store.expect_save().returning(|_| Ok(()));
    BoardEngine::with_board(Arc::new(store), board_two_lists())
}

#[tokio::test]
async fn drag_card_onto_list_moves_it() {
    let mut engine = engine_with_saves();
    let mut drag = DragController::new();

    drag.drag_start("c1");
    assert!(drag.is_dragging());
    assert!(drag.drag_end(&mut engine, Some("list-b")));

    assert!(engine.board().find_list("list-b").unwrap().contains_card("c1"));
    assert!(!drag.is_dragging());
}

#[tokio::test]
async fn drop_outside_any_target_is_noop() {
    let mut engine = engine_with_saves();
    let before = engine.board().clone();
    let mut drag = DragController::new();

    drag.drag_start("c1");
    assert!(!drag.drag_end(&mut engine, None));
    assert_eq!(engine.board(), &before);
}

#[tokio::test]
async fn drag_end_without_start_is_noop() {
    let mut engine = engine_with_saves();
    let before = engine.board().clone();
    let mut drag = DragController::new();

    assert!(!drag.drag_end(&mut engine, Some("list-b")));
    assert_eq!(engine.board(), &before);
}

#[tokio::test]
async fn cancelled_drag_dispatches_nothing() {
    let mut engine = engine_with_saves();
    let before = engine.board().clone();
    let mut drag = DragController::new();

    drag.drag_start("c1");
    drag.drag_cancel();
    assert!(!drag.drag_end(&mut engine, Some("list-b")));
    assert_eq!(engine.board(), &before);
}

#[tokio::test]
async fn drop_on_self_is_noop() {
    let mut engine = engine_with_saves();
    let before = engine.board().clone();
    let mut drag = DragController::new();

    drag.drag_start("c1");
    assert!(!drag.drag_end(&mut engine, Some("c1")));
    assert_eq!(engine.board(), &before);
}

#[tokio::test]
async fn gesture_events_flow_through_the_runtime_queue() {
    let engine = engine_with_saves();
    let (runtime, handle) = EngineRuntime::new(engine, Duration::from_secs(3600));
    let running = tokio::spawn(runtime.run());

    handle.drag_start("c2");
    handle.drag_end(Some("c1".to_string()));
    handle.shutdown();

    let engine = running.await.unwrap();
    // c2 dropped onto c1 inserts it before c1 in the same list
    let order = engine.board().find_list("list-a").unwrap().card_ids();
    assert_eq!(order, vec!["c2".to_string(), "c1".to_string()]);
}

#[tokio::test]
async fn cancel_through_the_runtime_queue_is_noop() {
    let engine = engine_with_saves();
    let before = engine.board().clone();
    let (runtime, handle) = EngineRuntime::new(engine, Duration::from_secs(3600));
    let running = tokio::spawn(runtime.run());

    handle.drag_start("c1");
    handle.drag_cancel();
    handle.drag_end(Some("list-b".to_string()));
    handle.shutdown();

    let engine = running.await.unwrap();
    assert_eq!(engine.board(), &before);
}
