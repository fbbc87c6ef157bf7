use std::mem;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use trellis_core::AppConfig;
use trellis_domain::{
    compute_status, project, reduce, refresh_map, Action, Board, BoardView, CardId, TaskStatus,
};
use trellis_persistence::{BoardStore, JsonFileStore};

/// Owns the board aggregate and funnels every mutation through the
/// reducer. Each accepted action triggers a fire-and-forget save; a save
/// that fails is logged and dropped, never rolled back into state.
///
/// Not `Sync` by design: one engine, one actor. Cross-task access goes
/// through [`crate::runtime::EngineRuntime`]'s event queue.
pub struct BoardEngine {
    board: Board,
    store: Arc<dyn BoardStore>,
}

impl BoardEngine {
    /// Load from the store, seeding on any failure. The store already
    /// absorbs malformed blobs; this guards the remaining IO edge.
    pub async fn load(store: Arc<dyn BoardStore>) -> Self {
        let board = match store.load().await {
            Ok(board) => board,
            Err(e) => {
                tracing::warn!("board load failed, starting seeded: {e}");
                Board::seeded()
            }
        };
        Self { board, store }
    }

    pub fn with_board(store: Arc<dyn BoardStore>, board: Board) -> Self {
        Self { board, store }
    }

    /// Convenience wiring for hosts: a JSON file store at the configured
    /// board path.
    pub async fn from_config(config: &AppConfig) -> Self {
        let store = JsonFileStore::new(config.effective_board_path());
        Self::load(Arc::new(store)).await
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The render view under the active label filters.
    pub fn view(&self) -> BoardView<'_> {
        project(&self.board)
    }

    /// Run one action through the reducer and kick off a save.
    pub fn dispatch(&mut self, action: Action) {
        let board = mem::take(&mut self.board);
        self.board = reduce(board, action);
        self.persist();
    }

    /// Tolerant wire entry point: an action blob whose `type` is not
    /// recognized (or whose payload does not parse) is dropped without
    /// touching state. Returns whether anything was dispatched.
    pub fn dispatch_json(&mut self, raw: &str) -> bool {
        match serde_json::from_str::<Action>(raw) {
            Ok(action) => {
                self.dispatch(action);
                true
            }
            Err(e) => {
                tracing::debug!("ignoring undispatchable action: {e}");
                false
            }
        }
    }

    /// Manual status change. Only the two user-reachable values pass;
    /// derived buckets belong to the sweep and are refused here.
    pub fn set_card_status(&mut self, card_id: &str, status: TaskStatus) -> bool {
        if !status.is_manual() {
            tracing::debug!("refusing manual set of derived status {}", status.as_str());
            return false;
        }
        self.dispatch(Action::UpdateCardStatus {
            card_id: card_id.to_string(),
            status,
        });
        true
    }

    /// Flip a card between done and todo.
    pub fn toggle_card_completion(&mut self, card_id: &str) {
        let Some(card) = self.board.find_card(card_id) else {
            return;
        };
        let next = if card.status == TaskStatus::Done {
            TaskStatus::Todo
        } else {
            TaskStatus::Done
        };
        self.dispatch(Action::UpdateCardStatus {
            card_id: card_id.to_string(),
            status: next,
        });
    }

    /// Set or clear a due date. The new bucket is computed here, before
    /// dispatch, with done kept sticky; the reducer only mirrors it.
    pub fn set_card_due_date(&mut self, card_id: &str, due_date: Option<DateTime<Utc>>) {
        let Some(card) = self.board.find_card(card_id) else {
            return;
        };
        let new_status = if card.status == TaskStatus::Done {
            TaskStatus::Done
        } else {
            compute_status(due_date, card.status, true)
        };
        self.dispatch(Action::UpdateCardDueDate {
            card_id: card_id.to_string(),
            due_date,
            new_status,
        });
    }

    /// Complete every unfinished card in a list, one status action each.
    pub fn mark_list_complete(&mut self, list_id: &str) {
        let pending: Vec<CardId> = self
            .board
            .find_list(list_id)
            .map(|list| {
                list.cards
                    .iter()
                    .filter(|card| card.status != TaskStatus::Done)
                    .map(|card| card.id.clone())
                    .collect()
            })
            .unwrap_or_default();

        for card_id in pending {
            self.dispatch(Action::UpdateCardStatus {
                card_id,
                status: TaskStatus::Done,
            });
        }
    }

    /// Recompute every card's bucket and apply the result as one bulk
    /// action. Invoked by the runtime's periodic tick and safe to call
    /// any time in between; recomputing twice in a row is idempotent.
    pub fn refresh_statuses(&mut self) {
        let card_statuses = refresh_map(&self.board);
        self.dispatch(Action::RefreshAllStatuses { card_statuses });
    }

    fn persist(&self) {
        let store = Arc::clone(&self.store);
        let snapshot = self.board.clone();
        tokio::spawn(async move {
            if let Err(e) = store.save(&snapshot).await {
                tracing::warn!("board save failed, state kept in memory: {e}");
            }
        });
    }
}
