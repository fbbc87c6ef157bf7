use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use trellis_core::AppConfig;
use trellis_domain::Action;

use crate::drag::DragController;
use crate::engine::BoardEngine;

/// Everything that can reach the engine from outside: UI actions, drag
/// gesture events, and shutdown. The periodic sweep is internal to the
/// run loop and shares the same single-threaded turn-taking, so a tick
/// can never interleave with a user dispatch.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    Action(Action),
    DragStart(String),
    DragEnd(Option<String>),
    DragCancel,
    Shutdown,
}

/// Cloneable sender side of the engine's event queue.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: mpsc::UnboundedSender<EngineEvent>,
}

impl EngineHandle {
    pub fn dispatch(&self, action: Action) {
        self.send(EngineEvent::Action(action));
    }

    pub fn drag_start(&self, active_id: impl Into<String>) {
        self.send(EngineEvent::DragStart(active_id.into()));
    }

    pub fn drag_end(&self, over_id: Option<String>) {
        self.send(EngineEvent::DragEnd(over_id));
    }

    pub fn drag_cancel(&self) {
        self.send(EngineEvent::DragCancel);
    }

    pub fn shutdown(&self) {
        self.send(EngineEvent::Shutdown);
    }

    fn send(&self, event: EngineEvent) {
        // a closed queue just means the runtime already stopped
        let _ = self.tx.send(event);
    }
}

/// The single actor: one queue, one loop, actions applied to completion
/// in arrival order. Owns the drag controller so gesture state and board
/// state can never race.
pub struct EngineRuntime {
    engine: BoardEngine,
    drag: DragController,
    rx: mpsc::UnboundedReceiver<EngineEvent>,
    refresh_interval: Duration,
}

impl EngineRuntime {
    pub fn new(engine: BoardEngine, refresh_interval: Duration) -> (Self, EngineHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                engine,
                drag: DragController::new(),
                rx,
                refresh_interval,
            },
            EngineHandle { tx },
        )
    }

    pub fn from_config(engine: BoardEngine, config: &AppConfig) -> (Self, EngineHandle) {
        Self::new(engine, Duration::from_secs(config.refresh_interval_secs))
    }

    /// Run until shutdown (or every handle dropped), then hand the
    /// engine back for inspection. The first sweep fires one full
    /// interval after startup, not immediately.
    pub async fn run(mut self) -> BoardEngine {
        let mut sweep = time::interval_at(
            Instant::now() + self.refresh_interval,
            self.refresh_interval,
        );

        loop {
            tokio::select! {
                event = self.rx.recv() => {
                    match event {
                        Some(EngineEvent::Action(action)) => self.engine.dispatch(action),
                        Some(EngineEvent::DragStart(id)) => self.drag.drag_start(id),
                        Some(EngineEvent::DragEnd(over)) => {
                            self.drag.drag_end(&mut self.engine, over.as_deref());
                        }
                        Some(EngineEvent::DragCancel) => self.drag.drag_cancel(),
                        Some(EngineEvent::Shutdown) | None => break,
                    }
                }
                _ = sweep.tick() => {
                    tracing::debug!("periodic status sweep");
                    self.engine.refresh_statuses();
                }
            }
        }

        self.engine
    }
}
