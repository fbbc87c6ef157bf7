use trellis_domain::resolve_drag;

use crate::engine::BoardEngine;

/// Tracks the element under drag between the sensor's start and end
/// events. Resolution happens only at drag end, against the board as it
/// is *then* — the sweep may have run mid-drag, and stale indices must
/// not reach the reducer.
///
/// Click-vs-drag disambiguation (travel distance, hold delay) is the
/// sensor's job, configured via
/// [`trellis_core::config::ActivationConstraint`]; by the time
/// `drag_start` fires here, the gesture is already a drag.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<String>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_start(&mut self, active_id: impl Into<String>) {
        self.active = Some(active_id.into());
    }

    /// Cancelled at the input layer (escape key, window blur): no action
    /// is ever dispatched and state is untouched.
    pub fn drag_cancel(&mut self) {
        self.active = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Resolve the drop and dispatch the resulting move, if any.
    /// A release outside every valid target (`over_id` of `None`), a
    /// drag that never started, or an unresolvable drop all no-op.
    /// Returns whether an action was dispatched.
    pub fn drag_end(&mut self, engine: &mut BoardEngine, over_id: Option<&str>) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        let Some(over) = over_id else {
            return false;
        };
        let Some(intent) = resolve_drag(engine.board(), &active, over) else {
            return false;
        };
        engine.dispatch(intent.into_action());
        true
    }
}
