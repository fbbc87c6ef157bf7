use crate::action::Action;
use crate::board::Board;
use crate::card::CardId;
use crate::list::ListId;

/// A normalized move produced from raw drop coordinates: either a list
/// reorder or a card move with its insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragIntent {
    ListMove {
        source_index: usize,
        dest_index: usize,
    },
    CardMove {
        card_id: CardId,
        source_list_id: ListId,
        dest_list_id: ListId,
        over_card_id: Option<CardId>,
    },
}

impl DragIntent {
    pub fn into_action(self) -> Action {
        match self {
            Self::ListMove {
                source_index,
                dest_index,
            } => Action::MoveList {
                source_index,
                destination_index: dest_index,
            },
            Self::CardMove {
                card_id,
                source_list_id,
                dest_list_id,
                over_card_id,
            } => Action::MoveCard {
                card_id,
                source_list_id,
                dest_list_id,
                over_card_id,
            },
        }
    }
}

/// Interpret a drop against the current board snapshot. `active_id` is
/// whatever element started the drag, `over_id` whatever sat under the
/// pointer at release; both are opaque until matched against the board.
///
/// Must run against the snapshot current at drag *end* — state may have
/// shifted since drag start (a status sweep, for instance), and indices
/// resolved against a stale snapshot would desync the reducer.
///
/// Returns `None` whenever the drop resolves to nothing: self-drop,
/// an `active_id` that matches neither a list nor a card (it may have
/// been deleted mid-drag), or an unresolvable destination.
pub fn resolve_drag(board: &Board, active_id: &str, over_id: &str) -> Option<DragIntent> {
    if active_id == over_id {
        return None;
    }

    // A list id at the top level means a list reorder.
    if board.find_list(active_id).is_some() {
        let source_index = board.list_position(active_id)?;
        let dest_index = board.list_position(over_id)?;
        return Some(DragIntent::ListMove {
            source_index,
            dest_index,
        });
    }

    // Otherwise the active element must be a card somewhere.
    let source_list = board.list_of_card(active_id)?;

    // The drop target is either a list itself or a card inside one.
    let dest_list = board
        .find_list(over_id)
        .or_else(|| board.list_of_card(over_id))?;

    let over_card_id = dest_list.contains_card(over_id).then(|| over_id.to_string());

    Some(DragIntent::CardMove {
        card_id: active_id.to_string(),
        source_list_id: source_list.id.clone(),
        dest_list_id: dest_list.id.clone(),
        over_card_id,
    })
}
