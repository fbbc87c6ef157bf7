use std::collections::HashMap;

use crate::action::Action;
use crate::board::Board;
use crate::card::{Card, CardId};
use crate::label::{LabelColor, LabelId};
use crate::list::List;
use crate::status::TaskStatus;
use chrono::{DateTime, Utc};

/// The single state-transition function. Total over its input: any id
/// that does not resolve leaves the board unchanged, and no input panics.
/// Callers own input validation (a title is non-empty by the time it gets
/// here); the reducer mirrors whatever it is handed.
pub fn reduce(board: Board, action: Action) -> Board {
    match action {
        Action::AddList { list } => add_list(board, list),
        Action::EditListTitle { list_id, title } => edit_list_title(board, &list_id, title),
        Action::DeleteList { list_id } => delete_list(board, &list_id),

        Action::AddCard { list_id, card } => add_card(board, &list_id, card),
        Action::RemoveCard { list_id, card_id } => remove_card(board, &list_id, &card_id),
        Action::EditCard {
            list_id,
            card_id,
            title,
            description,
        } => edit_card(board, &list_id, &card_id, title, description),

        Action::MoveCard {
            card_id,
            source_list_id,
            dest_list_id,
            over_card_id,
        } => move_card(board, &card_id, &source_list_id, &dest_list_id, over_card_id),
        Action::MoveList {
            source_index,
            destination_index,
        } => move_list(board, source_index, destination_index),

        Action::AddLabel { label } => {
            let mut board = board;
            board.labels.push(label);
            board
        }
        Action::EditLabel {
            label_id,
            text,
            color,
        } => edit_label(board, &label_id, text, color),
        Action::DeleteLabel { label_id } => delete_label(board, &label_id),

        Action::AddLabelToCard {
            list_id,
            card_id,
            label_id,
        } => with_card_in_list(board, &list_id, &card_id, |card| card.add_label(label_id)),
        Action::RemoveLabelFromCard {
            list_id,
            card_id,
            label_id,
        } => with_card_in_list(board, &list_id, &card_id, |card| {
            card.remove_label(&label_id)
        }),

        Action::ToggleLabelFilter { label_id } => toggle_label_filter(board, label_id),
        Action::ClearAllFilters => {
            let mut board = board;
            board.active_filters.clear();
            board
        }

        Action::UpdateCardStatus { card_id, status } => update_card_status(board, &card_id, status),
        Action::UpdateCardDueDate {
            card_id,
            due_date,
            new_status,
        } => update_card_due_date(board, &card_id, due_date, new_status),
        Action::RefreshAllStatuses { card_statuses } => refresh_all_statuses(board, &card_statuses),
    }
}

fn add_list(mut board: Board, list: List) -> Board {
    board.lists.push(list);
    board
}

fn edit_list_title(mut board: Board, list_id: &str, title: String) -> Board {
    if let Some(list) = board.find_list_mut(list_id) {
        list.title = title;
    }
    board
}

/// Removing a list discards its cards with it; cards are owned by their
/// list, so no cross-list cleanup is needed.
fn delete_list(mut board: Board, list_id: &str) -> Board {
    board.lists.retain(|list| list.id != list_id);
    board
}

fn add_card(mut board: Board, list_id: &str, card: Card) -> Board {
    if let Some(list) = board.find_list_mut(list_id) {
        list.cards.push(card);
    }
    board
}

fn remove_card(mut board: Board, list_id: &str, card_id: &str) -> Board {
    if let Some(list) = board.find_list_mut(list_id) {
        list.cards.retain(|card| card.id != card_id);
    }
    board
}

fn edit_card(
    board: Board,
    list_id: &str,
    card_id: &str,
    title: String,
    description: String,
) -> Board {
    with_card_in_list(board, list_id, card_id, |card| {
        card.edit(title, description)
    })
}

/// Lift the card out of the source list, then insert into the destination:
/// before `over_card_id` when that card is present, at the end otherwise.
/// The insertion index is taken from the destination *after* removal, which
/// is what makes same-list moves land where the pointer dropped.
///
/// Both lists are resolved before anything is removed; a miss on either
/// side (or on the card itself) leaves the board untouched rather than
/// orphaning the card mid-move.
fn move_card(
    mut board: Board,
    card_id: &str,
    source_list_id: &str,
    dest_list_id: &str,
    over_card_id: Option<CardId>,
) -> Board {
    let Some(dest_index) = board.list_position(dest_list_id) else {
        return board;
    };
    let Some(source_index) = board.list_position(source_list_id) else {
        return board;
    };
    let Some(card_position) = board.lists[source_index].position_of(card_id) else {
        return board;
    };

    let card = board.lists[source_index].cards.remove(card_position);
    let dest = &mut board.lists[dest_index];
    match over_card_id.as_deref().and_then(|over| dest.position_of(over)) {
        Some(insert_at) => dest.cards.insert(insert_at, card),
        None => dest.cards.push(card),
    }
    board
}

/// Splice semantics: remove the list, then insert at `destination_index`
/// exactly as supplied. The drag layer computes that index against the
/// pre-removal order, so a rightward move lands one slot short of where a
/// post-removal index would put it; downstream state relies on this, so it
/// is applied verbatim (clamped to the shrunken length) rather than
/// re-derived.
fn move_list(mut board: Board, source_index: usize, destination_index: usize) -> Board {
    if source_index >= board.lists.len() {
        return board;
    }
    let list = board.lists.remove(source_index);
    let insert_at = destination_index.min(board.lists.len());
    board.lists.insert(insert_at, list);
    board
}

fn edit_label(mut board: Board, label_id: &str, text: String, color: LabelColor) -> Board {
    if let Some(label) = board.labels.iter_mut().find(|label| label.id == label_id) {
        label.text = text;
        label.color = color;
    }
    board
}

/// Cascading delete: the label itself, every card reference to it, and
/// its slot in the active filter set all go at once. This is the only
/// point where label references are cleaned up; dangling ids elsewhere
/// are filtered at read time.
fn delete_label(mut board: Board, label_id: &str) -> Board {
    board.labels.retain(|label| label.id != label_id);
    for list in &mut board.lists {
        for card in &mut list.cards {
            card.remove_label(label_id);
        }
    }
    board.active_filters.retain(|id| id != label_id);
    board
}

fn toggle_label_filter(mut board: Board, label_id: LabelId) -> Board {
    if let Some(position) = board.active_filters.iter().position(|id| *id == label_id) {
        board.active_filters.remove(position);
    } else {
        board.active_filters.push(label_id);
    }
    board
}

fn update_card_status(mut board: Board, card_id: &str, status: TaskStatus) -> Board {
    if let Some(card) = find_card_mut(&mut board, card_id) {
        card.set_status(status);
    }
    board
}

/// Status arrives precomputed by the caller (sticky-done already applied);
/// the reducer just mirrors it. No manual-change stamp: only a direct
/// status action marks a manual override.
fn update_card_due_date(
    mut board: Board,
    card_id: &str,
    due_date: Option<DateTime<Utc>>,
    new_status: TaskStatus,
) -> Board {
    if let Some(card) = find_card_mut(&mut board, card_id) {
        card.due_date = due_date;
        card.status = new_status;
    }
    board
}

/// Bulk overwrite from the periodic sweep. Cards absent from the map keep
/// their current status; no timestamps are touched.
fn refresh_all_statuses(mut board: Board, card_statuses: &HashMap<CardId, TaskStatus>) -> Board {
    for list in &mut board.lists {
        for card in &mut list.cards {
            if let Some(status) = card_statuses.get(&card.id) {
                card.status = *status;
            }
        }
    }
    board
}

fn with_card_in_list(
    mut board: Board,
    list_id: &str,
    card_id: &str,
    mutate: impl FnOnce(&mut Card),
) -> Board {
    if let Some(list) = board.find_list_mut(list_id) {
        if let Some(card) = list.cards.iter_mut().find(|card| card.id == card_id) {
            mutate(card);
        }
    }
    board
}

fn find_card_mut<'a>(board: &'a mut Board, card_id: &str) -> Option<&'a mut Card> {
    board
        .lists
        .iter_mut()
        .flat_map(|list| list.cards.iter_mut())
        .find(|card| card.id == card_id)
}
