use std::borrow::Cow;

use crate::board::Board;
use crate::list::List;

/// A read-only view of the board under the active label filters.
/// Computed fresh for every render and never written back.
#[derive(Debug)]
pub struct BoardView<'a> {
    pub lists: Cow<'a, [List]>,
}

impl BoardView<'_> {
    pub fn is_filtered(&self) -> bool {
        matches!(self.lists, Cow::Owned(_))
    }
}

/// With no active filters the view borrows the board's lists outright —
/// the common render path allocates nothing. Otherwise each list keeps
/// only the cards sharing at least one label with the filter set
/// (OR across filters). Dangling filter ids simply match nothing.
pub fn project(board: &Board) -> BoardView<'_> {
    if board.active_filters.is_empty() {
        return BoardView {
            lists: Cow::Borrowed(&board.lists),
        };
    }

    let lists = board
        .lists
        .iter()
        .map(|list| List {
            id: list.id.clone(),
            title: list.title.clone(),
            cards: list
                .cards
                .iter()
                .filter(|card| {
                    card.label_ids
                        .iter()
                        .any(|id| board.active_filters.contains(id))
                })
                .cloned()
                .collect(),
        })
        .collect();

    BoardView {
        lists: Cow::Owned(lists),
    }
}
