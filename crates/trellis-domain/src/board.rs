use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::label::{Label, LabelColor, LabelId};
use crate::list::List;
use crate::status::{default_status_catalog, StatusDefinition};

/// The aggregate root: every list, card, label, the active filter set,
/// and the status catalog. All mutation goes through the reducer; other
/// components only read snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Label ids currently filtering the view. Set semantics with
    /// insertion order kept for the blob; stale ids are tolerated and
    /// scrubbed when their label is deleted.
    #[serde(default)]
    pub active_filters: Vec<LabelId>,
    #[serde(default = "default_status_catalog")]
    pub task_statuses: Vec<StatusDefinition>,
}

impl Board {
    /// An empty board carrying the fixed status catalog.
    pub fn new() -> Self {
        Self {
            lists: Vec::new(),
            labels: Vec::new(),
            active_filters: Vec::new(),
            task_statuses: default_status_catalog(),
        }
    }

    /// The tutorial board used when no persisted state exists (or the
    /// persisted state is unreadable).
    pub fn seeded() -> Self {
        let mut how_to = List::with_id("list-1", "How to Use".to_string());

        let mut add_cards = Card::with_id("card-1", "How to add cards".to_string());
        add_cards.description = "Click on add card to add new cards to the list".to_string();
        add_cards.add_label("label-1".to_string());

        let mut add_list = Card::with_id("card-2", "How to add a list".to_string());
        add_list.description = "Click on add another list to create more lists".to_string();
        add_list.add_label("label-2".to_string());

        let mut delete_card = Card::with_id("card-3", "How to delete a card".to_string());
        delete_card.description = "Open the card and use the delete button".to_string();

        let mut drag_card = Card::with_id("card-4", "How to drag and drop".to_string());
        drag_card.description =
            "Press and hold a card to drag it to another list or position".to_string();

        let mut edit_card = Card::with_id("card-5", "How to edit a card".to_string());
        edit_card.description = "Click on a card to edit its title and description".to_string();

        how_to.cards = vec![add_cards, add_list, delete_card, drag_card, edit_card];

        Self {
            lists: vec![how_to],
            labels: vec![
                Label::with_id("label-1", "Tutorial".to_string(), LabelColor::Blue),
                Label::with_id("label-2", "Getting Started".to_string(), LabelColor::Green),
                Label::with_id("label-3", "Bug".to_string(), LabelColor::Red),
                Label::with_id("label-4", "Priority".to_string(), LabelColor::Yellow),
            ],
            active_filters: Vec::new(),
            task_statuses: default_status_catalog(),
        }
    }

    pub fn find_list(&self, list_id: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    pub fn find_list_mut(&mut self, list_id: &str) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.id == list_id)
    }

    /// Search every list for a card. Card ids are unique across the
    /// whole board, so the first hit is the only hit.
    pub fn find_card(&self, card_id: &str) -> Option<&Card> {
        self.lists
            .iter()
            .flat_map(|list| list.cards.iter())
            .find(|card| card.id == card_id)
    }

    /// The list currently holding a card, if any.
    pub fn list_of_card(&self, card_id: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.contains_card(card_id))
    }

    pub fn list_position(&self, list_id: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.id == list_id)
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }

    pub fn find_label(&self, label_id: &str) -> Option<&Label> {
        self.labels.iter().find(|label| label.id == label_id)
    }

    /// How many cards across the whole board carry this label.
    pub fn label_usage_count(&self, label_id: &str) -> usize {
        self.lists
            .iter()
            .flat_map(|list| list.cards.iter())
            .filter(|card| card.has_label(label_id))
            .count()
    }
}
