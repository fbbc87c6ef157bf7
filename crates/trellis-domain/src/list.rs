use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::{Card, CardId};

pub type ListId = String;

/// An ordered column of cards. Card order is display order and drag
/// order; a card belongs to exactly one list at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    pub fn new(title: String) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title)
    }

    pub fn with_id(id: impl Into<ListId>, title: String) -> Self {
        Self {
            id: id.into(),
            title,
            cards: Vec::new(),
        }
    }

    pub fn contains_card(&self, card_id: &str) -> bool {
        self.cards.iter().any(|card| card.id == card_id)
    }

    pub fn position_of(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == card_id)
    }

    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id.clone()).collect()
    }
}
