use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::label::LabelId;
use crate::status::TaskStatus;

pub type CardId = String;

/// A card on the board. Field names follow the persisted blob's camelCase
/// shape; everything but `id` and `title` carries a default so blobs
/// written by older builds still deserialize.
///
/// `label_ids` holds non-owning references: a label may be deleted out
/// from under a card, and readers skip ids with no matching label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub label_ids: Vec<LabelId>,
    #[serde(default = "default_status")]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status_updated_at: Option<DateTime<Utc>>,
}

fn default_status() -> TaskStatus {
    TaskStatus::Todo
}

impl Card {
    pub fn new(title: String) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title)
    }

    pub fn with_id(id: impl Into<CardId>, title: String) -> Self {
        Self {
            id: id.into(),
            title,
            description: String::new(),
            label_ids: Vec::new(),
            status: TaskStatus::Todo,
            due_date: None,
            status_updated_at: None,
        }
    }

    /// Attach a label reference. Adding an id the card already carries is
    /// a no-op, so the collection behaves as an insertion-ordered set.
    pub fn add_label(&mut self, label_id: LabelId) {
        if !self.label_ids.contains(&label_id) {
            self.label_ids.push(label_id);
        }
    }

    pub fn remove_label(&mut self, label_id: &str) {
        self.label_ids.retain(|id| id != label_id);
    }

    pub fn has_label(&self, label_id: &str) -> bool {
        self.label_ids.iter().any(|id| id == label_id)
    }

    /// Direct status change; stamps the manual-change marker.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.status_updated_at = Some(Utc::now());
    }

    pub fn edit(&mut self, title: String, description: String) {
        self.title = title;
        self.description = description;
    }
}
