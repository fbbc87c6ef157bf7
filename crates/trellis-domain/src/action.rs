use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::card::{Card, CardId};
use crate::label::{Label, LabelColor, LabelId};
use crate::list::{List, ListId};
use crate::status::TaskStatus;
use chrono::{DateTime, Utc};

/// Every mutation the board accepts, as a tagged union dispatched through
/// [`crate::reducer::reduce`]. The wire shape (`type` tag plus camelCase
/// `payload`) matches what UI handlers emit; an unrecognized `type` fails
/// deserialization and is dropped at the dispatch boundary instead of
/// reaching the reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    #[serde(rename_all = "camelCase")]
    AddList { list: List },
    #[serde(rename_all = "camelCase")]
    EditListTitle { list_id: ListId, title: String },
    #[serde(rename_all = "camelCase")]
    DeleteList { list_id: ListId },

    #[serde(rename_all = "camelCase")]
    AddCard { list_id: ListId, card: Card },
    #[serde(rename_all = "camelCase")]
    RemoveCard { list_id: ListId, card_id: CardId },
    #[serde(rename_all = "camelCase")]
    EditCard {
        list_id: ListId,
        card_id: CardId,
        title: String,
        description: String,
    },

    #[serde(rename_all = "camelCase")]
    MoveCard {
        card_id: CardId,
        source_list_id: ListId,
        dest_list_id: ListId,
        over_card_id: Option<CardId>,
    },
    #[serde(rename_all = "camelCase")]
    MoveList {
        source_index: usize,
        destination_index: usize,
    },

    #[serde(rename_all = "camelCase")]
    AddLabel { label: Label },
    #[serde(rename_all = "camelCase")]
    EditLabel {
        label_id: LabelId,
        text: String,
        color: LabelColor,
    },
    #[serde(rename_all = "camelCase")]
    DeleteLabel { label_id: LabelId },

    #[serde(rename_all = "camelCase")]
    AddLabelToCard {
        list_id: ListId,
        card_id: CardId,
        label_id: LabelId,
    },
    #[serde(rename_all = "camelCase")]
    RemoveLabelFromCard {
        list_id: ListId,
        card_id: CardId,
        label_id: LabelId,
    },

    #[serde(rename_all = "camelCase")]
    ToggleLabelFilter { label_id: LabelId },
    ClearAllFilters,

    #[serde(rename_all = "camelCase")]
    UpdateCardStatus { card_id: CardId, status: TaskStatus },
    #[serde(rename_all = "camelCase")]
    UpdateCardDueDate {
        card_id: CardId,
        due_date: Option<DateTime<Utc>>,
        new_status: TaskStatus,
    },
    #[serde(rename_all = "camelCase")]
    RefreshAllStatuses {
        card_statuses: HashMap<CardId, TaskStatus>,
    },
}
