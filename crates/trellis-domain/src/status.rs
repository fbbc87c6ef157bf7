use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::board::Board;
use crate::card::CardId;

/// The fixed status buckets. `Todo` and `Done` are the only values a user
/// may set directly; the rest are derived from due dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    DueToday,
    ThisWeek,
    Later,
    Done,
    Missed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::DueToday => "due-today",
            Self::ThisWeek => "this-week",
            Self::Later => "later",
            Self::Done => "done",
            Self::Missed => "missed",
        }
    }

    /// True for the two statuses reachable by direct user action.
    pub fn is_manual(self) -> bool {
        matches!(self, Self::Todo | Self::Done)
    }
}

/// One entry of the status catalog shown to users. The catalog is seeded
/// at board creation and is not user-extensible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDefinition {
    pub id: TaskStatus,
    pub name: String,
    pub color: String,
}

impl StatusDefinition {
    fn new(id: TaskStatus, name: &str, color: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

pub fn default_status_catalog() -> Vec<StatusDefinition> {
    vec![
        StatusDefinition::new(TaskStatus::Todo, "To Do", "gray"),
        StatusDefinition::new(TaskStatus::DueToday, "Due Today", "orange"),
        StatusDefinition::new(TaskStatus::ThisWeek, "This Week", "yellow"),
        StatusDefinition::new(TaskStatus::Later, "Later", "blue"),
        StatusDefinition::new(TaskStatus::Done, "Done", "green"),
        StatusDefinition::new(TaskStatus::Missed, "Missed", "red"),
    ]
}

/// Derive a status bucket from a due date, relative to the local calendar
/// day. Without a due date the current status passes through. A manually
/// completed card never reverts to a due-date bucket while
/// `preserve_manual` is set.
pub fn compute_status(
    due_date: Option<DateTime<Utc>>,
    current: TaskStatus,
    preserve_manual: bool,
) -> TaskStatus {
    compute_status_on(due_date, current, preserve_manual, Local::now().date_naive())
}

/// Clock-injected variant of [`compute_status`]; `today` is the local
/// calendar day to compare against.
pub fn compute_status_on(
    due_date: Option<DateTime<Utc>>,
    current: TaskStatus,
    preserve_manual: bool,
    today: NaiveDate,
) -> TaskStatus {
    let Some(due) = due_date else {
        return current;
    };

    if current == TaskStatus::Done && preserve_manual {
        return TaskStatus::Done;
    }

    let due_day = due.with_timezone(&Local).date_naive();
    let days_diff = due_day.signed_duration_since(today).num_days();

    if days_diff < 0 {
        TaskStatus::Missed
    } else if days_diff == 0 {
        TaskStatus::DueToday
    } else if days_diff <= 7 {
        TaskStatus::ThisWeek
    } else {
        TaskStatus::Later
    }
}

/// Recompute the bucket for every card on the board. The result feeds a
/// single bulk refresh action; cards without a due date keep whatever
/// status they already have.
pub fn refresh_map(board: &Board) -> HashMap<CardId, TaskStatus> {
    refresh_map_on(board, Local::now().date_naive())
}

pub fn refresh_map_on(board: &Board, today: NaiveDate) -> HashMap<CardId, TaskStatus> {
    let mut statuses = HashMap::new();
    for list in &board.lists {
        for card in &list.cards {
            statuses.insert(
                card.id.clone(),
                compute_status_on(card.due_date, card.status, true, today),
            );
        }
    }
    statuses
}
