use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type LabelId = String;

/// Fixed label palette. Persisted blobs written by older builds may carry
/// colors that have since been retired; those fall back to `Gray` instead
/// of failing the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LabelColor {
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Pink,
    Teal,
    Cyan,
    Indigo,
    Lime,
    Gray,
}

impl From<String> for LabelColor {
    fn from(color: String) -> Self {
        match color.as_str() {
            "blue" => Self::Blue,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "orange" => Self::Orange,
            "red" => Self::Red,
            "purple" => Self::Purple,
            "pink" => Self::Pink,
            "teal" => Self::Teal,
            "cyan" => Self::Cyan,
            "indigo" => Self::Indigo,
            "lime" => Self::Lime,
            _ => Self::Gray,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub color: LabelColor,
    pub text: String,
}

impl Label {
    pub fn new(text: String, color: LabelColor) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            color,
            text,
        }
    }

    pub fn with_id(id: impl Into<LabelId>, text: String, color: LabelColor) -> Self {
        Self {
            id: id.into(),
            color,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mints_unique_ids() {
        let a = Label::new("Bug".to_string(), LabelColor::Red);
        let b = Label::new("Bug".to_string(), LabelColor::Red);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_color_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LabelColor::Blue).unwrap(), "\"blue\"");
        assert_eq!(serde_json::to_string(&LabelColor::Gray).unwrap(), "\"gray\"");
    }

    #[test]
    fn test_unknown_color_falls_back_to_gray() {
        let color: LabelColor = serde_json::from_str("\"chartreuse\"").unwrap();
        assert_eq!(color, LabelColor::Gray);
    }
}
