//! Note models
//!
//! Wire-facing types shared with the notes service. Reads and writes use
//! different collection names (`listItems` vs `checkList`), so the persisted
//! note and the outgoing draft are separate types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminant selecting which payload shape and validation rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NoteKind {
    Text,
    Checklist,
}

/// One orderable, completable line within a checklist note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub text: String,
    /// Positive and unique within the owning note; defines ascending display
    /// order. Gaps are expected after deletions.
    pub order: i64,
    pub is_done: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>, order: i64, is_done: bool) -> Self {
        Self {
            text: text.into(),
            order,
            is_done,
        }
    }
}

/// A persisted note as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Body text; present for TEXT notes, optional extra text for CHECKLIST
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Checklist rows; empty for TEXT notes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_items: Vec<ChecklistItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn is_checklist(&self) -> bool {
        self.kind == NoteKind::Checklist
    }

    /// Checklist rows in display order (ascending by `order`)
    pub fn sorted_items(&self) -> Vec<ChecklistItem> {
        let mut items = self.list_items.clone();
        items.sort_by_key(|item| item.order);
        items
    }
}

/// A note draft on its way to the service
///
/// Tagged union over `type`: each variant carries exactly the fields that
/// are valid for it, so TEXT constraints never apply to CHECKLIST drafts
/// and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum NoteDraft {
    #[serde(rename = "TEXT")]
    Text {
        user_id: i64,
        title: String,
        content: String,
    },
    #[serde(rename = "CHECKLIST")]
    Checklist {
        user_id: i64,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        check_list: Vec<ChecklistItem>,
    },
}

impl NoteDraft {
    /// Build a TEXT draft
    pub fn text(user_id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        NoteDraft::Text {
            user_id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Build a CHECKLIST draft
    pub fn checklist(
        user_id: i64,
        title: impl Into<String>,
        content: Option<String>,
        check_list: Vec<ChecklistItem>,
    ) -> Self {
        NoteDraft::Checklist {
            user_id,
            title: title.into(),
            content,
            check_list,
        }
    }

    pub fn kind(&self) -> NoteKind {
        match self {
            NoteDraft::Text { .. } => NoteKind::Text,
            NoteDraft::Checklist { .. } => NoteKind::Checklist,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            NoteDraft::Text { title, .. } | NoteDraft::Checklist { title, .. } => title,
        }
    }

    pub fn user_id(&self) -> i64 {
        match self {
            NoteDraft::Text { user_id, .. } | NoteDraft::Checklist { user_id, .. } => *user_id,
        }
    }
}

/// Edit request: the draft plus the persisted identifier
#[derive(Debug, Serialize)]
pub struct EditNoteRequest<'a> {
    pub id: i64,
    #[serde(flatten)]
    pub draft: &'a NoteDraft,
}

/// Submission lifecycle state for the note form and the toggle flow
///
/// Serialized values match the status strings the UI keys its message
/// tables on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
    ErrorNetwork,
}
