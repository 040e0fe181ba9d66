//! Draft validation
//!
//! Mirrors the constraints enforced by the notes service so an invalid
//! draft never costs a round-trip. Violations come back as data keyed by
//! the offending field, never as an error the caller has to unwind.

use crate::config::{
    CONTENT_MAX_CHARS, CONTENT_MIN_CHARS, ITEM_TEXT_MAX_CHARS, ITEM_TEXT_MIN_CHARS,
    TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
use crate::models::{ChecklistItem, NoteDraft};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field-keyed validation and rejection messages
///
/// Keys are wire field names (`title`, `content`, `checkList`, `userId`).
/// The service's `errorObject` payload deserializes into the same type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any previous one
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

/// Validate a draft against the service's constraints.
///
/// The two note kinds are checked by fully independent branches; a rule for
/// one never applies to the other. All violated fields are reported
/// together, one message per field key.
pub fn validate_draft(draft: &NoteDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    validate_title(draft.title(), &mut errors);
    validate_user_id(draft.user_id(), &mut errors);

    match draft {
        NoteDraft::Text { content, .. } => {
            validate_text_content(content, &mut errors);
        }
        NoteDraft::Checklist { check_list, .. } => {
            // content is optional and unconstrained for checklist notes
            validate_check_list(check_list, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Lengths are counted in characters, not bytes
fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn validate_title(title: &str, errors: &mut FieldErrors) {
    let len = char_len(title);
    if len < TITLE_MIN_CHARS {
        errors.insert(
            "title",
            format!(
                "Note title must be at least {} characters long",
                TITLE_MIN_CHARS
            ),
        );
    } else if len > TITLE_MAX_CHARS {
        errors.insert(
            "title",
            format!(
                "Note title must be less than {} characters long",
                TITLE_MAX_CHARS
            ),
        );
    }
}

fn validate_user_id(user_id: i64, errors: &mut FieldErrors) {
    if user_id <= 0 {
        errors.insert("userId", "User id must be greater than 0");
    }
}

fn validate_text_content(content: &str, errors: &mut FieldErrors) {
    let len = char_len(content);
    if len < CONTENT_MIN_CHARS {
        errors.insert(
            "content",
            format!(
                "Note content must be at least {} characters long",
                CONTENT_MIN_CHARS
            ),
        );
    } else if len > CONTENT_MAX_CHARS {
        errors.insert(
            "content",
            format!(
                "Note content must be less than {} characters long",
                CONTENT_MAX_CHARS
            ),
        );
    }
}

fn validate_check_list(items: &[ChecklistItem], errors: &mut FieldErrors) {
    if items.is_empty() {
        errors.insert("checkList", "Check list must contain at least one item");
        return;
    }

    for item in items {
        validate_item(item, errors);
    }
}

fn validate_item(item: &ChecklistItem, errors: &mut FieldErrors) {
    let len = char_len(&item.text);
    if len < ITEM_TEXT_MIN_CHARS {
        errors.insert(
            "checkList",
            format!(
                "Note item text must be at least {} characters long",
                ITEM_TEXT_MIN_CHARS
            ),
        );
    } else if len > ITEM_TEXT_MAX_CHARS {
        errors.insert(
            "checkList",
            format!(
                "Note item text must be less than {} characters long",
                ITEM_TEXT_MAX_CHARS
            ),
        );
    }

    if item.order <= 0 {
        errors.insert("checkList", "Note item order must be greater than 0");
    }
}
