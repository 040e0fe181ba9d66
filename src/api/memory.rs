//! In-memory note store
//!
//! A functional stand-in for the notes service: assigns ids and timestamps,
//! applies the same validation the service does, keeps a note's type fixed
//! after creation, and answers with the documented rejection shapes. Backs
//! the integration tests and offline development; it does not authenticate.

use super::NoteStore;
use crate::auth::AuthSession;
use crate::error::{AppError, Result};
use crate::models::{Note, NoteDraft, NoteKind};
use crate::validation::{validate_draft, FieldErrors};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct StoreState {
    notes: HashMap<i64, Note>,
    next_id: i64,
}

/// In-memory implementation of the note store contract
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes, across all users
    pub async fn note_count(&self) -> usize {
        self.state.lock().await.notes.len()
    }

    fn materialize(id: i64, draft: &NoteDraft, created_at: DateTime<Utc>) -> Note {
        let updated_at = Utc::now();
        match draft {
            NoteDraft::Text {
                user_id,
                title,
                content,
            } => Note {
                id,
                user_id: *user_id,
                title: title.clone(),
                kind: NoteKind::Text,
                content: Some(content.clone()),
                list_items: Vec::new(),
                created_at,
                updated_at,
            },
            NoteDraft::Checklist {
                user_id,
                title,
                content,
                check_list,
            } => Note {
                id,
                user_id: *user_id,
                title: title.clone(),
                kind: NoteKind::Checklist,
                content: content.clone(),
                list_items: check_list.clone(),
                created_at,
                updated_at,
            },
        }
    }

    fn invalid(errors: FieldErrors) -> AppError {
        AppError::Rejected {
            status: 400,
            message: "Note validation failed".to_string(),
            field_errors: Some(errors),
        }
    }

    fn not_found(id: i64) -> AppError {
        AppError::Rejected {
            status: 404,
            message: format!("Note {} not found", id),
            field_errors: None,
        }
    }

    fn kind_change_rejected() -> AppError {
        AppError::Rejected {
            status: 400,
            message: "Note type cannot be changed".to_string(),
            field_errors: None,
        }
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn create_note(&self, draft: &NoteDraft, _auth: &AuthSession) -> Result<Note> {
        if let Err(errors) = validate_draft(draft) {
            return Err(Self::invalid(errors));
        }

        let mut state = self.state.lock().await;
        state.next_id += 1;
        let id = state.next_id;
        let note = Self::materialize(id, draft, Utc::now());
        state.notes.insert(id, note.clone());

        tracing::debug!("Stored note {}", id);
        Ok(note)
    }

    async fn edit_note(&self, id: i64, draft: &NoteDraft, _auth: &AuthSession) -> Result<Note> {
        if let Err(errors) = validate_draft(draft) {
            return Err(Self::invalid(errors));
        }

        let mut state = self.state.lock().await;
        let existing = match state.notes.get(&id) {
            Some(existing) => existing,
            None => return Err(Self::not_found(id)),
        };
        if draft.kind() != existing.kind {
            return Err(Self::kind_change_rejected());
        }
        let created_at = existing.created_at;

        let note = Self::materialize(id, draft, created_at);
        state.notes.insert(id, note.clone());

        Ok(note)
    }

    async fn get_note(&self, id: i64, _auth: &AuthSession) -> Result<Note> {
        let state = self.state.lock().await;
        state
            .notes
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn list_notes(&self, user_id: i64, _auth: &AuthSession) -> Result<Vec<Note>> {
        let state = self.state.lock().await;
        let mut notes: Vec<Note> = state
            .notes
            .values()
            .filter(|note| note.user_id == user_id)
            .cloned()
            .collect();
        notes.sort_by_key(|note| note.id);
        Ok(notes)
    }

    async fn delete_note(&self, id: i64, _auth: &AuthSession) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.notes.remove(&id).is_none() {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
