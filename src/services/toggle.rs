//! Checklist toggle synchronization
//!
//! Flips a single item on an already-persisted note and pushes the whole
//! note back to the service. The cached read of that note is invalidated on
//! success so the next fetch observes the authoritative state; a failed
//! sync leaves both the cache and the note as they were.

use crate::api::NoteStore;
use crate::auth::AuthSession;
use crate::cache::NoteCache;
use crate::error::{AppError, Result};
use crate::models::{ChecklistItem, FormStatus, Note, NoteDraft};

/// Service syncing single-item completion changes on persisted notes
pub struct ToggleService<S> {
    store: S,
    cache: NoteCache,
    status: FormStatus,
}

impl<S: NoteStore> ToggleService<S> {
    pub fn new(store: S, cache: NoteCache) -> Self {
        Self {
            store,
            cache,
            status: FormStatus::Idle,
        }
    }

    /// Read-through fetch of the note being viewed
    pub async fn load_note(&self, id: i64, auth: &AuthSession) -> Result<Note> {
        self.cache.get_or_fetch(&self.store, id, auth).await
    }

    /// Flip completion on one item of a persisted note and sync it.
    ///
    /// Sends a payload identical to the persisted items except for the
    /// matching item's `isDone`; text and order round-trip unchanged. An
    /// order absent from the note is a no-op, like the editor's toggle.
    /// The passed note is never mutated; on success the cache entry is
    /// invalidated so the next read refetches.
    pub async fn toggle_item(&mut self, note: &Note, order: i64, auth: &AuthSession) -> FormStatus {
        if !note.is_checklist() || !note.list_items.iter().any(|item| item.order == order) {
            tracing::debug!("Toggle ignored: note {} has no item {}", note.id, order);
            return self.status;
        }

        self.status = FormStatus::Loading;

        let toggled: Vec<ChecklistItem> = note
            .list_items
            .iter()
            .map(|item| {
                let mut item = item.clone();
                if item.order == order {
                    item.is_done = !item.is_done;
                }
                item
            })
            .collect();

        let draft = NoteDraft::checklist(
            auth.user_id,
            note.title.clone(),
            note.content.clone(),
            toggled,
        );

        match self.store.edit_note(note.id, &draft, auth).await {
            Ok(_) => {
                tracing::info!("Toggled item {} on note {}", order, note.id);
                self.cache.invalidate(note.id).await;
                self.status = FormStatus::Success;
            }
            Err(AppError::Rejected { status, message, .. }) => {
                tracing::debug!("Toggle rejected ({}): {}", status, message);
                self.status = FormStatus::Error;
            }
            Err(err) => {
                tracing::warn!("Toggle sync failed: {}", err);
                self.status = FormStatus::ErrorNetwork;
            }
        }

        self.status
    }

    /// Status of the most recent toggle
    pub fn status(&self) -> FormStatus {
        self.status
    }
}
