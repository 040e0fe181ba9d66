//! Note read cache
//!
//! Clonable read-through cache keyed by note id. Writers never patch a
//! cached entry in place: a change is published by invalidating the entry
//! so the next read fetches the authoritative state from the service.

use crate::api::NoteStore;
use crate::auth::AuthSession;
use crate::error::Result;
use crate::models::Note;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared cache of persisted notes
#[derive(Debug, Clone, Default)]
pub struct NoteCache {
    entries: Arc<RwLock<HashMap<i64, Note>>>,
}

impl NoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached note, if present
    pub async fn get(&self, id: i64) -> Option<Note> {
        self.entries.read().await.get(&id).cloned()
    }

    /// Insert or replace a cached note
    pub async fn insert(&self, note: Note) {
        self.entries.write().await.insert(note.id, note);
    }

    /// Drop the cached entry so the next read refetches.
    ///
    /// Returns false when nothing was cached for the id.
    pub async fn invalidate(&self, id: i64) -> bool {
        let removed = self.entries.write().await.remove(&id).is_some();
        if removed {
            tracing::debug!("Invalidated cached note {}", id);
        }
        removed
    }

    /// Serve from the cache, or fetch from the store and populate
    pub async fn get_or_fetch<S: NoteStore>(
        &self,
        store: &S,
        id: i64,
        auth: &AuthSession,
    ) -> Result<Note> {
        if let Some(note) = self.get(id).await {
            tracing::debug!("Cache hit for note {}", id);
            return Ok(note);
        }

        let note = store.get_note(id, auth).await?;
        self.insert(note.clone()).await;

        tracing::debug!("Cache filled for note {}", id);
        Ok(note)
    }

    pub async fn contains(&self, id: i64) -> bool {
        self.entries.read().await.contains_key(&id)
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
