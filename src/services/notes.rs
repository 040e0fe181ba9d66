//! Notes service
//!
//! High-level read and delete operations for persisted notes: read-through
//! fetching against the shared cache, owner listings, and deletion with
//! cache invalidation.

use crate::api::NoteStore;
use crate::auth::AuthSession;
use crate::cache::NoteCache;
use crate::error::Result;
use crate::models::Note;

/// Service for reading and deleting persisted notes
#[derive(Clone)]
pub struct NotesService<S> {
    store: S,
    cache: NoteCache,
}

impl<S: NoteStore> NotesService<S> {
    pub fn new(store: S, cache: NoteCache) -> Self {
        Self { store, cache }
    }

    /// Fetch a note by id, serving repeat reads from the cache
    pub async fn fetch_note(&self, id: i64, auth: &AuthSession) -> Result<Note> {
        self.cache.get_or_fetch(&self.store, id, auth).await
    }

    /// List the session owner's notes
    pub async fn list_notes(&self, auth: &AuthSession) -> Result<Vec<Note>> {
        let notes = self.store.list_notes(auth.user_id, auth).await?;

        tracing::debug!("Listed {} note(s) for user {}", notes.len(), auth.user_id);

        Ok(notes)
    }

    /// Delete a note and drop its cached read
    pub async fn delete_note(&self, id: i64, auth: &AuthSession) -> Result<()> {
        tracing::info!("Deleting note {}", id);

        self.store.delete_note(id, auth).await?;
        self.cache.invalidate(id).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InMemoryNoteStore;
    use crate::models::NoteDraft;

    fn session() -> AuthSession {
        AuthSession::new(1, "test-jwt")
    }

    fn create_test_service() -> (NotesService<InMemoryNoteStore>, InMemoryNoteStore, NoteCache) {
        let store = InMemoryNoteStore::new();
        let cache = NoteCache::new();
        let service = NotesService::new(store.clone(), cache.clone());
        (service, store, cache)
    }

    #[tokio::test]
    async fn test_fetch_note_populates_the_cache() {
        let (service, store, cache) = create_test_service();
        let auth = session();

        let note = store
            .create_note(&NoteDraft::text(1, "Groceries", "Buy milk and eggs"), &auth)
            .await
            .unwrap();

        let fetched = service.fetch_note(note.id, &auth).await.unwrap();

        assert_eq!(fetched.id, note.id);
        assert!(cache.contains(note.id).await);
    }

    #[tokio::test]
    async fn test_delete_note_invalidates_the_cache() {
        let (service, store, cache) = create_test_service();
        let auth = session();

        let note = store
            .create_note(&NoteDraft::text(1, "Groceries", "Buy milk and eggs"), &auth)
            .await
            .unwrap();
        service.fetch_note(note.id, &auth).await.unwrap();
        assert!(cache.contains(note.id).await);

        service.delete_note(note.id, &auth).await.unwrap();

        assert!(!cache.contains(note.id).await);
        assert!(service.fetch_note(note.id, &auth).await.is_err());
    }

    #[tokio::test]
    async fn test_list_notes_uses_the_session_owner() {
        let (service, store, _cache) = create_test_service();
        let auth = session();

        store
            .create_note(&NoteDraft::text(1, "Groceries", "Buy milk and eggs"), &auth)
            .await
            .unwrap();
        store
            .create_note(&NoteDraft::text(2, "Chores", "Water the plants"), &auth)
            .await
            .unwrap();

        let notes = service.list_notes(&auth).await.unwrap();

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Groceries");
    }
}
