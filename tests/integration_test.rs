//! Integration tests for the NoteKeep client core
//!
//! These tests walk the full client flows against the in-memory store:
//! - Checklist authoring and submission
//! - Read-through caching and toggle synchronization
//! - Error reconciliation into form state

use notekeep::api::{InMemoryNoteStore, NoteStore};
use notekeep::auth::AuthSession;
use notekeep::cache::NoteCache;
use notekeep::checklist::ChecklistEditor;
use notekeep::models::{FormStatus, NoteKind};
use notekeep::services::submission::CUSTOM_ERROR_KEY;
use notekeep::services::{NoteInput, NotesService, SubmissionService, ToggleService};

fn session() -> AuthSession {
    AuthSession::new(1, "test-jwt")
}

fn text_input(title: &str, content: &str) -> NoteInput {
    NoteInput {
        title: title.to_string(),
        content: content.to_string(),
        kind: NoteKind::Text,
    }
}

fn checklist_input(title: &str) -> NoteInput {
    NoteInput {
        title: title.to_string(),
        content: String::new(),
        kind: NoteKind::Checklist,
    }
}

#[tokio::test]
async fn test_checklist_note_lifecycle() {
    let store = InMemoryNoteStore::new();
    let cache = NoteCache::new();
    let auth = session();

    // Author a checklist: add, delete, add again; the deleted order stays a gap
    let mut editor = ChecklistEditor::new();
    editor.add("Buy milk", false);
    editor.add("Water plants", false);
    editor.add("Feed the cat", true);
    assert!(editor.remove(2));
    assert_eq!(editor.add("Take out trash", false), 4);

    // Submit it
    let mut form = SubmissionService::create(store.clone());
    let status = form.submit(checklist_input("Chores"), &editor, &auth).await;
    assert_eq!(status, FormStatus::Success);

    let note_id = form.saved_note().unwrap().id;
    assert_eq!(editor.len(), 3, "submission must not consume the editor");

    // View it through the cache
    let mut toggler = ToggleService::new(store.clone(), cache.clone());
    let note = toggler.load_note(note_id, &auth).await.unwrap();
    assert!(cache.contains(note_id).await);
    assert_eq!(note.list_items.len(), 3);

    // Display order is ascending even after deletions
    let orders: Vec<i64> = note.sorted_items().iter().map(|i| i.order).collect();
    assert_eq!(orders, vec![1, 3, 4]);

    // Toggle one item; the cache entry is dropped so the next read refetches
    let status = toggler.toggle_item(&note, 4, &auth).await;
    assert_eq!(status, FormStatus::Success);
    assert!(!cache.contains(note_id).await);

    let refreshed = toggler.load_note(note_id, &auth).await.unwrap();
    let flipped = refreshed.list_items.iter().find(|i| i.order == 4).unwrap();
    assert!(flipped.is_done);
    assert_eq!(flipped.text, "Take out trash");

    let untouched = refreshed.list_items.iter().find(|i| i.order == 1).unwrap();
    assert!(!untouched.is_done);
}

#[tokio::test]
async fn test_text_note_create_then_edit() {
    let store = InMemoryNoteStore::new();
    let auth = session();

    // Create
    let mut form = SubmissionService::create(store.clone());
    let status = form
        .submit(
            text_input("Groceries", "Buy milk and eggs"),
            &ChecklistEditor::new(),
            &auth,
        )
        .await;
    assert_eq!(status, FormStatus::Success);

    let created = form.saved_note().unwrap().clone();
    assert_eq!(created.content.as_deref(), Some("Buy milk and eggs"));

    // Edit under the same id
    let mut form = SubmissionService::edit(store.clone(), created.id);
    let status = form
        .submit(
            text_input("Groceries and more", "Buy milk, eggs and bread"),
            &ChecklistEditor::new(),
            &auth,
        )
        .await;
    assert_eq!(status, FormStatus::Success);

    let edited = store.get_note(created.id, &auth).await.unwrap();
    assert_eq!(edited.id, created.id);
    assert_eq!(edited.title, "Groceries and more");
    assert_eq!(edited.created_at, created.created_at);
}

#[tokio::test]
async fn test_invalid_submission_never_reaches_the_store() {
    let store = InMemoryNoteStore::new();
    let auth = session();

    let mut form = SubmissionService::create(store.clone());
    let status = form
        .submit(text_input("A", "short"), &ChecklistEditor::new(), &auth)
        .await;

    assert_eq!(status, FormStatus::Error);
    assert!(form.field_error("title").is_some());
    assert!(form.field_error("content").is_some());
    assert_eq!(store.note_count().await, 0, "nothing may be persisted");
}

#[tokio::test]
async fn test_rejected_edit_surfaces_custom_error() {
    let store = InMemoryNoteStore::new();
    let auth = session();

    // Persist a note, then have it vanish behind the client's back
    let mut form = SubmissionService::create(store.clone());
    form.submit(
        text_input("Groceries", "Buy milk and eggs"),
        &ChecklistEditor::new(),
        &auth,
    )
    .await;
    let note_id = form.saved_note().unwrap().id;
    store.delete_note(note_id, &auth).await.unwrap();

    // The edit is rejected without an errorObject; the message lands under
    // the catch-all key
    let mut form = SubmissionService::edit(store.clone(), note_id);
    let status = form
        .submit(
            text_input("Groceries", "Buy milk and eggs"),
            &ChecklistEditor::new(),
            &auth,
        )
        .await;

    assert_eq!(status, FormStatus::Error);
    assert_eq!(
        form.field_error(CUSTOM_ERROR_KEY),
        Some(format!("Note {} not found", note_id).as_str())
    );
}

#[tokio::test]
async fn test_delete_note_clears_cache_and_listing() {
    let store = InMemoryNoteStore::new();
    let cache = NoteCache::new();
    let auth = session();
    let service = NotesService::new(store.clone(), cache.clone());

    let mut form = SubmissionService::create(store.clone());
    form.submit(
        text_input("Groceries", "Buy milk and eggs"),
        &ChecklistEditor::new(),
        &auth,
    )
    .await;
    let first_id = form.saved_note().unwrap().id;

    let mut form = SubmissionService::create(store.clone());
    form.submit(
        text_input("Chores", "Water the plants today"),
        &ChecklistEditor::new(),
        &auth,
    )
    .await;

    assert_eq!(service.list_notes(&auth).await.unwrap().len(), 2);

    // Cache a read, then delete
    service.fetch_note(first_id, &auth).await.unwrap();
    assert!(cache.contains(first_id).await);

    service.delete_note(first_id, &auth).await.unwrap();

    assert!(!cache.contains(first_id).await);
    let remaining = service.list_notes(&auth).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Chores");
}

#[tokio::test]
async fn test_listing_is_scoped_to_the_session_owner() {
    let store = InMemoryNoteStore::new();
    let cache = NoteCache::new();
    let first_user = AuthSession::new(1, "jwt-one");
    let second_user = AuthSession::new(2, "jwt-two");

    let mut form = SubmissionService::create(store.clone());
    form.submit(
        text_input("Groceries", "Buy milk and eggs"),
        &ChecklistEditor::new(),
        &first_user,
    )
    .await;

    let mut form = SubmissionService::create(store.clone());
    form.submit(
        text_input("Chores", "Water the plants today"),
        &ChecklistEditor::new(),
        &second_user,
    )
    .await;

    let service = NotesService::new(store, cache);
    let first_notes = service.list_notes(&first_user).await.unwrap();
    let second_notes = service.list_notes(&second_user).await.unwrap();

    assert_eq!(first_notes.len(), 1);
    assert_eq!(first_notes[0].title, "Groceries");
    assert_eq!(second_notes.len(), 1);
    assert_eq!(second_notes[0].title, "Chores");
}
