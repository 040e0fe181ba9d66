//! Notes service API
//!
//! Remote store contract and its implementations:
//! - `NoteStore`: the create/edit/get/list/delete contract
//! - `HttpNoteStore`: reqwest-backed production client
//! - `InMemoryNoteStore`: functional stand-in for tests and offline work

pub mod http;
pub mod memory;

pub use http::HttpNoteStore;
pub use memory::InMemoryNoteStore;

use crate::auth::AuthSession;
use crate::error::Result;
use crate::models::{Note, NoteDraft};
use crate::validation::FieldErrors;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Rejection payload returned by the service on a non-success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionBody {
    pub message: String,
    #[serde(rename = "errorObject", default, skip_serializing_if = "Option::is_none")]
    pub error_object: Option<FieldErrors>,
}

/// Remote note store contract
///
/// Mirrors the notes service API; every call carries the caller's session.
/// Service rejections surface as `AppError::Rejected`, transport failures
/// as `AppError::Network`.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Persist a new note draft, returning the stored form
    async fn create_note(&self, draft: &NoteDraft, auth: &AuthSession) -> Result<Note>;

    /// Replace a persisted note's content with the draft. A note's type
    /// is fixed at creation; drafts of the other kind are rejected.
    async fn edit_note(&self, id: i64, draft: &NoteDraft, auth: &AuthSession) -> Result<Note>;

    /// Fetch a persisted note by id
    async fn get_note(&self, id: i64, auth: &AuthSession) -> Result<Note>;

    /// List all notes owned by a user
    async fn list_notes(&self, user_id: i64, auth: &AuthSession) -> Result<Vec<Note>>;

    /// Delete a persisted note
    async fn delete_note(&self, id: i64, auth: &AuthSession) -> Result<()>;
}
