//! Note submission pipeline
//!
//! Drives a draft from raw form input through validation to the create or
//! edit call, and reconciles every outcome into status plus field-error
//! state the form can render. Nothing escapes as an unhandled error.

use crate::api::NoteStore;
use crate::auth::AuthSession;
use crate::checklist::ChecklistEditor;
use crate::error::AppError;
use crate::models::{FormStatus, Note, NoteDraft, NoteKind};
use crate::validation::{validate_draft, FieldErrors};

/// Catch-all key for rejections that are not scoped to a single field
pub const CUSTOM_ERROR_KEY: &str = "custom";

/// Raw form fields for a submission
#[derive(Debug, Clone)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
    pub kind: NoteKind,
}

/// What a submission targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitTarget {
    Create,
    Edit(i64),
}

/// Service driving note creation and editing
pub struct SubmissionService<S> {
    store: S,
    target: SubmitTarget,
    status: FormStatus,
    field_errors: FieldErrors,
    saved: Option<Note>,
}

impl<S: NoteStore> SubmissionService<S> {
    /// Pipeline for creating a new note
    pub fn create(store: S) -> Self {
        Self::with_target(store, SubmitTarget::Create)
    }

    /// Pipeline for editing the note with the given id
    pub fn edit(store: S, note_id: i64) -> Self {
        Self::with_target(store, SubmitTarget::Edit(note_id))
    }

    fn with_target(store: S, target: SubmitTarget) -> Self {
        Self {
            store,
            target,
            status: FormStatus::Idle,
            field_errors: FieldErrors::new(),
            saved: None,
        }
    }

    /// Submit the form.
    ///
    /// Local validation runs first; an invalid draft never reaches the
    /// network. The checklist editor is read-only input here: for CHECKLIST
    /// submissions its current items become the payload. Owner id and
    /// bearer token come from the session.
    ///
    /// The exclusive borrow doubles as the in-flight guard: a second
    /// submission on this instance cannot start until the returned future
    /// completes. Status keeps its final value until the next submit.
    pub async fn submit(
        &mut self,
        input: NoteInput,
        checklist: &ChecklistEditor,
        auth: &AuthSession,
    ) -> FormStatus {
        self.status = FormStatus::Loading;
        self.field_errors.clear();
        self.saved = None;

        let draft = build_draft(input, checklist, auth);

        if let Err(errors) = validate_draft(&draft) {
            tracing::debug!("Draft failed validation on {} field(s)", errors.len());
            self.field_errors = errors;
            self.status = FormStatus::Error;
            return self.status;
        }

        let result = match self.target {
            SubmitTarget::Create => self.store.create_note(&draft, auth).await,
            SubmitTarget::Edit(note_id) => self.store.edit_note(note_id, &draft, auth).await,
        };

        match result {
            Ok(note) => {
                tracing::info!("Note {} saved", note.id);
                self.saved = Some(note);
                self.status = FormStatus::Success;
            }
            Err(AppError::Rejected {
                status,
                message,
                field_errors,
            }) => {
                tracing::debug!("Service rejected note ({}): {}", status, message);
                self.field_errors = match field_errors {
                    Some(errors) => errors,
                    None => {
                        let mut errors = FieldErrors::new();
                        errors.insert(CUSTOM_ERROR_KEY, message);
                        errors
                    }
                };
                self.status = FormStatus::Error;
            }
            Err(err) => {
                tracing::warn!("Note submission failed: {}", err);
                self.status = FormStatus::ErrorNetwork;
            }
        }

        self.status
    }

    /// Current pipeline status
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Field-keyed errors from the last submission
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Error message for one field, if any
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field)
    }

    /// Persisted note returned by the last successful submission
    pub fn saved_note(&self) -> Option<&Note> {
        self.saved.as_ref()
    }
}

/// Assemble the draft for the selected note kind.
///
/// TEXT drafts carry the content verbatim; CHECKLIST drafts carry the
/// content as optional extra text plus a snapshot of the editor's items.
fn build_draft(input: NoteInput, checklist: &ChecklistEditor, auth: &AuthSession) -> NoteDraft {
    match input.kind {
        NoteKind::Text => NoteDraft::text(auth.user_id, input.title, input.content),
        NoteKind::Checklist => NoteDraft::checklist(
            auth.user_id,
            input.title,
            Some(input.content),
            checklist.items().to_vec(),
        ),
    }
}
