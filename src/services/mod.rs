//! Services module
//!
//! Client-side flows coordinating form state, the checklist editor, the
//! remote store, and the read cache.

pub mod notes;
pub mod submission;
pub mod toggle;

pub use notes::NotesService;
pub use submission::{NoteInput, SubmissionService};
pub use toggle::ToggleService;
