//! NoteKeep client core
//!
//! Data model, validation, checklist state, and submission machinery for
//! the NoteKeep note-taking application. A UI layer renders the state owned
//! here; persistence lives behind the remote notes service.

pub mod api;
pub mod auth;
pub mod cache;
pub mod checklist;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod validation;

pub use error::{AppError, Result};
