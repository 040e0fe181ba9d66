//! HTTP client for the notes service
//!
//! Thin reqwest wrapper over the service's note endpoints. Every request
//! carries the session's bearer token; non-success responses are decoded
//! into field-aware rejections.

use super::{NoteStore, RejectionBody};
use crate::auth::AuthSession;
use crate::config::{ApiConfig, USER_AGENT};
use crate::error::{AppError, Result};
use crate::models::{EditNoteRequest, Note, NoteDraft};
use async_trait::async_trait;
use std::time::Duration;

/// reqwest-backed implementation of the note store contract
#[derive(Debug, Clone)]
pub struct HttpNoteStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNoteStore {
    /// Build a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client with default settings against the given base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let config = ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        };
        Self::new(&config)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a non-success response into a rejection error
    async fn rejection(response: reqwest::Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        parse_rejection(status, &body)
    }
}

/// Interpret a rejection body.
///
/// The service answers rejections with `{ message, errorObject? }`; bodies
/// that fail to parse fall back to the raw text, then to the status line.
fn parse_rejection(status: reqwest::StatusCode, body: &str) -> AppError {
    match serde_json::from_str::<RejectionBody>(body) {
        Ok(rejection) => AppError::Rejected {
            status: status.as_u16(),
            message: rejection.message,
            field_errors: rejection.error_object,
        },
        Err(_) => {
            let message = if body.trim().is_empty() {
                status.to_string()
            } else {
                body.to_string()
            };
            AppError::Rejected {
                status: status.as_u16(),
                message,
                field_errors: None,
            }
        }
    }
}

#[async_trait]
impl NoteStore for HttpNoteStore {
    async fn create_note(&self, draft: &NoteDraft, auth: &AuthSession) -> Result<Note> {
        tracing::debug!("Creating note for user {}", draft.user_id());

        let response = self
            .client
            .post(self.url("/api/note"))
            .bearer_auth(&auth.jwt)
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(response.json().await?)
    }

    async fn edit_note(&self, id: i64, draft: &NoteDraft, auth: &AuthSession) -> Result<Note> {
        tracing::debug!("Editing note {}", id);

        let response = self
            .client
            .put(self.url(&format!("/api/note/{}", id)))
            .bearer_auth(&auth.jwt)
            .json(&EditNoteRequest { id, draft })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(response.json().await?)
    }

    async fn get_note(&self, id: i64, auth: &AuthSession) -> Result<Note> {
        let response = self
            .client
            .get(self.url(&format!("/api/note/{}", id)))
            .bearer_auth(&auth.jwt)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(response.json().await?)
    }

    async fn list_notes(&self, user_id: i64, auth: &AuthSession) -> Result<Vec<Note>> {
        let response = self
            .client
            .get(self.url(&format!("/api/note/user/{}", user_id)))
            .bearer_auth(&auth.jwt)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(response.json().await?)
    }

    async fn delete_note(&self, id: i64, auth: &AuthSession) -> Result<()> {
        tracing::debug!("Deleting note {}", id);

        let response = self
            .client
            .delete(self.url(&format!("/api/note/{}", id)))
            .bearer_auth(&auth.jwt)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(())
    }
}
