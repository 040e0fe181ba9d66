//! Authentication context
//!
//! The client core never mints or validates credentials. The embedding
//! application signs the user in and hands the resulting session to every
//! call that reaches the notes service.

use serde::{Deserialize, Serialize};

/// Bearer credential and owner identity for calls to the notes service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Owning user id; positive for any signed-in session
    pub user_id: i64,
    /// Bearer token attached to every request
    pub jwt: String,
}

impl AuthSession {
    pub fn new(user_id: i64, jwt: impl Into<String>) -> Self {
        Self {
            user_id,
            jwt: jwt.into(),
        }
    }
}
