//! Application configuration
//!
//! Central location for validation boundaries shared with the notes service
//! and for the HTTP client configuration.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

// ===== Note Validation Boundaries =====

/// Minimum note title length in characters
pub const TITLE_MIN_CHARS: usize = 2;
/// Maximum note title length in characters
pub const TITLE_MAX_CHARS: usize = 100;

/// Minimum content length in characters for TEXT notes
pub const CONTENT_MIN_CHARS: usize = 10;
/// Maximum content length in characters for TEXT notes
pub const CONTENT_MAX_CHARS: usize = 1000;

/// Minimum checklist item text length in characters
pub const ITEM_TEXT_MIN_CHARS: usize = 2;
/// Maximum checklist item text length in characters
pub const ITEM_TEXT_MAX_CHARS: usize = 50;

// ===== HTTP Client Settings =====

/// Timeout applied to every request to the notes service
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User agent reported by the HTTP client
pub const USER_AGENT: &str = concat!("notekeep/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration for the notes service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the notes service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from disk, falling back to defaults if not exists
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).await?;
        let config: ApiConfig = serde_json::from_str(&content)
            .map_err(|e| AppError::Generic(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to disk
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Generic(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content).await?;
        tracing::info!("Config saved to {:?}", path);

        Ok(())
    }
}
