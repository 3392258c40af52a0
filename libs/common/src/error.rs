//! Custom error types for the common library
//!
//! This module defines the error taxonomy shared by the feed service and its
//! callers. Malformed duration encodings and partial enrichment failures are
//! recovered where they happen and never show up here.

use thiserror::Error;

/// Message reported when the catalog credential is missing
pub const MISSING_API_KEY_MESSAGE: &str = "API key is not configured.";

/// Message used when an upstream failure carries no message of its own
pub const GENERIC_UPSTREAM_MESSAGE: &str = "Something went wrong";

/// Custom error type for feed operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// A required configuration value is missing or invalid
    #[error("{0}")]
    Configuration(String),

    /// The catalog call failed or returned a non-success status
    #[error("{message}")]
    Upstream {
        /// HTTP status reported by (or assigned to) the failed call
        status: u16,
        /// Best available human-readable message
        message: String,
    },

    /// Unknown sort mode name
    #[error("Invalid sort mode: {0}")]
    InvalidSortMode(String),
}

impl FeedError {
    /// Error for a missing catalog credential
    pub fn missing_api_key() -> Self {
        FeedError::Configuration(MISSING_API_KEY_MESSAGE.to_string())
    }

    /// Build an upstream error, falling back to the generic message
    pub fn upstream(status: u16, message: Option<String>) -> Self {
        FeedError::Upstream {
            status,
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_UPSTREAM_MESSAGE.to_string()),
        }
    }
}

/// Type alias for Result with FeedError
pub type FeedResult<T> = Result<T, FeedError>;
