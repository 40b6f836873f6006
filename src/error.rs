//! Error types for the DCS guide service.

use std::time::Duration;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Unknown email service '{0}' (expected resend or sendgrid)")]
    UnknownEmailService(String),
}

/// Errors raised while answering a chat message.
///
/// The chat route never reports these as HTTP failures; they are converted
/// into a canned fallback reply.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Invalid message format: {0}")]
    InvalidMessage(String),

    #[error("Processing budget of {budget:?} exceeded after {elapsed:?}")]
    BudgetExceeded { budget: Duration, elapsed: Duration },
}

/// Transactional email errors.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Email provider {provider} is not configured: {reason}")]
    NotConfigured { provider: String, reason: String },

    #[error("Email provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Email provider {provider} rejected the message ({status}): {body}")]
    Rejected {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Both providers failed. Primary ({primary}): {primary_error}; fallback ({fallback}): {fallback_error}")]
    AllProvidersFailed {
        primary: String,
        primary_error: String,
        fallback: String,
        fallback_error: String,
    },
}

/// Submission store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store request failed: {0}")]
    Request(String),

    #[error("Store rejected the write ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
