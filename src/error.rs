//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SwapError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}

/// Swap form errors. Every variant is terminal for the attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("A swap is already in progress")]
    SwapInProgress,

    #[error("Tokens are still loading")]
    TokensLoading,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
