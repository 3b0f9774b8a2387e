//! Error types.
//!
//! The page never distinguishes relay failures to the visitor (they all
//! surface as [`SubmissionStatus::Error`](crate::contact::SubmissionStatus)),
//! but the variants keep the cause for the diagnostic log.

use thiserror::Error;

/// Failure of the outbound email relay call.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request body could not be serialized
    #[error("failed to encode relay request: {0}")]
    Encode(#[from] serde_json::Error),
    /// The request never produced a response (offline, CORS, DNS, ...)
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-success status
    #[error("relay rejected the message (HTTP {status}): {body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response text, kept for logging only
        body: String,
    },
}

/// A submission could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Another submission is still waiting on the relay
    #[error("a submission is already in flight")]
    AlreadySending,
}

/// A string did not name one of the page sections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

/// A string did not name one of the contact form fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);
