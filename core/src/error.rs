//! Error type for the fetch pipeline.
//!
//! # Design
//! A closed enum with one variant per failure kind; exactly one variant (or
//! a success value) reaches the completion callback per call, and no failure
//! is retried internally. Equality compares only the discriminating payload
//! of each kind — stored diagnostics (raw bodies, underlying causes) do not
//! factor in, so a `Status` from a live response and one constructed in a
//! test assertion compare equal on status + accepted set alone.

use std::fmt;

/// Errors produced by a fetch.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The transport failed before a usable response was obtained.
    Transport(String),

    /// The response status was outside the accepted set. The raw body and
    /// any transport failure are kept for diagnostics only.
    Status {
        status: u16,
        accepted: Vec<u16>,
        body: Option<Vec<u8>>,
        transport: Option<String>,
    },

    /// The response carried no body bytes where some were required.
    EmptyBody,

    /// The body is not syntactically valid JSON (reported when a keypath
    /// was requested and the generic parse failed).
    JsonParse(String),

    /// Keypath traversal did not resolve to a value; carries the full
    /// original path string.
    Keypath(String),

    /// The body (or the extracted sub-value) does not structurally match
    /// the target type.
    Decoding(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(cause) => write!(f, "transport failed: {cause}"),
            FetchError::Status { status, accepted, .. } => {
                write!(f, "status {status} not in accepted set of {} codes", accepted.len())
            }
            FetchError::EmptyBody => write!(f, "response carried no body"),
            FetchError::JsonParse(cause) => write!(f, "body is not valid JSON: {cause}"),
            FetchError::Keypath(path) => write!(f, "keypath {path} is missing or not valid"),
            FetchError::Decoding(cause) => write!(f, "decoding failed: {cause}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Same-kind comparison over discriminating payloads only. `Transport`,
/// `JsonParse` and `Decoding` carry nothing but a diagnostic cause, so any
/// two values of the same kind are equal.
impl PartialEq for FetchError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FetchError::Transport(_), FetchError::Transport(_)) => true,
            (
                FetchError::Status { status: a, accepted: x, .. },
                FetchError::Status { status: b, accepted: y, .. },
            ) => a == b && x == y,
            (FetchError::EmptyBody, FetchError::EmptyBody) => true,
            (FetchError::JsonParse(_), FetchError::JsonParse(_)) => true,
            (FetchError::Keypath(a), FetchError::Keypath(b)) => a == b,
            (FetchError::Decoding(_), FetchError::Decoding(_)) => true,
            _ => false,
        }
    }
}

impl Eq for FetchError {}
