//! Error types for the admin API client.
//!
//! # Design
//! `TransportError` is produced by `Transport` implementations and reaches
//! the caller unchanged inside `ApiError::Transport`; adapters never
//! translate or retry it. Payload shape problems are not errors at all: the
//! normalizers degrade them to empty results.

use thiserror::Error;

/// Failures raised by the transport that executes an `HttpRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The server answered 2xx but the business envelope carried a failure
    /// code.
    #[error("business error {code}: {message}")]
    Business { code: i64, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
}

/// Errors returned by `AdminClient` adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request parameters could not be encoded.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_display_unchanged_through_api_error() {
        let err: ApiError = TransportError::Business {
            code: 500,
            message: "user not found".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "business error 500: user not found");
    }

    #[test]
    fn http_error_display() {
        let err = TransportError::Http {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502: bad gateway");
    }
}
