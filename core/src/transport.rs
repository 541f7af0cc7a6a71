//! The seam between the adapters and whatever actually performs HTTP.
//!
//! Implementations own everything this crate leaves out: the network call,
//! authentication headers, unwrapping the backend's `{code, msg, data}`
//! envelope, and showing a success notification when
//! `HttpRequest::notify_on_success` is set.

use serde_json::Value;

use crate::error::TransportError;
use crate::http::HttpRequest;

/// Executes an `HttpRequest` and returns the decoded business payload.
///
/// A successful call with no business payload returns `Value::Null`.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<Value, TransportError>;
}
