//! Stateless request builders and payload parsers for the legacy admin API.
//!
//! # Design
//! `AdminClient` holds only a `base_url` and carries no mutable state between
//! calls. Every backend operation is split the same way:
//!
//! - `build_*` produces an `HttpRequest` and never touches the network;
//! - `parse_*` (reads only) reshapes the decoded payload into the contract
//!   the console consumes, and never fails;
//! - the un-prefixed method (`fetch_*`, or the mutation's name) runs
//!   `build_*`, hands the request to a `Transport`, and parses the result.
//!
//! Transport failures pass through untouched. Mutations resolve to `()`
//! whatever the backend sends back.
//!
//! Routes are copied verbatim from the backend, including the one role list
//! that lives outside the `/glk` prefix.

mod dept;
mod dict;
mod menu;
mod role;
mod user;

use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::transport::Transport;

/// Synchronous, stateless client for the legacy admin API.
#[derive(Debug, Clone)]
pub struct AdminClient {
    base_url: String,
}

impl AdminClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &str) -> String {
        format!("{}{route}", self.base_url)
    }

    /// Send `request` and return the business payload.
    fn send(&self, transport: &impl Transport, request: HttpRequest) -> Result<Value, ApiError> {
        debug!(
            method = request.method.as_str(),
            path = %request.path,
            notify = request.notify_on_success,
            "sending admin api request"
        );
        Ok(transport.send(&request)?)
    }

    /// Send a mutation; the payload, if any, is dropped.
    fn execute(&self, transport: &impl Transport, request: HttpRequest) -> Result<(), ApiError> {
        self.send(transport, request).map(drop)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::error::TransportError;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = AdminClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/glk/admin/sys/dept/list"), "http://localhost:3000/glk/admin/sys/dept/list");
    }

    #[test]
    fn from_config_uses_base_url() {
        let config = ClientConfig {
            base_url: "https://console.example.com/api/".to_string(),
        };
        assert_eq!(AdminClient::from_config(&config).base_url(), "https://console.example.com/api");
    }

    #[test]
    fn transport_errors_are_not_translated() {
        let transport = StubTransport::replying(Err(TransportError::Http {
            status: 503,
            body: "maintenance".to_string(),
        }));
        let err = client()
            .execute(&transport, HttpRequest::post(client().url("/glk/admin/menu/delete")))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Transport(TransportError::Http {
                status: 503,
                body: "maintenance".to_string(),
            })
        );
    }

    #[test]
    fn mutations_ignore_the_payload() {
        let transport = StubTransport::replying(Ok(serde_json::json!({"unexpected": true})));
        assert_eq!(
            client().execute(&transport, HttpRequest::post(client().url("/glk/admin/menu/delete"))),
            Ok(())
        );
    }
}
