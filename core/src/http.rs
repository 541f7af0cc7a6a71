//! HTTP request types for the host-does-IO pattern.
//!
//! # Design
//! Requests are plain data. The core builds `HttpRequest` values and never
//! touches the network; the host's `Transport` executes them and hands back
//! the decoded business payload. Keeping the request inert makes every
//! adapter testable by comparing values.
//!
//! The legacy client sent paging and filter fields as URL query parameters
//! even on POST, so `query` and `body` are separate fields rather than one
//! "params" blob.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// HTTP method for a request. The legacy backend only speaks GET and POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `AdminClient::build_*` methods and executed by a `Transport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Base URL joined with the route, without the query string.
    pub path: String,
    /// Query parameters, sorted by key.
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// JSON body text.
    pub body: Option<String>,
    /// Ask the transport to raise its success notification once the call
    /// succeeds.
    pub notify_on_success: bool,
}

impl HttpRequest {
    pub(crate) fn get(path: String) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            notify_on_success: false,
        }
    }

    pub(crate) fn post(path: String) -> Self {
        Self {
            method: HttpMethod::Post,
            ..Self::get(path)
        }
    }

    pub(crate) fn with_query<P: Serialize>(mut self, params: &P) -> Result<Self, ApiError> {
        self.query = query_pairs(params)?;
        Ok(self)
    }

    pub(crate) fn with_json_body<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.headers = vec![("content-type".to_string(), "application/json".to_string())];
        self.body = Some(body);
        Ok(self)
    }

    pub(crate) fn notify_on_success(mut self, notify: bool) -> Self {
        self.notify_on_success = notify;
        self
    }

    /// Full URL including the percent-encoded query string.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }

    /// Look up a query parameter by key.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Flatten a serializable params struct into query pairs.
///
/// `null` fields are dropped, scalars are rendered as text, nested arrays and
/// objects are rendered as compact JSON.
fn query_pairs<P: Serialize>(params: &P) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(params).map_err(|e| ApiError::Serialization(e.to_string()))?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ApiError::Serialization(format!(
                "query params must serialize to an object, got {other}"
            )))
        }
    };

    let mut pairs: Vec<(String, String)> = map
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                nested => nested.to_string(),
            };
            Some((key, text))
        })
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn query_pairs_skip_nulls_and_sort_keys() {
        let pairs = query_pairs(&json!({"page": 2, "limit": 20, "account": null, "name": "ops"})).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("limit".to_string(), "20".to_string()),
                ("name".to_string(), "ops".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_render_nested_values_as_json() {
        let pairs = query_pairs(&json!({"ids": [1, 2], "active": true})).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("active".to_string(), "true".to_string()),
                ("ids".to_string(), "[1,2]".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_reject_non_objects() {
        let err = query_pairs(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ApiError::Serialization(_)));
    }

    #[test]
    fn url_encodes_query() {
        let req = HttpRequest::get("http://localhost:3000/glk/admin/sys/dictDetail/getDictDetailPage".to_string())
            .with_query(&json!({"dictName": "user status", "page": 1}))
            .unwrap();
        assert_eq!(
            req.url(),
            "http://localhost:3000/glk/admin/sys/dictDetail/getDictDetailPage?dictName=user%20status&page=1"
        );
    }

    #[test]
    fn url_without_query_is_the_path() {
        let req = HttpRequest::post("http://localhost:3000/glk/admin/menu/getMenuAll".to_string());
        assert_eq!(req.url(), req.path);
        assert_eq!(req.method, HttpMethod::Post);
        assert!(req.body.is_none());
        assert!(!req.notify_on_success);
    }

    #[test]
    fn json_body_sets_content_type() {
        let req = HttpRequest::post("http://x/y".to_string())
            .with_json_body(&json!({"id": 7}))
            .unwrap();
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert_eq!(req.body.as_deref(), Some(r#"{"id":7}"#));
    }
}
