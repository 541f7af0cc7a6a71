//! Dictionary details.

use serde_json::Value;

use super::AdminClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::pagination::{normalize_page, PaginatedResult};
use crate::transport::Transport;
use crate::types::{DictDetailItem, DictDetailQuery};

impl AdminClient {
    pub fn build_dict_detail_page(&self, query: &DictDetailQuery) -> Result<HttpRequest, ApiError> {
        HttpRequest::get(self.url("/glk/admin/sys/dictDetail/getDictDetailPage")).with_query(query)
    }

    pub fn parse_dict_detail_page(&self, query: &DictDetailQuery, payload: Value) -> PaginatedResult<DictDetailItem> {
        normalize_page(payload, query.into())
    }

    /// One page of the entries of dictionary `query.dict_name`.
    pub fn fetch_dict_detail_page(
        &self,
        transport: &impl Transport,
        query: &DictDetailQuery,
    ) -> Result<PaginatedResult<DictDetailItem>, ApiError> {
        let payload = self.send(transport, self.build_dict_detail_page(query)?)?;
        Ok(self.parse_dict_detail_page(query, payload))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::client::test_support::*;
    use crate::http::HttpMethod;
    use crate::types::EntityId;

    use super::*;

    fn query() -> DictDetailQuery {
        DictDetailQuery {
            dict_name: "user_status".to_string(),
            page: 1,
            limit: 10,
        }
    }

    #[test]
    fn build_dict_detail_page_uses_get_with_query() {
        let req = client().build_dict_detail_page(&query()).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url(),
            "http://localhost:3000/glk/admin/sys/dictDetail/getDictDetailPage?dictName=user_status&limit=10&page=1"
        );
    }

    #[test]
    fn dict_detail_page_is_normalized() {
        let transport = StubTransport::replying(Ok(json!({
            "list": [
                {"id": 1, "label": "Enabled", "value": "0"},
                {"id": "2", "label": "Disabled", "value": "1"}
            ],
            "totalCount": 2
        })));
        let page = client().fetch_dict_detail_page(&transport, &query()).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.records[1].id, EntityId::from("2"));
        assert_eq!(page.records[1].attribute_str("label"), Some("Disabled"));
    }

    #[test]
    fn dict_detail_null_payload_is_empty_page() {
        let page = client().parse_dict_detail_page(&query(), Value::Null);
        assert!(page.records.is_empty());
        assert_eq!((page.total, page.current, page.size), (0, 1, 10));
    }
}
