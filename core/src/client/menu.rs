//! Menu trees and menu maintenance.

use serde_json::Value;

use super::AdminClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::payload::unwrap_data_list;
use crate::transport::Transport;
use crate::types::{AdminMenuItem, DeleteTarget, MenuTreeQuery, RoleMenuQuery, SaveMenu};

impl AdminClient {
    pub fn build_admin_menu_tree(&self, query: &MenuTreeQuery) -> Result<HttpRequest, ApiError> {
        HttpRequest::post(self.url("/glk/admin/menu/getMenuAllHasChild")).with_query(query)
    }

    /// The tree arrives either bare or wrapped in `{data: [...]}`.
    pub fn parse_admin_menu_tree(&self, payload: Value) -> Vec<AdminMenuItem> {
        unwrap_data_list(payload)
    }

    /// The full menu tree with children, for the menu management page.
    pub fn fetch_admin_menu_tree(
        &self,
        transport: &impl Transport,
        query: &MenuTreeQuery,
    ) -> Result<Vec<AdminMenuItem>, ApiError> {
        let payload = self.send(transport, self.build_admin_menu_tree(query)?)?;
        Ok(self.parse_admin_menu_tree(payload))
    }

    pub fn build_menu_by_role(&self, query: &RoleMenuQuery) -> Result<HttpRequest, ApiError> {
        HttpRequest::post(self.url("/glk/admin/menu/getMenuAllByRole")).with_json_body(query)
    }

    /// Menu tree granted to one role, as the backend nests it.
    pub fn fetch_menu_by_role(&self, transport: &impl Transport, query: &RoleMenuQuery) -> Result<Value, ApiError> {
        self.send(transport, self.build_menu_by_role(query)?)
    }

    pub fn build_all_menus(&self) -> HttpRequest {
        HttpRequest::post(self.url("/glk/admin/menu/getMenuAll"))
    }

    /// Every menu, for the role permission editor, as the backend nests it.
    pub fn fetch_all_menus(&self, transport: &impl Transport) -> Result<Value, ApiError> {
        self.send(transport, self.build_all_menus())
    }

    pub fn build_route_menu_list(&self) -> HttpRequest {
        HttpRequest::post(self.url("/glk/admin/menu/getRouteByRole"))
    }

    /// Route definitions visible to the signed-in role.
    pub fn fetch_route_menu_list(&self, transport: &impl Transport) -> Result<Value, ApiError> {
        self.send(transport, self.build_route_menu_list())
    }

    pub fn build_save_or_update_menu(&self, input: &SaveMenu) -> Result<HttpRequest, ApiError> {
        HttpRequest::post(self.url("/glk/admin/menu/addAndUpdate")).with_json_body(input)
    }

    pub fn save_or_update_menu(&self, transport: &impl Transport, input: &SaveMenu) -> Result<(), ApiError> {
        self.execute(transport, self.build_save_or_update_menu(input)?)
    }

    pub fn build_delete_menu(&self, target: &DeleteTarget) -> Result<HttpRequest, ApiError> {
        HttpRequest::post(self.url("/glk/admin/menu/delete")).with_json_body(target)
    }

    pub fn delete_menu(&self, transport: &impl Transport, target: &DeleteTarget) -> Result<(), ApiError> {
        self.execute(transport, self.build_delete_menu(target)?)
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

    fn tree() -> Value {
        json!([
            {"id": 1, "name": "System", "path": "/system", "menuType": 1, "childMenu": [
                {"id": 2, "pid": 1, "name": "Users", "path": "/system/user", "menuType": 1},
                {"id": 3, "pid": 1, "name": "Export", "menuType": 2}
            ]}
        ])
    }

    #[test]
    fn menu_tree_without_paging_has_no_query() {
        let req = client().build_admin_menu_tree(&MenuTreeQuery::default()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/glk/admin/menu/getMenuAllHasChild");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn menu_tree_unwraps_data_envelope() {
        let transport = StubTransport::replying(Ok(json!({"data": tree()})));
        let menus = client()
            .fetch_admin_menu_tree(&transport, &MenuTreeQuery::default())
            .unwrap();
        assert_eq!(menus.len(), 1);
        let children = menus[0].child_menu.as_ref().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].path, "");
        assert_eq!(children[1].menu_type, Some(2));
    }

    #[test]
    fn menu_tree_accepts_bare_tree() {
        let menus = client().parse_admin_menu_tree(tree());
        assert_eq!(menus[0].name, "System");
    }

    #[test]
    fn menu_tree_keeps_textual_ids() {
        let menus = client().parse_admin_menu_tree(json!({"data": [
            {"id": "1", "name": "System", "childMenu": [{"id": "2", "pid": "1", "name": "Users"}]},
            {"id": 7, "name": "Reports"}
        ]}));
        assert_eq!(menus.len(), 2);
        assert_eq!(menus[0].id, EntityId::from("1"));
        let children = menus[0].child_menu.as_ref().unwrap();
        assert_eq!(children[0].pid, Some(EntityId::from("1")));
        assert_eq!(menus[1].id, EntityId::Number(7));
    }

    #[test]
    fn menu_tree_null_is_empty() {
        assert!(client().parse_admin_menu_tree(Value::Null).is_empty());
    }

    #[test]
    fn raw_tree_reads_are_returned_unmodified() {
        let transport = StubTransport::replying(Ok(tree()));
        let raw = client().fetch_all_menus(&transport).unwrap();
        assert_eq!(raw, tree());
        assert_eq!(transport.last_request().path, "http://localhost:3000/glk/admin/menu/getMenuAll");

        let transport = StubTransport::replying(Ok(tree()));
        let raw = client()
            .fetch_menu_by_role(&transport, &RoleMenuQuery { id: EntityId::Number(2) })
            .unwrap();
        assert_eq!(raw, tree());
        assert_eq!(transport.body_json(), json!({"id": 2}));

        let transport = StubTransport::replying(Ok(json!([{"path": "/dashboard"}])));
        let raw = client().fetch_route_menu_list(&transport).unwrap();
        assert_eq!(raw, json!([{"path": "/dashboard"}]));
        assert_eq!(
            transport.last_request().path,
            "http://localhost:3000/glk/admin/menu/getRouteByRole"
        );
    }

    #[test]
    fn save_menu_sends_only_set_fields() {
        let transport = StubTransport::default();
        client()
            .save_or_update_menu(
                &transport,
                &SaveMenu {
                    pid: Some(EntityId::Number(1)),
                    name: Some("Roles".to_string()),
                    path: Some("/system/role".to_string()),
                    menu_type: Some(1),
                    ..SaveMenu::default()
                },
            )
            .unwrap();
        let req = transport.last_request();
        assert_eq!(req.path, "http://localhost:3000/glk/admin/menu/addAndUpdate");
        assert!(!req.notify_on_success);
        assert_eq!(
            transport.body_json(),
            json!({"pid": 1, "name": "Roles", "path": "/system/role", "menuType": 1})
        );
    }

    #[test]
    fn delete_menu_sends_single_id() {
        let transport = StubTransport::default();
        client().delete_menu(&transport, &DeleteTarget::one(3_i64)).unwrap();
        assert_eq!(transport.last_request().path, "http://localhost:3000/glk/admin/menu/delete");
        assert_eq!(transport.body_json(), json!({"id": 3}));
    }
}
