//! Role management and the role picker.

use serde_json::Value;

use super::AdminClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::pagination::{normalize_page, PageRequest, PaginatedResult};
use crate::payload::list_only;
use crate::transport::Transport;
use crate::types::{AdminRoleItem, AdminRoleSearchParams, AssignRoleUsers, DeleteTarget, RoleOption, SaveRole};

/// The role picker asks for everything in one page.
const ROLE_OPTIONS_PAGE: PageRequest = PageRequest { page: 1, limit: 1000 };

impl AdminClient {
    /// Role picker request.
    ///
    /// This route has no `/glk` prefix, unlike the role table's. The backend
    /// serves the two from different subsystems; keep them apart.
    pub fn build_admin_role_simple_list(&self) -> Result<HttpRequest, ApiError> {
        HttpRequest::post(self.url("/admin/role/list")).with_query(&ROLE_OPTIONS_PAGE)
    }

    pub fn parse_admin_role_simple_list(&self, payload: Value) -> Vec<RoleOption> {
        list_only(payload)
    }

    /// All roles, for the "role" select box.
    pub fn fetch_admin_role_simple_list(&self, transport: &impl Transport) -> Result<Vec<RoleOption>, ApiError> {
        let payload = self.send(transport, self.build_admin_role_simple_list()?)?;
        Ok(self.parse_admin_role_simple_list(payload))
    }

    pub fn build_admin_role_list(&self, params: &AdminRoleSearchParams) -> Result<HttpRequest, ApiError> {
        HttpRequest::post(self.url("/glk/admin/role/list")).with_query(params)
    }

    pub fn parse_admin_role_list(
        &self,
        params: &AdminRoleSearchParams,
        payload: Value,
    ) -> PaginatedResult<AdminRoleItem> {
        normalize_page(payload, params.into())
    }

    /// One page of the role table.
    pub fn fetch_admin_role_list(
        &self,
        transport: &impl Transport,
        params: &AdminRoleSearchParams,
    ) -> Result<PaginatedResult<AdminRoleItem>, ApiError> {
        let payload = self.send(transport, self.build_admin_role_list(params)?)?;
        Ok(self.parse_admin_role_list(params, payload))
    }

    /// The console shows its own message after saving a role, so the
    /// transport's success notification stays off here.
    pub fn build_save_or_update_role(&self, input: &SaveRole) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::post(self.url("/glk/admin/role/addAndUpdate"))
            .with_json_body(input)?
            .notify_on_success(false))
    }

    pub fn save_or_update_role(&self, transport: &impl Transport, input: &SaveRole) -> Result<(), ApiError> {
        self.execute(transport, self.build_save_or_update_role(input)?)
    }

    pub fn build_delete_role(&self, target: &DeleteTarget) -> Result<HttpRequest, ApiError> {
        HttpRequest::post(self.url("/glk/admin/role/delete")).with_json_body(target)
    }

    pub fn delete_role(&self, transport: &impl Transport, target: &DeleteTarget) -> Result<(), ApiError> {
        self.execute(transport, self.build_delete_role(target)?)
    }

    pub fn build_assign_role_users(&self, input: &AssignRoleUsers) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::post(self.url("/glk/admin/role/assignUser"))
            .with_json_body(input)?
            .notify_on_success(true))
    }

    /// Attach users to a role.
    pub fn assign_role_users(&self, transport: &impl Transport, input: &AssignRoleUsers) -> Result<(), ApiError> {
        self.execute(transport, self.build_assign_role_users(input)?)
    }
}
