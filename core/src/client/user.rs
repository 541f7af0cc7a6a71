//! Admin user management.

use serde_json::Value;

use super::AdminClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::pagination::{normalize_page, PaginatedResult};
use crate::transport::Transport;
use crate::types::{
    AddAdminUser, AdminUserItem, AdminUserSearchParams, BizUserQuery, ChangeUserStatus,
    ResetUserPassword, UpdateAdminUser,
};

impl AdminClient {
    pub fn build_admin_user_list(&self, params: &AdminUserSearchParams) -> Result<HttpRequest, ApiError> {
        HttpRequest::post(self.url("/glk/admin/user/list/admin")).with_query(params)
    }

    pub fn parse_admin_user_list(
        &self,
        params: &AdminUserSearchParams,
        payload: Value,
    ) -> PaginatedResult<AdminUserItem> {
        normalize_page(payload, params.into())
    }

    /// One page of admin users, filtered by account and phone.
    pub fn fetch_admin_user_list(
        &self,
        transport: &impl Transport,
        params: &AdminUserSearchParams,
    ) -> Result<PaginatedResult<AdminUserItem>, ApiError> {
        let payload = self.send(transport, self.build_admin_user_list(params)?)?;
        Ok(self.parse_admin_user_list(params, payload))
    }

    pub fn build_change_admin_user_status(&self, input: &ChangeUserStatus) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::post(self.url("/glk/admin/user/forbidden/admin"))
            .with_json_body(input)?
            .notify_on_success(true))
    }

    /// Enable or disable an admin user.
    pub fn change_admin_user_status(
        &self,
        transport: &impl Transport,
        input: &ChangeUserStatus,
    ) -> Result<(), ApiError> {
        self.execute(transport, self.build_change_admin_user_status(input)?)
    }

    pub fn build_reset_admin_user_password(&self, input: &ResetUserPassword) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::post(self.url("/glk/admin/user/password/reset"))
            .with_json_body(input)?
            .notify_on_success(true))
    }

    pub fn reset_admin_user_password(
        &self,
        transport: &impl Transport,
        input: &ResetUserPassword,
    ) -> Result<(), ApiError> {
        self.execute(transport, self.build_reset_admin_user_password(input)?)
    }

    pub fn build_add_admin_user(&self, input: &AddAdminUser) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::post(self.url("/glk/admin/user/add"))
            .with_json_body(input)?
            .notify_on_success(true))
    }

    pub fn add_admin_user(&self, transport: &impl Transport, input: &AddAdminUser) -> Result<(), ApiError> {
        self.execute(transport, self.build_add_admin_user(input)?)
    }

    pub fn build_update_admin_user(&self, input: &UpdateAdminUser) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::post(self.url("/glk/admin/user/update"))
            .with_json_body(input)?
            .notify_on_success(true))
    }

    pub fn update_admin_user(&self, transport: &impl Transport, input: &UpdateAdminUser) -> Result<(), ApiError> {
        self.execute(transport, self.build_update_admin_user(input)?)
    }

    pub fn build_admin_user_biz_list(&self, query: &BizUserQuery) -> Result<HttpRequest, ApiError> {
        HttpRequest::post(self.url("/glk/admin/user/list/biz")).with_query(query)
    }

    /// Business-side users. Both the query and the payload are untyped; the
    /// payload is returned as decoded.
    pub fn fetch_admin_user_biz_list(
        &self,
        transport: &impl Transport,
        query: &BizUserQuery,
    ) -> Result<Value, ApiError> {
        self.send(transport, self.build_admin_user_biz_list(query)?)
    }
}
