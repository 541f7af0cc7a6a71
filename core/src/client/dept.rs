//! Departments.

use serde_json::Value;

use super::AdminClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::payload::bare_list;
use crate::transport::Transport;
use crate::types::AdminDeptItem;

impl AdminClient {
    pub fn build_admin_dept_list(&self) -> HttpRequest {
        HttpRequest::get(self.url("/glk/admin/sys/dept/list"))
    }

    /// The flat list comes back as a bare array.
    pub fn parse_admin_dept_list(&self, payload: Value) -> Vec<AdminDeptItem> {
        bare_list(payload)
    }

    /// Flat department list for the "department" select box.
    pub fn fetch_admin_dept_list(&self, transport: &impl Transport) -> Result<Vec<AdminDeptItem>, ApiError> {
        let payload = self.send(transport, self.build_admin_dept_list())?;
        Ok(self.parse_admin_dept_list(payload))
    }

    pub fn build_dept_tree(&self) -> HttpRequest {
        HttpRequest::get(self.url("/glk/admin/sys/dept/treeList"))
    }

    /// Department tree used for data-scope permissions, as the backend nests
    /// it.
    pub fn fetch_dept_tree(&self, transport: &impl Transport) -> Result<Value, ApiError> {
        self.send(transport, self.build_dept_tree())
    }
}
