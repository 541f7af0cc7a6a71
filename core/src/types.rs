//! DTOs for the legacy admin backend.
//!
//! # Design
//! Field names follow the backend (`camelCase` on the wire) and the shapes
//! the old console already relied on. Optional display fields default to
//! `None` so a record missing one still decodes.
//!
//! Two boundary unions absorb the backend's loose typing:
//! - `EntityId` for ids the backend accepts as either numbers or strings;
//! - `LegacyFlag` for on/off flags that arrive as booleans, `0`/`1`, or
//!   strings. The flag keeps its wire type so it round-trips unchanged;
//!   callers normalize it with `LegacyFlag::is_set` where they first need a
//!   `bool`.
//!
//! These types are defined independently of the mock-server crate;
//! integration tests catch drift between the two.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::date::format_date_time;
use crate::pagination::PageRequest;

// ---------------------------------------------------------------------------
// Boundary unions
// ---------------------------------------------------------------------------

/// An identifier the backend accepts as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{n}"),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Number(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Text(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        EntityId::Text(id)
    }
}

/// An on/off flag as the backend sends it: `true`, `1`, `"1"`, `"true"`...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyFlag {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl LegacyFlag {
    /// Collapse the flag to a `bool`.
    ///
    /// `true`, any non-zero number, and the text `"1"` or `"true"` (trimmed,
    /// any case) are set. Everything else, including unrecognised text, is
    /// not.
    pub fn is_set(&self) -> bool {
        match self {
            LegacyFlag::Bool(b) => *b,
            LegacyFlag::Number(n) => *n != 0,
            LegacyFlag::Text(s) => {
                let s = s.trim();
                s == "1" || s.eq_ignore_ascii_case("true")
            }
        }
    }
}

impl From<bool> for LegacyFlag {
    fn from(flag: bool) -> Self {
        LegacyFlag::Bool(flag)
    }
}

impl From<i64> for LegacyFlag {
    fn from(flag: i64) -> Self {
        LegacyFlag::Number(flag)
    }
}

impl From<&str> for LegacyFlag {
    fn from(flag: &str) -> Self {
        LegacyFlag::Text(flag.to_string())
    }
}

// ---------------------------------------------------------------------------
// Admin users
// ---------------------------------------------------------------------------

/// A row of the admin user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserItem {
    pub id: EntityId,
    pub account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_forbidden: Option<LegacyFlag>,
    /// Display time as sent: text or a millisecond timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_time: Option<Value>,
}

impl AdminUserItem {
    /// Whether the account is disabled. A missing flag means enabled.
    pub fn is_forbidden(&self) -> bool {
        self.is_forbidden.as_ref().is_some_and(LegacyFlag::is_set)
    }

    /// `create_time` rendered by `format_date_time`, or `""` when absent.
    pub fn create_time_display(&self) -> String {
        format_date_time(self.create_time.as_ref())
    }

    pub fn last_login_time_display(&self) -> String {
        format_date_time(self.last_login_time.as_ref())
    }
}

/// Search and paging parameters for the admin user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUserSearchParams {
    pub page: u32,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<&AdminUserSearchParams> for PageRequest {
    fn from(params: &AdminUserSearchParams) -> Self {
        PageRequest::new(params.page, params.limit)
    }
}

/// Enable or disable an admin user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeUserStatus {
    pub user_id: EntityId,
    pub is_forbidden: LegacyFlag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetUserPassword {
    pub id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAdminUser {
    pub account: String,
    pub role_id: EntityId,
    pub dept_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminUser {
    pub user_id: EntityId,
    pub account: String,
    pub role_id: EntityId,
    pub dept_id: EntityId,
}

/// Query for the business-side user list.
///
/// Untyped on purpose: the backend route accepts arbitrary filter fields and
/// documents none of them.
pub type BizUserQuery = Map<String, Value>;

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

/// An entry of the flat department list used by the "department" picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDeptItem {
    pub id: EntityId,
    pub dept_name: String,
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// An entry of the role picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleOption {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub describes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_scope: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_scope_dept: Option<String>,
}

/// A row of the role table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRoleItem {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub describes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_scope: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_scope_dept: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRoleSearchParams {
    pub page: u32,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&AdminRoleSearchParams> for PageRequest {
    fn from(params: &AdminRoleSearchParams) -> Self {
        PageRequest::new(params.page, params.limit)
    }
}

/// Create a role (no `id`) or update one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub describes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_id_list: Option<Vec<EntityId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_scope: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_scope_dept: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMenuQuery {
    pub id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleUsers {
    pub role_id: EntityId,
    pub user_id_list: Vec<EntityId>,
}

/// What to delete: a single `id`, or several ids joined into `ids`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,
}

impl DeleteTarget {
    pub fn one(id: impl Into<EntityId>) -> Self {
        Self {
            id: Some(id.into()),
            ids: None,
        }
    }

    /// Batch delete; the backend expects the ids comma-joined.
    pub fn many<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<EntityId>,
    {
        let ids = ids
            .into_iter()
            .map(|id| id.into().to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self {
            id: None,
            ids: Some(ids),
        }
    }
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

/// A node of the menu tree. `menu_type` is `1` for pages and `2` for buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMenuItem {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<EntityId>,
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub describes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_type: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_menu: Option<Vec<AdminMenuItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTreeQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Create a menu (no `id`) or update the fields that are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMenu {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub describes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_type: Option<i64>,
}

// ---------------------------------------------------------------------------
// Dictionaries
// ---------------------------------------------------------------------------

/// One entry of a dictionary. Apart from `id` the backend's fields vary per
/// dictionary, so they are kept as an attribute bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictDetailItem {
    pub id: EntityId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl DictDetailItem {
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictDetailQuery {
    pub dict_name: String,
    pub page: u32,
    pub limit: u32,
}

impl From<&DictDetailQuery> for PageRequest {
    fn from(query: &DictDetailQuery) -> Self {
        PageRequest::new(query.page, query.limit)
    }
}
