//! In-memory stand-in for the legacy admin backend.
//!
//! Serves the admin user, role, menu, department and dictionary routes with
//! the backend's quirks intact: every answer is wrapped in a
//! `{code, msg, data}` envelope with HTTP 200, business failures use a
//! non-200 `code`, pages are `{list, totalCount}`, the department list is a
//! bare array, the child-menu tree is wrapped in one more `data` object, and
//! `isForbidden` flags come in three JSON types.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Success code of the legacy envelope.
pub const CODE_OK: i64 = 200;
/// Generic business failure code of the legacy envelope.
pub const CODE_FAILED: i64 = 500;

/// The legacy response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    pub msg: String,
    pub data: Value,
}

fn ok(data: Value) -> Json<Envelope> {
    Json(Envelope {
        code: CODE_OK,
        msg: "success".to_string(),
        data,
    })
}

fn done() -> Json<Envelope> {
    ok(Value::Null)
}

fn fail(msg: &str) -> Json<Envelope> {
    warn!(msg, "business failure");
    Json(Envelope {
        code: CODE_FAILED,
        msg: msg.to_string(),
        data: Value::Null,
    })
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub account: String,
    pub phone: String,
    pub role_id: i64,
    pub dept_id: i64,
    /// Stored as received; the backend never normalized its type.
    pub is_forbidden: Value,
    pub create_time: String,
    pub password_reset: bool,
}

#[derive(Debug, Clone)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub describes: Option<String>,
    /// Number on some rows, string on others.
    pub data_scope: Value,
    pub data_scope_dept: Option<String>,
    pub menu_ids: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub id: i64,
    /// `0` for top-level menus.
    pub pid: i64,
    pub name: String,
    pub path: String,
    pub describes: Option<String>,
    pub sort: i64,
    pub menu_type: i64,
}

#[derive(Debug, Clone)]
pub struct Dept {
    pub id: i64,
    pub pid: i64,
    pub dept_name: String,
}

#[derive(Debug, Clone)]
pub struct DictDetail {
    pub id: i64,
    pub dict_name: String,
    pub label: String,
    pub value: String,
    pub dict_sort: i64,
}

#[derive(Debug, Clone, Default)]
pub struct LegacyDb {
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub menus: Vec<Menu>,
    pub depts: Vec<Dept>,
    pub dict_details: Vec<DictDetail>,
}

pub type Db = Arc<RwLock<LegacyDb>>;

/// Number of admin users in the seed data.
pub const SEED_USER_COUNT: i64 = 38;

impl LegacyDb {
    /// Seed data: 38 admin users, 3 roles, a two-level menu tree, a two-level
    /// department tree and the `user_status` dictionary.
    pub fn seeded() -> Self {
        let users = (1..=SEED_USER_COUNT)
            .map(|id| User {
                id,
                account: format!("admin{id:02}"),
                phone: format!("1380000{id:04}"),
                role_id: 1 + id % 3,
                dept_id: 10 + id % 3,
                is_forbidden: match id % 3 {
                    0 => json!("0"),
                    1 => json!(false),
                    _ => json!(0),
                },
                create_time: format!("2024-01-{:02} 09:03:07", 1 + id % 28),
                password_reset: false,
            })
            .collect();

        let roles = vec![
            Role {
                id: 1,
                name: "Administrator".to_string(),
                describes: Some("Full access".to_string()),
                data_scope: json!(1),
                data_scope_dept: None,
                menu_ids: vec![1, 2, 3, 4, 5],
            },
            Role {
                id: 2,
                name: "Auditor".to_string(),
                describes: Some("Read-only".to_string()),
                data_scope: json!("2"),
                data_scope_dept: Some("10,11".to_string()),
                menu_ids: vec![1, 2],
            },
            Role {
                id: 3,
                name: "Operator".to_string(),
                describes: None,
                data_scope: json!(3),
                data_scope_dept: None,
                menu_ids: vec![1, 2, 3],
            },
        ];

        let menu = |id, pid, name: &str, path: &str, sort, menu_type| Menu {
            id,
            pid,
            name: name.to_string(),
            path: path.to_string(),
            describes: None,
            sort,
            menu_type,
        };
        let menus = vec![
            menu(1, 0, "System", "/system", 1, 1),
            menu(2, 1, "Users", "/system/user", 1, 1),
            menu(3, 1, "Roles", "/system/role", 2, 1),
            menu(4, 1, "Menus", "/system/menu", 3, 1),
            menu(5, 2, "Export users", "", 1, 2),
        ];

        let depts = vec![
            Dept {
                id: 10,
                pid: 0,
                dept_name: "Head office".to_string(),
            },
            Dept {
                id: 11,
                pid: 10,
                dept_name: "Finance".to_string(),
            },
            Dept {
                id: 12,
                pid: 10,
                dept_name: "Operations".to_string(),
            },
        ];

        let dict_details = vec![
            DictDetail {
                id: 1,
                dict_name: "user_status".to_string(),
                label: "Enabled".to_string(),
                value: "0".to_string(),
                dict_sort: 1,
            },
            DictDetail {
                id: 2,
                dict_name: "user_status".to_string(),
                label: "Disabled".to_string(),
                value: "1".to_string(),
                dict_sort: 2,
            },
        ];

        Self {
            users,
            roles,
            menus,
            depts,
            dict_details,
        }
    }

    fn user_json(&self, user: &User) -> Value {
        let role_name = self.roles.iter().find(|r| r.id == user.role_id).map(|r| r.name.clone());
        let dept_name = self.depts.iter().find(|d| d.id == user.dept_id).map(|d| d.dept_name.clone());
        json!({
            "id": user.id,
            "account": user.account,
            "roleId": user.role_id,
            "roleName": role_name,
            "deptId": user.dept_id,
            "deptName": dept_name,
            "isForbidden": user.is_forbidden,
            "createTime": user.create_time,
        })
    }

    fn menu_tree(&self, pid: i64, visible: &dyn Fn(&Menu) -> bool) -> Vec<Value> {
        let mut children: Vec<&Menu> = self.menus.iter().filter(|m| m.pid == pid && visible(*m)).collect();
        children.sort_by_key(|m| m.sort);
        children
            .into_iter()
            .map(|m| {
                let mut node = json!({
                    "id": m.id,
                    "pid": m.pid,
                    "name": m.name,
                    "path": m.path,
                    "describes": m.describes,
                    "sort": m.sort,
                    "menuType": m.menu_type,
                });
                let nested = self.menu_tree(m.id, visible);
                if !nested.is_empty() {
                    node["childMenu"] = Value::Array(nested);
                }
                node
            })
            .collect()
    }

    fn dept_tree(&self, pid: i64) -> Vec<Value> {
        self.depts
            .iter()
            .filter(|d| d.pid == pid)
            .map(|d| {
                json!({
                    "id": d.id,
                    "deptName": d.dept_name,
                    "children": self.dept_tree(d.id),
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn app() -> Router {
    app_with(LegacyDb::seeded())
}

pub fn app_with(db: LegacyDb) -> Router {
    let db: Db = Arc::new(RwLock::new(db));
    Router::new()
        .route("/glk/admin/user/list/admin", post(list_admin_users))
        .route("/glk/admin/user/forbidden/admin", post(change_user_status))
        .route("/glk/admin/user/password/reset", post(reset_password))
        .route("/glk/admin/user/add", post(add_user))
        .route("/glk/admin/user/update", post(update_user))
        .route("/glk/admin/user/list/biz", post(list_biz_users))
        .route("/glk/admin/sys/dept/list", get(list_depts))
        .route("/glk/admin/sys/dept/treeList", get(dept_tree))
        .route("/admin/role/list", post(list_role_options))
        .route("/glk/admin/role/list", post(list_roles))
        .route("/glk/admin/role/addAndUpdate", post(save_role))
        .route("/glk/admin/role/delete", post(delete_roles))
        .route("/glk/admin/role/assignUser", post(assign_users))
        .route("/glk/admin/menu/getMenuAllByRole", post(menus_by_role))
        .route("/glk/admin/menu/getMenuAll", post(all_menus))
        .route("/glk/admin/menu/getMenuAllHasChild", post(menu_tree_with_children))
        .route("/glk/admin/menu/addAndUpdate", post(save_menu))
        .route("/glk/admin/menu/delete", post(delete_menus))
        .route("/glk/admin/menu/getRouteByRole", post(route_menus))
        .route("/glk/admin/sys/dictDetail/getDictDetailPage", get(dict_detail_page))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "legacy admin mock listening");
    }
    axum::serve(listener, app()).await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read an id the backend accepts as number or numeric string.
fn id_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Ids from a delete request: `id`, or comma-joined `ids`.
fn delete_ids(input: &DeleteInput) -> Vec<i64> {
    let mut ids: Vec<i64> = input.id.as_ref().and_then(id_of).into_iter().collect();
    if let Some(joined) = &input.ids {
        ids.extend(joined.split(',').filter_map(|s| s.trim().parse::<i64>().ok()));
    }
    ids
}

fn page_of<T: Clone>(items: &[T], page: u32, limit: u32) -> Vec<T> {
    let page = page.max(1) as usize;
    let limit = limit.max(1) as usize;
    items.iter().skip((page - 1) * limit).take(limit).cloned().collect()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub page: u32,
    pub limit: u32,
    pub account: Option<String>,
    pub phone: Option<String>,
}

async fn list_admin_users(State(db): State<Db>, Query(query): Query<UserListQuery>) -> Json<Envelope> {
    let db = db.read().await;
    let matching: Vec<&User> = db
        .users
        .iter()
        .filter(|u| query.account.as_deref().map_or(true, |a| u.account.contains(a)))
        .filter(|u| query.phone.as_deref().map_or(true, |p| u.phone.contains(p)))
        .collect();
    let list: Vec<Value> = page_of(&matching, query.page, query.limit)
        .into_iter()
        .map(|u| db.user_json(u))
        .collect();
    ok(json!({"list": list, "totalCount": matching.len()}))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusInput {
    pub user_id: Value,
    pub is_forbidden: Value,
}

async fn change_user_status(State(db): State<Db>, Json(input): Json<ChangeStatusInput>) -> Json<Envelope> {
    let mut db = db.write().await;
    let Some(id) = id_of(&input.user_id) else {
        return fail("userId is required");
    };
    match db.users.iter_mut().find(|u| u.id == id) {
        Some(user) => {
            user.is_forbidden = input.is_forbidden;
            done()
        }
        None => fail("user not found"),
    }
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordInput {
    pub id: Value,
}

async fn reset_password(State(db): State<Db>, Json(input): Json<ResetPasswordInput>) -> Json<Envelope> {
    let mut db = db.write().await;
    let id = id_of(&input.id);
    match db.users.iter_mut().find(|u| Some(u.id) == id) {
        Some(user) => {
            user.password_reset = true;
            done()
        }
        None => fail("user not found"),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserInput {
    pub account: String,
    pub role_id: Value,
    pub dept_id: Value,
}

async fn add_user(State(db): State<Db>, Json(input): Json<AddUserInput>) -> Json<Envelope> {
    let mut db = db.write().await;
    if db.users.iter().any(|u| u.account == input.account) {
        return fail("account already exists");
    }
    let (Some(role_id), Some(dept_id)) = (id_of(&input.role_id), id_of(&input.dept_id)) else {
        return fail("roleId and deptId are required");
    };
    let id = db.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
    db.users.push(User {
        id,
        account: input.account,
        phone: String::new(),
        role_id,
        dept_id,
        is_forbidden: json!(0),
        create_time: "2024-02-01 10:00:00".to_string(),
        password_reset: false,
    });
    info!(id, "admin user added");
    done()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub user_id: Value,
    pub account: String,
    pub role_id: Value,
    pub dept_id: Value,
}

async fn update_user(State(db): State<Db>, Json(input): Json<UpdateUserInput>) -> Json<Envelope> {
    let mut db = db.write().await;
    let id = id_of(&input.user_id);
    let (Some(role_id), Some(dept_id)) = (id_of(&input.role_id), id_of(&input.dept_id)) else {
        return fail("roleId and deptId are required");
    };
    match db.users.iter_mut().find(|u| Some(u.id) == id) {
        Some(user) => {
            user.account = input.account;
            user.role_id = role_id;
            user.dept_id = dept_id;
            done()
        }
        None => fail("user not found"),
    }
}

async fn list_biz_users(State(db): State<Db>, Query(query): Query<HashMap<String, String>>) -> Json<Envelope> {
    let db = db.read().await;
    let keyword = query.get("keyword").map(String::as_str).unwrap_or("");
    let list: Vec<Value> = db
        .users
        .iter()
        .filter(|u| u.account.contains(keyword))
        .map(|u| json!({"userId": u.id, "userName": u.account, "mobile": u.phone}))
        .collect();
    ok(json!({"list": list}))
}

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

async fn list_depts(State(db): State<Db>) -> Json<Envelope> {
    let db = db.read().await;
    let list: Vec<Value> = db
        .depts
        .iter()
        .map(|d| json!({"id": d.id, "deptName": d.dept_name}))
        .collect();
    ok(Value::Array(list))
}

async fn dept_tree(State(db): State<Db>) -> Json<Envelope> {
    let db = db.read().await;
    ok(Value::Array(db.dept_tree(0)))
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RoleListQuery {
    pub page: u32,
    pub limit: u32,
    pub name: Option<String>,
}

/// The older subsystem's role list: numeric `dataScope`, no name filter.
async fn list_role_options(State(db): State<Db>, Query(query): Query<RoleListQuery>) -> Json<Envelope> {
    let db = db.read().await;
    let list: Vec<Value> = page_of(&db.roles, query.page, query.limit)
        .iter()
        .map(|r| {
            json!({
                "id": r.id,
                "name": r.name,
                "describes": r.describes,
                "dataScope": id_of(&r.data_scope),
                "dataScopeDept": r.data_scope_dept,
            })
        })
        .collect();
    ok(json!({"list": list, "totalCount": db.roles.len()}))
}

async fn list_roles(State(db): State<Db>, Query(query): Query<RoleListQuery>) -> Json<Envelope> {
    let db = db.read().await;
    let matching: Vec<&Role> = db
        .roles
        .iter()
        .filter(|r| query.name.as_deref().map_or(true, |n| r.name.contains(n)))
        .collect();
    let list: Vec<Value> = page_of(&matching, query.page, query.limit)
        .into_iter()
        .map(|r| {
            json!({
                "id": r.id,
                "name": r.name,
                "describes": r.describes,
                "dataScope": r.data_scope,
                "dataScopeDept": r.data_scope_dept,
            })
        })
        .collect();
    ok(json!({"list": list, "totalCount": matching.len()}))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRoleInput {
    pub id: Option<Value>,
    pub name: String,
    pub describes: Option<String>,
    #[serde(default)]
    pub menu_id_list: Vec<Value>,
    pub data_scope: Option<Value>,
    pub data_scope_dept: Option<String>,
}

async fn save_role(State(db): State<Db>, Json(input): Json<SaveRoleInput>) -> Json<Envelope> {
    let mut db = db.write().await;
    let menu_ids: Vec<i64> = input.menu_id_list.iter().filter_map(id_of).collect();
    match input.id.as_ref().and_then(id_of) {
        Some(id) => match db.roles.iter_mut().find(|r| r.id == id) {
            Some(role) => {
                role.name = input.name;
                role.describes = input.describes;
                role.menu_ids = menu_ids;
                if let Some(scope) = input.data_scope {
                    role.data_scope = scope;
                }
                role.data_scope_dept = input.data_scope_dept;
                done()
            }
            None => fail("role not found"),
        },
        None => {
            if db.roles.iter().any(|r| r.name == input.name) {
                return fail("role name already exists");
            }
            let id = db.roles.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            db.roles.push(Role {
                id,
                name: input.name,
                describes: input.describes,
                data_scope: input.data_scope.unwrap_or(json!(1)),
                data_scope_dept: input.data_scope_dept,
                menu_ids,
            });
            info!(id, "role added");
            done()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteInput {
    pub id: Option<Value>,
    pub ids: Option<String>,
}

async fn delete_roles(State(db): State<Db>, Json(input): Json<DeleteInput>) -> Json<Envelope> {
    let ids = delete_ids(&input);
    if ids.is_empty() {
        return fail("id or ids is required");
    }
    let mut db = db.write().await;
    db.roles.retain(|r| !ids.contains(&r.id));
    done()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignUsersInput {
    pub role_id: Value,
    pub user_id_list: Vec<Value>,
}

async fn assign_users(State(db): State<Db>, Json(input): Json<AssignUsersInput>) -> Json<Envelope> {
    let mut db = db.write().await;
    let Some(role_id) = id_of(&input.role_id).filter(|id| db.roles.iter().any(|r| r.id == *id)) else {
        return fail("role not found");
    };
    let user_ids: Vec<i64> = input.user_id_list.iter().filter_map(id_of).collect();
    for user in db.users.iter_mut().filter(|u| user_ids.contains(&u.id)) {
        user.role_id = role_id;
    }
    done()
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RoleMenuInput {
    pub id: Value,
}

async fn menus_by_role(State(db): State<Db>, Json(input): Json<RoleMenuInput>) -> Json<Envelope> {
    let db = db.read().await;
    let id = id_of(&input.id);
    let Some(role) = db.roles.iter().find(|r| Some(r.id) == id) else {
        return fail("role not found");
    };
    let granted = role.menu_ids.clone();
    ok(Value::Array(db.menu_tree(0, &|m| granted.contains(&m.id))))
}

async fn all_menus(State(db): State<Db>) -> Json<Envelope> {
    let db = db.read().await;
    ok(Value::Array(db.menu_tree(0, &|_| true)))
}

#[derive(Debug, Deserialize)]
pub struct MenuTreeQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// This route wraps its tree in one more `data` object. Paging applies to
/// top-level menus only.
async fn menu_tree_with_children(State(db): State<Db>, Query(query): Query<MenuTreeQuery>) -> Json<Envelope> {
    let db = db.read().await;
    let tree = db.menu_tree(0, &|_| true);
    let tree = match (query.page, query.limit) {
        (Some(page), Some(limit)) => page_of(&tree, page, limit),
        _ => tree,
    };
    ok(json!({"data": tree}))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMenuInput {
    pub id: Option<Value>,
    pub pid: Option<Value>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub describes: Option<String>,
    pub sort: Option<i64>,
    pub menu_type: Option<i64>,
}

async fn save_menu(State(db): State<Db>, Json(input): Json<SaveMenuInput>) -> Json<Envelope> {
    let mut db = db.write().await;
    let pid = input.pid.as_ref().and_then(id_of);
    match input.id.as_ref().and_then(id_of) {
        Some(id) => match db.menus.iter_mut().find(|m| m.id == id) {
            Some(menu) => {
                if let Some(pid) = pid {
                    menu.pid = pid;
                }
                if let Some(name) = input.name {
                    menu.name = name;
                }
                if let Some(path) = input.path {
                    menu.path = path;
                }
                if input.describes.is_some() {
                    menu.describes = input.describes;
                }
                if let Some(sort) = input.sort {
                    menu.sort = sort;
                }
                if let Some(menu_type) = input.menu_type {
                    menu.menu_type = menu_type;
                }
                done()
            }
            None => fail("menu not found"),
        },
        None => {
            let Some(name) = input.name else {
                return fail("name is required");
            };
            let id = db.menus.iter().map(|m| m.id).max().unwrap_or(0) + 1;
            db.menus.push(Menu {
                id,
                pid: pid.unwrap_or(0),
                name,
                path: input.path.unwrap_or_default(),
                describes: input.describes,
                sort: input.sort.unwrap_or(0),
                menu_type: input.menu_type.unwrap_or(1),
            });
            info!(id, "menu added");
            done()
        }
    }
}

async fn delete_menus(State(db): State<Db>, Json(input): Json<DeleteInput>) -> Json<Envelope> {
    let ids = delete_ids(&input);
    if ids.is_empty() {
        return fail("id or ids is required");
    }
    let mut db = db.write().await;
    if db.menus.iter().any(|m| ids.contains(&m.pid) && !ids.contains(&m.id)) {
        return fail("menu has children");
    }
    db.menus.retain(|m| !ids.contains(&m.id));
    done()
}

async fn route_menus(State(db): State<Db>) -> Json<Envelope> {
    let db = db.read().await;
    let routes: Vec<Value> = db
        .menus
        .iter()
        .filter(|m| m.menu_type == 1)
        .map(|m| json!({"path": m.path, "name": m.name, "meta": {"title": m.name}}))
        .collect();
    ok(Value::Array(routes))
}

// ---------------------------------------------------------------------------
// Dictionaries
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictDetailQuery {
    pub dict_name: String,
    pub page: u32,
    pub limit: u32,
}

/// Unknown dictionaries answer with an empty `list` and no `totalCount`.
async fn dict_detail_page(State(db): State<Db>, Query(query): Query<DictDetailQuery>) -> Json<Envelope> {
    let db = db.read().await;
    let mut matching: Vec<&DictDetail> = db
        .dict_details
        .iter()
        .filter(|d| d.dict_name == query.dict_name)
        .collect();
    if matching.is_empty() {
        return ok(json!({"list": []}));
    }
    matching.sort_by_key(|d| d.dict_sort);
    let list: Vec<Value> = page_of(&matching, query.page, query.limit)
        .into_iter()
        .map(|d| {
            json!({
                "id": d.id,
                "dictName": d.dict_name,
                "label": d.label,
                "value": d.value,
                "dictSort": d.dict_sort,
            })
        })
        .collect();
    ok(json!({"list": list, "totalCount": matching.len()}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_of_slices_one_based_pages() {
        let items: Vec<i64> = (1..=38).collect();
        assert_eq!(page_of(&items, 2, 20), (21..=38).collect::<Vec<_>>());
        assert!(page_of(&items, 3, 20).is_empty());
        assert_eq!(page_of(&items, 0, 0), vec![1]);
    }

    #[test]
    fn delete_ids_accepts_id_and_joined_ids() {
        let input = DeleteInput {
            id: Some(json!("4")),
            ids: Some("5, 6,x".to_string()),
        };
        assert_eq!(delete_ids(&input), vec![4, 5, 6]);
    }

    #[test]
    fn seeded_flags_use_mixed_types() {
        let db = LegacyDb::seeded();
        let kinds: Vec<&str> = db.users[..3]
            .iter()
            .map(|u| match &u.is_forbidden {
                Value::Bool(_) => "bool",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["bool", "number", "string"]);
    }

    #[test]
    fn menu_tree_nests_by_pid() {
        let db = LegacyDb::seeded();
        let tree = db.menu_tree(0, &|_| true);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0]["childMenu"].as_array().unwrap().len(), 3);
        assert_eq!(tree[0]["childMenu"][0]["childMenu"][0]["name"], "Export users");
    }
}
