//! Verify request builders, the page normalizer and the date formatter
//! against the JSON test vectors stored in `test-vectors/`.
//!
//! Bodies and records are compared as parsed JSON, not raw strings, so field
//! ordering never causes false negatives.

use admin_core::{
    format_date_time_in, normalize_page, AdminClient, ApiError, DateTimeValue, HttpMethod, HttpRequest, PageRequest,
    PaginatedResult,
};
use chrono::Utc;
use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> AdminClient {
    AdminClient::new(BASE_URL)
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn pairs(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let pair = pair.as_array().unwrap();
            (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn input<T: DeserializeOwned>(case: &Value) -> T {
    serde_json::from_value(case["input"].clone()).unwrap()
}

/// Run the builder named by `case["operation"]`.
fn build(c: &AdminClient, case: &Value) -> Result<HttpRequest, ApiError> {
    match case["operation"].as_str().unwrap() {
        "dict_detail_page" => c.build_dict_detail_page(&input(case)),
        "admin_user_list" => c.build_admin_user_list(&input(case)),
        "change_admin_user_status" => c.build_change_admin_user_status(&input(case)),
        "reset_admin_user_password" => c.build_reset_admin_user_password(&input(case)),
        "add_admin_user" => c.build_add_admin_user(&input(case)),
        "update_admin_user" => c.build_update_admin_user(&input(case)),
        "admin_user_biz_list" => c.build_admin_user_biz_list(&input(case)),
        "admin_dept_list" => Ok(c.build_admin_dept_list()),
        "dept_tree" => Ok(c.build_dept_tree()),
        "admin_role_simple_list" => c.build_admin_role_simple_list(),
        "admin_role_list" => c.build_admin_role_list(&input(case)),
        "save_or_update_role" => c.build_save_or_update_role(&input(case)),
        "delete_role" => c.build_delete_role(&input(case)),
        "assign_role_users" => c.build_assign_role_users(&input(case)),
        "menu_by_role" => c.build_menu_by_role(&input(case)),
        "all_menus" => Ok(c.build_all_menus()),
        "admin_menu_tree" => c.build_admin_menu_tree(&input(case)),
        "save_or_update_menu" => c.build_save_or_update_menu(&input(case)),
        "delete_menu" => c.build_delete_menu(&input(case)),
        "route_menu_list" => Ok(c.build_route_menu_list()),
        other => panic!("unknown operation: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/requests.json")) {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected_request"];

        let req = build(&c, &case).unwrap();

        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");
        assert_eq!(req.query, pairs(&expected["query"]), "{name}: query");
        assert_eq!(req.headers, pairs(&expected["headers"]), "{name}: headers");
        assert_eq!(
            req.notify_on_success,
            expected["notify_on_success"].as_bool().unwrap(),
            "{name}: notify"
        );
        match req.body.as_deref() {
            Some(body) => {
                let body: Value = serde_json::from_str(body).unwrap();
                assert_eq!(body, expected["body"], "{name}: body");
            }
            None => assert!(expected["body"].is_null(), "{name}: body should be None"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[test]
fn pagination_test_vectors() {
    for case in cases(include_str!("../../test-vectors/pagination.json")) {
        let name = case["name"].as_str().unwrap();
        let request: PageRequest = serde_json::from_value(case["request"].clone()).unwrap();

        let page: PaginatedResult<Value> = normalize_page(case["payload"].clone(), request);

        let expected: PaginatedResult<Value> = serde_json::from_value(case["expected"].clone()).unwrap();
        assert_eq!(page, expected, "{name}");
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn date_test_vectors() {
    for case in cases(include_str!("../../test-vectors/date.json")) {
        let name = case["name"].as_str().unwrap();

        let formatted = format_date_time_in(DateTimeValue::from(&case["input"]), &Utc);

        assert_eq!(formatted, case["expected"].as_str().unwrap(), "{name}");
    }
}
