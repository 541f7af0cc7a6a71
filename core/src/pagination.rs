//! Normalization of legacy `{list, totalCount}` pages.
//!
//! # Design
//! Every paged endpoint of the legacy backend answers with some variation of
//! `{list, totalCount}`: `totalCount` may be missing, `list` may be missing,
//! the whole payload may be `null`. `normalize_page` turns any of these into
//! one `PaginatedResult` and never fails. A payload that cannot be decoded
//! becomes an empty page so a list view shows "no rows" instead of an error.
//! Records are decoded one at a time: a row that does not fit the record
//! type is skipped and logged, and the rest of the page and the reported
//! `totalCount` survive.
//!
//! `records.len() <= size` holds for every page. A server that returns more
//! rows than requested has the surplus cut off, even though the old console
//! showed everything it received.
//!
//! `current` and `size` echo what the caller asked for, not what the server
//! did, so the pager stays consistent with the request even when the server
//! silently clamps the page size.
//!
//! The normalizer takes a raw `Value` and returns a typed page, so it can only
//! sit at the transport boundary; feeding it its own output does not
//! type-check.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// The paging part of a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }
}

/// One page of records in the shape the console's tables consume.
///
/// `records.len() <= size` always holds. `total` is the server's count, or
/// the number of records when the server did not send one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub current: u32,
    pub size: u32,
}

impl<T> PaginatedResult<T> {
    fn empty(request: PageRequest) -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            current: request.page.max(1),
            size: request.limit.max(1),
        }
    }
}

/// The raw list payload as the backend sends it. Not part of the public API.
///
/// Rows stay untyped until `decode_records`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LegacyListPayload {
    pub(crate) list: Option<Vec<Value>>,
    pub(crate) total_count: Option<Value>,
}

impl LegacyListPayload {
    fn into_page<T: DeserializeOwned>(self, request: PageRequest) -> PaginatedResult<T> {
        let Some(rows) = self.list else {
            if self.total_count.is_some() {
                debug!("list payload has totalCount but no list, returning empty page");
            }
            return PaginatedResult::empty(request);
        };
        let mut records: Vec<T> = decode_records(rows);

        let total = self
            .total_count
            .as_ref()
            .and_then(reported_total)
            .unwrap_or(records.len() as u64);

        let size = request.limit.max(1);
        if records.len() > size as usize {
            warn!(
                record = std::any::type_name::<T>(),
                returned = records.len(),
                size, "server returned more records than requested, truncating"
            );
            records.truncate(size as usize);
        }

        PaginatedResult {
            records,
            total,
            current: request.page.max(1),
            size,
        }
    }
}

/// Decode each row on its own, skipping (and logging) rows that do not fit
/// `T`. Order is preserved.
pub(crate) fn decode_records<T: DeserializeOwned>(rows: Vec<Value>) -> Vec<T> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(
                    record = std::any::type_name::<T>(),
                    index,
                    error = %err,
                    "skipping undecodable record"
                );
                None
            }
        })
        .collect()
}

/// Decode a legacy list payload, falling back to `None` on `null` or a shape
/// mismatch. The failure is logged here so callers only decide the fallback.
pub(crate) fn decode_list_payload<T: DeserializeOwned>(payload: Value) -> Option<LegacyListPayload> {
    if payload.is_null() {
        warn!(record = std::any::type_name::<T>(), "list payload is null");
        return None;
    }
    match serde_json::from_value(payload) {
        Ok(legacy) => Some(legacy),
        Err(err) => {
            warn!(
                record = std::any::type_name::<T>(),
                error = %err,
                "malformed list payload"
            );
            None
        }
    }
}

/// Convert a legacy `{list, totalCount}` payload into a `PaginatedResult`.
///
/// Never fails: `null` or malformed payloads become an empty page.
pub fn normalize_page<T: DeserializeOwned>(payload: Value, request: PageRequest) -> PaginatedResult<T> {
    let page = match decode_list_payload::<T>(payload) {
        Some(legacy) => legacy.into_page(request),
        None => PaginatedResult::empty(request),
    };
    debug!(
        records = page.records.len(),
        total = page.total,
        current = page.current,
        "normalized list payload"
    );
    page
}

/// `totalCount` counts only when it is a non-negative integral number.
fn reported_total(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}
