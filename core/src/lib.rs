//! Data-access core for the admin console's legacy backend.
//!
//! # Overview
//! Builds `HttpRequest` values for the backend's user, role, menu,
//! department and dictionary routes, and reshapes the decoded payloads into
//! a few stable contracts (host-does-IO pattern). The host's `Transport`
//! performs the actual HTTP round-trip, so everything in this crate is
//! deterministic and testable without a network.
//!
//! # Design
//! - `AdminClient` is stateless: it holds only `base_url`.
//! - Each backend operation has a `build_*` method, a `parse_*` method for
//!   reads, and a one-shot method that runs both around `Transport::send`.
//! - Paged reads go through `normalize_page`, which turns every legacy
//!   `{list, totalCount}` variant into a `PaginatedResult` and never fails.
//! - Other inconsistent shapes get a dedicated decoder per endpoint
//!   (`payload`), and tree reads are passed through as decoded.
//! - `format_date_time` renders the backend's timestamps for display.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod date;
pub mod error;
pub mod http;
pub mod pagination;
mod payload;
pub mod transport;
pub mod types;

pub use client::AdminClient;
pub use config::ClientConfig;
pub use date::{format_date_time, format_date_time_in, DateTimeValue};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest};
pub use pagination::{normalize_page, PageRequest, PaginatedResult};
pub use transport::Transport;
pub use types::{
    AddAdminUser, AdminDeptItem, AdminMenuItem, AdminRoleItem, AdminRoleSearchParams, AdminUserItem,
    AdminUserSearchParams, AssignRoleUsers, BizUserQuery, ChangeUserStatus, DeleteTarget, DictDetailItem,
    DictDetailQuery, EntityId, LegacyFlag, MenuTreeQuery, ResetUserPassword, RoleMenuQuery, RoleOption,
    SaveMenu, SaveRole, UpdateAdminUser,
};
