//! Core domain logic for Voteboard.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod report;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::deputy::{Deputy, DeputyId, DeputyType};
pub use model::member::{MemberDraft, MemberId, MemberView};
pub use repo::deputy_repo::{
    DeputyRepository, MutationOutcome, RepoError, RepoResult, SqliteDeputyRepository,
};
pub use repo::member_repo::{MemberRepository, SqliteMemberRepository};
pub use report::{
    aggregate_sum, converted_votes, filter_by_deputy, normalize, total, DeputyFilter, GroupKey,
    Metric, ReportRow, NO_FEDERAL_DEPUTY_LABEL, NO_STATE_DEPUTY_LABEL,
};
pub use service::dashboard_service::{DashboardReport, DashboardService};
pub use service::deputy_service::DeputyService;
pub use service::member_service::MemberService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
