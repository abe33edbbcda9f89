//! Dashboard read-model service.
//!
//! # Responsibility
//! - Assemble the filtered, totalled dashboard report from stored members.
//!
//! # Invariants
//! - The report is built from one `get_members` snapshot; no further
//!   store reads happen while shaping it.
//! - Filtering and grouping operate on normalized rows, so placeholder
//!   labels behave like regular deputy names throughout.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::repo::deputy_repo::RepoResult;
use crate::repo::member_repo::MemberRepository;
use crate::report::{
    aggregate_sum, filter_by_deputy, normalize, total, DeputyFilter, GroupKey, Metric, ReportRow,
};
use std::collections::BTreeMap;

/// One fully shaped dashboard payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    /// Metric the totals and breakdown were computed from.
    pub metric: Metric,
    /// Normalized rows that passed the deputy filter, in insertion order.
    pub rows: Vec<ReportRow>,
    /// Sum of the metric over `rows`.
    pub total: f64,
    /// Metric sums per state deputy label, placeholder group included.
    pub state_breakdown: BTreeMap<String, f64>,
}

/// Builds dashboard reports on top of any member repository.
pub struct DashboardService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> DashboardService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads all members and shapes them into one dashboard report.
    ///
    /// # Contract
    /// - Rows are normalized before filtering, so the filter sees
    ///   placeholder labels for unresolved deputy references.
    /// - An empty filter result yields empty rows, a zero total and an
    ///   empty breakdown.
    pub fn build_dashboard(
        &self,
        filter: &DeputyFilter,
        metric: Metric,
    ) -> RepoResult<DashboardReport> {
        let members = self.repo.get_members()?;
        let rows = filter_by_deputy(&normalize(&members), filter);
        let total = total(&rows, metric);
        let state_breakdown = aggregate_sum(&rows, GroupKey::StateDeputy, metric);

        Ok(DashboardReport {
            metric,
            rows,
            total,
            state_breakdown,
        })
    }
}
