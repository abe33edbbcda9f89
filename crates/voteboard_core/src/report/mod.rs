//! Pure reporting pipeline over member views.
//!
//! # Responsibility
//! - Normalize raw member views into gap-free report rows.
//! - Filter, total and group rows for the dashboard read model.
//!
//! # Invariants
//! - Functions here never touch the store; they operate on values only.
//! - Normalization is idempotent: feeding report rows back through the
//!   pipeline changes nothing.
//! - Missing numeric cells count as zero; missing deputy references get a
//!   fixed placeholder label so every row lands in exactly one group.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::member::{MemberId, MemberView};
use std::collections::BTreeMap;

/// Group label for members without a resolvable federal deputy.
pub const NO_FEDERAL_DEPUTY_LABEL: &str = "No federal deputy";
/// Group label for members without a resolvable state deputy.
pub const NO_STATE_DEPUTY_LABEL: &str = "No state deputy";

/// One normalized dashboard row. All gaps are already filled.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub id: MemberId,
    pub name: String,
    pub votes: i64,
    pub role: String,
    pub percentage: f64,
    pub converted_votes: f64,
    pub federal_deputy: String,
    pub state_deputy: String,
}

/// Which numeric series a report reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Votes,
    ConvertedVotes,
}

/// Which deputy label a grouping keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    FederalDeputy,
    StateDeputy,
}

/// Row filter on resolved deputy labels. `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeputyFilter {
    pub federal: Option<String>,
    pub state: Option<String>,
}

impl DeputyFilter {
    fn matches(&self, row: &ReportRow) -> bool {
        let federal_ok = self
            .federal
            .as_deref()
            .map_or(true, |wanted| row.federal_deputy == wanted);
        let state_ok = self
            .state
            .as_deref()
            .map_or(true, |wanted| row.state_deputy == wanted);

        federal_ok && state_ok
    }
}

impl ReportRow {
    /// Reads the chosen metric from this row.
    pub fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Votes => self.votes as f64,
            Metric::ConvertedVotes => self.converted_votes,
        }
    }
}

/// Converted votes for one member: `votes * percentage / 100`, kept to
/// two decimal places. Ties at the third decimal round to the even cent.
pub fn converted_votes(votes: i64, percentage: f64) -> f64 {
    round2(votes as f64 * percentage / 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Turns raw member views into report rows. Missing votes and percentages
/// become zero, missing deputy names become the placeholder labels, and
/// converted votes are computed from the filled values.
pub fn normalize(members: &[MemberView]) -> Vec<ReportRow> {
    members.iter().map(normalize_member).collect()
}

fn normalize_member(member: &MemberView) -> ReportRow {
    let votes = member.votes.unwrap_or(0);
    let percentage = member.percentage.unwrap_or(0.0);

    ReportRow {
        id: member.id,
        name: member.name.clone(),
        votes,
        role: member.role.clone(),
        percentage,
        converted_votes: converted_votes(votes, percentage),
        federal_deputy: member
            .federal_deputy
            .clone()
            .unwrap_or_else(|| NO_FEDERAL_DEPUTY_LABEL.to_string()),
        state_deputy: member
            .state_deputy
            .clone()
            .unwrap_or_else(|| NO_STATE_DEPUTY_LABEL.to_string()),
    }
}

/// Keeps the rows whose resolved deputy labels match the filter exactly.
/// Placeholder labels participate like any other label.
pub fn filter_by_deputy(rows: &[ReportRow], filter: &DeputyFilter) -> Vec<ReportRow> {
    rows.iter()
        .filter(|row| filter.matches(row))
        .cloned()
        .collect()
}

/// Sums the chosen metric per deputy label. Labels come back in
/// lexicographic order.
pub fn aggregate_sum(rows: &[ReportRow], key: GroupKey, metric: Metric) -> BTreeMap<String, f64> {
    let mut sums = BTreeMap::new();
    for row in rows {
        let label = match key {
            GroupKey::FederalDeputy => row.federal_deputy.as_str(),
            GroupKey::StateDeputy => row.state_deputy.as_str(),
        };
        *sums.entry(label.to_string()).or_insert(0.0) += row.metric_value(metric);
    }

    sums
}

/// Sums the chosen metric over all rows. An empty slice totals zero.
pub fn total(rows: &[ReportRow], metric: Metric) -> f64 {
    rows.iter().map(|row| row.metric_value(metric)).sum()
}
