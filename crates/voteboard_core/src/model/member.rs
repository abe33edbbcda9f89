//! Campaign team member models.
//!
//! # Responsibility
//! - Define the write model (`MemberDraft`) used by add/update operations.
//! - Define the joined read model (`MemberView`) produced by member queries.
//!
//! # Invariants
//! - `converted_votes` is derived at read time by the reporting layer and is
//!   never stored on either model.
//! - `MemberView` carries resolved deputy ids paired with display names, so
//!   callers never map a name back to an id.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::deputy::DeputyId;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a member row.
pub type MemberId = i64;

/// Write model carrying every mutable member field.
///
/// Used both by insert and by overwrite-style update. Vote count and
/// percentage are stored as given; non-negative values are a caller contract,
/// not a validated constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDraft {
    /// Display name. Free text.
    pub name: String,
    /// Raw vote count credited to this member.
    pub votes: i64,
    /// Campaign role. Free text.
    pub role: String,
    /// Vote conversion percentage; 40.0 means 40%.
    pub percentage: f64,
    /// Referenced federal deputy, if any.
    pub federal_deputy_id: Option<DeputyId>,
    /// Referenced state deputy, if any.
    pub state_deputy_id: Option<DeputyId>,
}

impl MemberDraft {
    /// Creates a draft with both deputy references unset.
    pub fn new(
        name: impl Into<String>,
        votes: i64,
        role: impl Into<String>,
        percentage: f64,
    ) -> Self {
        Self {
            name: name.into(),
            votes,
            role: role.into(),
            percentage,
            federal_deputy_id: None,
            state_deputy_id: None,
        }
    }
}

/// Member row enriched with both deputy references resolved via LEFT JOIN.
///
/// Resolution follows the store, not the draft: a reference that is NULL or
/// points at a deleted deputy surfaces as `None` in all four resolved fields.
/// `votes` and `percentage` are `None` when the stored cell is NULL or not
/// numeric; the reporting layer coerces both to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberView {
    /// Store-assigned row id.
    pub id: MemberId,
    /// Display name. Empty when the stored cell is NULL.
    pub name: String,
    /// Raw vote count as stored.
    pub votes: Option<i64>,
    /// Campaign role. Empty when the stored cell is NULL.
    pub role: String,
    /// Conversion percentage as stored.
    pub percentage: Option<f64>,
    /// Resolved federal deputy id.
    pub federal_deputy_id: Option<DeputyId>,
    /// Resolved federal deputy display name.
    pub federal_deputy: Option<String>,
    /// Resolved state deputy id.
    pub state_deputy_id: Option<DeputyId>,
    /// Resolved state deputy display name.
    pub state_deputy: Option<String>,
}
