//! Deputy domain model.
//!
//! # Responsibility
//! - Define the candidate record tracked by the registry.
//! - Pin the federal/state classification to a closed enum.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and immutable afterwards.
//! - `kind` is the only classification axis; free-text type values cannot be
//!   constructed through this API.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a deputy row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DeputyId = i64;

/// Office level a deputy candidates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeputyType {
    /// Candidate for the federal chamber.
    Federal,
    /// Candidate for a state assembly.
    State,
}

/// Candidate record as returned by deputy reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deputy {
    /// Store-assigned row id, immutable after creation.
    pub id: DeputyId,
    /// Display name. Free text; duplicates are allowed, which is why read
    /// models always carry the id next to the name.
    pub name: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: DeputyType,
}
