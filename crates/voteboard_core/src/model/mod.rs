//! Domain models for the candidate registry and campaign team.
//!
//! # Responsibility
//! - Define the canonical data structures shared by repository, reporting and
//!   service layers.
//! - Keep write models (drafts) separate from joined read models (views).
//!
//! # Invariants
//! - Entity ids are store-assigned integers and never reused while a row
//!   exists.
//! - Derived values (converted votes) are never part of a persisted model.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod deputy;
pub mod member;
