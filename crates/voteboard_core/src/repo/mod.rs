//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for deputies and members.
//! - Isolate SQL details from reporting and service orchestration.
//!
//! # Invariants
//! - Repositories only accept migrated connections (`try_new` readiness
//!   guard).
//! - Update/delete on a missing id is reported through
//!   `MutationOutcome::NotFound`, never as an error.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod deputy_repo;
pub mod member_repo;
