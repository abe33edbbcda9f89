//! Deputy use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::deputy::{Deputy, DeputyId, DeputyType};
use crate::repo::deputy_repo::{DeputyRepository, MutationOutcome, RepoResult};

/// Use-case service wrapper for deputy CRUD operations.
pub struct DeputyService<R: DeputyRepository> {
    repo: R,
}

impl<R: DeputyRepository> DeputyService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a deputy and returns the assigned ID.
    pub fn add_deputy(&self, name: &str, kind: DeputyType) -> RepoResult<DeputyId> {
        self.repo.add_deputy(name, kind)
    }

    /// Gets one deputy by ID.
    pub fn get_deputy(&self, id: DeputyId) -> RepoResult<Option<Deputy>> {
        self.repo.get_deputy(id)
    }

    /// Lists deputies, optionally restricted to one chamber.
    pub fn list_deputies(&self, kind: Option<DeputyType>) -> RepoResult<Vec<Deputy>> {
        self.repo.list_deputies(kind)
    }

    /// Overwrites the name and chamber of one deputy.
    ///
    /// Returns `MutationOutcome::NotFound` when no row has the ID.
    pub fn update_deputy(
        &self,
        id: DeputyId,
        name: &str,
        kind: DeputyType,
    ) -> RepoResult<MutationOutcome> {
        self.repo.update_deputy(id, name, kind)
    }

    /// Removes one deputy. Member rows that referenced it keep their
    /// stored reference and resolve to no deputy afterwards.
    pub fn delete_deputy(&self, id: DeputyId) -> RepoResult<MutationOutcome> {
        self.repo.delete_deputy(id)
    }
}
