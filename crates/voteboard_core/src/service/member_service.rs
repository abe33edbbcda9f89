//! Member use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::member::{MemberDraft, MemberId, MemberView};
use crate::repo::deputy_repo::{MutationOutcome, RepoResult};
use crate::repo::member_repo::MemberRepository;

/// Use-case service wrapper for member CRUD operations.
pub struct MemberService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> MemberService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a member and returns the assigned ID.
    ///
    /// Deputy references in the draft are stored as given, whether or not
    /// a matching deputy exists.
    pub fn add_member(&self, draft: &MemberDraft) -> RepoResult<MemberId> {
        self.repo.add_member(draft)
    }

    /// Gets one member view by ID, deputy references resolved.
    pub fn get_member(&self, id: MemberId) -> RepoResult<Option<MemberView>> {
        self.repo.get_member(id)
    }

    /// Lists all member views in insertion order.
    pub fn get_members(&self) -> RepoResult<Vec<MemberView>> {
        self.repo.get_members()
    }

    /// Overwrites all mutable fields of one member.
    ///
    /// Returns `MutationOutcome::NotFound` when no row has the ID.
    pub fn update_member(&self, id: MemberId, draft: &MemberDraft) -> RepoResult<MutationOutcome> {
        self.repo.update_member(id, draft)
    }

    /// Removes one member row.
    pub fn delete_member(&self, id: MemberId) -> RepoResult<MutationOutcome> {
        self.repo.delete_member(id)
    }
}
