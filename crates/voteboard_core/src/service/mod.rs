//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep caller surfaces decoupled from storage details.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod dashboard_service;
pub mod deputy_service;
pub mod member_service;
