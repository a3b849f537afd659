//! Shared test utilities for the repository-manager workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`git`] — git repository fixtures built through the `git` CLI
//! - [`repo`] — [`TestRepo`](repo::TestRepo) builder with file and branch helpers

pub mod git;
pub mod repo;
