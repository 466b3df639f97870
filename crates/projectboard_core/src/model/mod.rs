//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one record shape shared by every status-filtered board view.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never removed once created; only `status` changes.

pub mod project;
