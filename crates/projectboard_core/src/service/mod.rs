//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into input-boundary level APIs.
//! - Keep UI layers decoupled from store internals.

pub mod board_service;
