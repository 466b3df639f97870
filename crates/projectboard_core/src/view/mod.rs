//! Board view layer: status lists, cards, drag-and-drop contracts.
//!
//! # Responsibility
//! - Render store snapshots; never hold live references into the store.
//! - Route drops back through `move_project` only.
//!
//! # Invariants
//! - Views rebuild from scratch on every notification; no incremental
//!   diffing is assumed or provided by the store.

pub mod drag_drop;
pub mod project_card;
pub mod project_list;
