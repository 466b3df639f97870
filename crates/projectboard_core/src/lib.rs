//! Core domain logic for ProjectBoard.
//! This crate is the single source of truth for board invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use service::board_service::{BoardService, IntakeError, ProjectSubmission};
pub use store::project_store::{Listener, ProjectStore, SharedStore};
pub use validation::{validate, FieldSpec, FieldValue};
pub use view::drag_drop::{DragSource, DropTarget};
pub use view::project_card::ProjectCard;
pub use view::project_list::StatusListView;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
