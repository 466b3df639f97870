//! Drag-and-drop contracts between board widgets.
//!
//! # Responsibility
//! - Fix the payload a drag carries: the source project's ID, nothing more.
//! - Let each drop target resolve its own destination lane.

use crate::model::project::{ProjectId, ProjectStatus};

/// Implemented by widgets a drag can start from.
pub trait DragSource {
    /// Returns the dragged project's ID, the sole drag payload.
    fn drag_payload(&self) -> ProjectId;
}

/// Implemented by widgets that accept a dropped project.
pub trait DropTarget {
    /// Lane this target files dropped projects under.
    fn target_status(&self) -> ProjectStatus;

    /// Handles a drop by moving the project into this target's lane.
    fn accept_drop(&self, id: ProjectId);
}
