//! Single-project card rendering.

use crate::model::project::{Project, ProjectId};
use crate::view::drag_drop::DragSource;

/// One project prepared for list display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    project: Project,
}

impl ProjectCard {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    /// Returns the underlying project record.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Renders the card as one display line: title, assignment, description.
    pub fn render_line(&self) -> String {
        format!(
            "{} [{} assigned] {}",
            self.project.title,
            self.project.team_size_label(),
            self.project.description
        )
    }
}

impl DragSource for ProjectCard {
    fn drag_payload(&self) -> ProjectId {
        self.project.id
    }
}
