//! Project record and board status lifecycle.
//!
//! # Responsibility
//! - Define the canonical record rendered by both board lanes.
//! - Provide status helpers for the two-lane lifecycle.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `status` is the only field that changes after creation.
//! - Content constraints (non-empty title, people range) are enforced at
//!   the input boundary, not here.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every project tracked by a store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Two-lane board classification for a project.
///
/// Transitions are free-form in both directions; there is no one-way
/// pipeline from active to finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing; rendered in the active lane.
    Active,
    /// Work is done; rendered in the finished lane.
    Finished,
}

impl ProjectStatus {
    /// Returns the lowercase lane name used in logs and wire data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical record for one tracked project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable ID used for lookups and drag payloads.
    pub id: ProjectId,
    /// Display title.
    pub title: String,
    /// Longer display description.
    pub description: String,
    /// Number of people assigned.
    pub people: u32,
    /// Board lane; the only field mutated after creation.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated stable ID.
    ///
    /// # Invariants
    /// - Every new project starts in the active lane.
    /// - Inputs are stored as given; validation happens before this call.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Returns whether this project sits in the active lane.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    /// Returns whether this project sits in the finished lane.
    pub fn is_finished(&self) -> bool {
        self.status == ProjectStatus::Finished
    }

    /// Returns the assignment phrasing used on board cards.
    pub fn team_size_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.people)
        }
    }
}
