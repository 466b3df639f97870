//! Board intake and mutation facade.
//!
//! # Responsibility
//! - Validate raw form input before it reaches the store.
//! - Expose the store's mutation surface to UI callers.
//!
//! # Invariants
//! - A rejected submission never mutates the store or notifies listeners.
//! - Field rules live here, at the input boundary; the store itself stays
//!   validation-free.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::SharedStore;
use crate::validation::{validate, FieldSpec};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum description length accepted by the intake form.
const MIN_DESCRIPTION_CHARS: usize = 5;
/// Inclusive lower bound for the assigned-people count.
const MIN_PEOPLE: i64 = 1;
/// Inclusive upper bound for the assigned-people count.
const MAX_PEOPLE: i64 = 5;

/// Raw, not-yet-validated form input for one new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSubmission {
    /// Display title; must be non-empty after trimming.
    pub title: String,
    /// Display description; at least [`MIN_DESCRIPTION_CHARS`] characters.
    pub description: String,
    /// Assigned-people count; within `1..=5`.
    pub people: i64,
}

/// Intake error naming the first field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeError {
    InvalidField(&'static str),
}

impl Display for IntakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidField(field) => write!(f, "invalid project input: {field}"),
        }
    }
}

impl Error for IntakeError {}

/// Use-case facade over one shared project store.
pub struct BoardService {
    store: SharedStore,
}

impl BoardService {
    /// Creates a service bound to the injected store handle.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Validates one submission and stores it as a new active project.
    ///
    /// # Contract
    /// - Fields are checked in form order: title, description, people.
    /// - On failure the store is left untouched and no listener fires.
    /// - On success the stored project's ID is returned.
    ///
    /// # Errors
    /// - [`IntakeError::InvalidField`] naming the first failing field.
    pub fn submit_project(
        &self,
        submission: &ProjectSubmission,
    ) -> Result<ProjectId, IntakeError> {
        let title = FieldSpec {
            required: true,
            ..FieldSpec::text(submission.title.clone())
        };
        let description = FieldSpec {
            required: true,
            min_length: Some(MIN_DESCRIPTION_CHARS),
            ..FieldSpec::text(submission.description.clone())
        };
        let people = FieldSpec {
            required: true,
            min: Some(MIN_PEOPLE),
            max: Some(MAX_PEOPLE),
            ..FieldSpec::number(submission.people)
        };

        let checks = [
            ("title", &title),
            ("description", &description),
            ("people", &people),
        ];
        for (field, spec) in checks {
            if !validate(spec) {
                debug!("event=submission_rejected module=service field={field}");
                return Err(IntakeError::InvalidField(field));
            }
        }

        // The range check above keeps the count within u32.
        let people_count = submission.people as u32;
        let id = self.store.borrow_mut().add_project(
            submission.title.clone(),
            submission.description.clone(),
            people_count,
        );
        Ok(id)
    }

    /// Moves one project to the given lane through the store's tolerant
    /// lookup; unknown ids are ignored.
    pub fn move_project(&self, id: ProjectId, status: ProjectStatus) {
        self.store.borrow_mut().move_project(id, status);
    }

    /// Returns the current project snapshot.
    pub fn projects(&self) -> Vec<Project> {
        self.store.borrow().snapshot()
    }
}
