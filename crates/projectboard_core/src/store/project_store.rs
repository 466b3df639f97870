//! Project store with synchronous subscriber notification.
//!
//! # Responsibility
//! - Accept `add_project` / `move_project` mutations from the input and
//!   board views.
//! - Notify every listener with a full snapshot after each accepted
//!   mutation, on the same call stack.
//!
//! # Invariants
//! - Projects keep insertion order; none are ever removed.
//! - Listeners fire synchronously, in registration order.
//! - Every listener call receives its own defensive copy.
//! - A panicking listener never stops the remaining fan-out.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, error, info};
use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

/// Callback signature for store subscribers.
pub type Listener = Box<dyn FnMut(Vec<Project>)>;

/// Single-threaded shared handle used to inject one store instance into
/// views and services from the composition root.
pub type SharedStore = Rc<RefCell<ProjectStore>>;

/// Observable in-memory store of all tracked projects.
///
/// The store performs no input validation and never fails structurally; it
/// has no I/O. Construction is explicit — the composition root owns the
/// instance and hands out the shared handle.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    /// Creates an empty store with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a fresh store in the shared single-threaded handle.
    pub fn new_shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Registers a subscriber for all future mutations.
    ///
    /// # Contract
    /// - The listener fires on every accepted mutation from now on; it is
    ///   not invoked with the current state at registration time. Callers
    ///   that need the present list read [`ProjectStore::snapshot`]
    ///   themselves.
    /// - There is no unsubscribe; listeners live as long as the store.
    pub fn subscribe(&mut self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Creates an active project from already-validated input.
    ///
    /// # Contract
    /// - Performs no validation; the intake boundary owns that.
    /// - Appends at the end, preserving insertion order.
    /// - Notifies every listener exactly once.
    /// - Returns the generated stable project ID.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        info!("event=project_added module=store status=ok id={id}");
        self.projects.push(project);
        self.notify_listeners();
        id
    }

    /// Moves one project to another board lane.
    ///
    /// # Contract
    /// - Unknown `id`: tolerated as a no-op, no notification.
    /// - `new_status` equal to the current lane: no-op, no notification.
    /// - Otherwise the status is rewritten in place and every listener is
    ///   notified exactly once.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!("event=project_move_skipped module=store reason=unknown_id id={id}");
            return;
        };
        if project.status == new_status {
            return;
        }
        project.status = new_status;
        info!(
            "event=project_moved module=store status=ok id={id} lane={}",
            new_status.as_str()
        );
        self.notify_listeners();
    }

    /// Returns an independent, order-preserving copy of the project list.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Returns the number of projects ever added to this store.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns whether the store holds no projects yet.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn notify_listeners(&mut self) {
        for listener in &mut self.listeners {
            // Each listener gets its own copy; a snapshot mutated by one
            // subscriber must never leak into another.
            let snapshot = self.projects.clone();
            if catch_unwind(AssertUnwindSafe(|| listener(snapshot))).is_err() {
                error!("event=listener_panic module=store status=error");
            }
        }
    }
}
