//! Status-filtered board list view.
//!
//! # Responsibility
//! - Mirror one board lane from store snapshots.
//! - Rebuild the visible card list from scratch on every notification.
//!
//! # Invariants
//! - The view owns exactly one fixed `ProjectStatus` for its lifetime.
//! - Rebuilds are total; stale cards never survive a notification.
//! - The store is only ever mutated through `move_project`.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::SharedStore;
use crate::view::drag_drop::DropTarget;
use crate::view::project_card::ProjectCard;
use std::cell::RefCell;
use std::rc::Rc;

/// List view rendering every project in one fixed lane.
pub struct StatusListView {
    status: ProjectStatus,
    store: SharedStore,
    cards: Rc<RefCell<Vec<ProjectCard>>>,
}

impl StatusListView {
    /// Creates a view for `status` and subscribes it to the store.
    ///
    /// The subscription only covers future mutations, so the view pulls
    /// one snapshot up front to start from the current board state.
    pub fn attach(store: SharedStore, status: ProjectStatus) -> Self {
        let cards = Rc::new(RefCell::new(Vec::new()));

        let listener_cards = Rc::clone(&cards);
        store.borrow_mut().subscribe(move |projects: Vec<Project>| {
            rebuild(&listener_cards, status, &projects);
        });

        let view = Self {
            status,
            store,
            cards,
        };
        let current = view.store.borrow().snapshot();
        rebuild(&view.cards, status, &current);
        view
    }

    /// Lane this view renders.
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Number of cards currently displayed.
    pub fn card_count(&self) -> usize {
        self.cards.borrow().len()
    }

    /// Renders the lane header plus one line per card.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{} PROJECTS", self.status.as_str().to_uppercase())];
        for card in self.cards.borrow().iter() {
            lines.push(format!("  {}", card.render_line()));
        }
        lines
    }
}

fn rebuild(cards: &Rc<RefCell<Vec<ProjectCard>>>, status: ProjectStatus, projects: &[Project]) {
    let mut cards = cards.borrow_mut();
    cards.clear();
    cards.extend(
        projects
            .iter()
            .filter(|project| project.status == status)
            .cloned()
            .map(ProjectCard::new),
    );
}

impl DropTarget for StatusListView {
    fn target_status(&self) -> ProjectStatus {
        self.status
    }

    fn accept_drop(&self, id: ProjectId) {
        self.store.borrow_mut().move_project(id, self.status);
    }
}
