use projectboard_core::{
    BoardService, DragSource, DropTarget, Project, ProjectCard, ProjectStatus, ProjectStore,
    ProjectSubmission, StatusListView,
};
use std::cell::RefCell;
use std::rc::Rc;

fn submission(title: &str, people: i64) -> ProjectSubmission {
    ProjectSubmission {
        title: title.to_string(),
        description: "valid description".to_string(),
        people,
    }
}

#[test]
fn list_views_split_the_snapshot_by_status() {
    let store = ProjectStore::new_shared();
    let active = StatusListView::attach(Rc::clone(&store), ProjectStatus::Active);
    let finished = StatusListView::attach(Rc::clone(&store), ProjectStatus::Finished);
    let service = BoardService::new(store);

    let website = service.submit_project(&submission("Website", 3)).unwrap();
    service.submit_project(&submission("Report", 1)).unwrap();
    service.move_project(website, ProjectStatus::Finished);

    assert_eq!(active.card_count(), 1);
    assert_eq!(finished.card_count(), 1);

    let active_lines = active.render_lines();
    assert_eq!(active_lines[0], "ACTIVE PROJECTS");
    assert!(active_lines[1].contains("Report"));

    let finished_lines = finished.render_lines();
    assert_eq!(finished_lines[0], "FINISHED PROJECTS");
    assert!(finished_lines[1].contains("Website"));
}

#[test]
fn attach_pulls_current_state_for_late_views() {
    let store = ProjectStore::new_shared();
    let service = BoardService::new(Rc::clone(&store));
    service.submit_project(&submission("Website", 3)).unwrap();

    let late_view = StatusListView::attach(store, ProjectStatus::Active);

    assert_eq!(late_view.card_count(), 1);
}

#[test]
fn drop_moves_the_project_between_lanes() {
    let store = ProjectStore::new_shared();
    let active = StatusListView::attach(Rc::clone(&store), ProjectStatus::Active);
    let finished = StatusListView::attach(Rc::clone(&store), ProjectStatus::Finished);
    let service = BoardService::new(Rc::clone(&store));

    let id = service.submit_project(&submission("Website", 3)).unwrap();
    assert_eq!(active.card_count(), 1);
    assert_eq!(finished.card_count(), 0);

    finished.accept_drop(id);
    assert_eq!(active.card_count(), 0);
    assert_eq!(finished.card_count(), 1);

    // Dropping on the lane the project already sits in changes nothing
    // and triggers no extra notification round.
    let notifications = Rc::new(RefCell::new(0_usize));
    let counter = Rc::clone(&notifications);
    store
        .borrow_mut()
        .subscribe(move |_| *counter.borrow_mut() += 1);
    finished.accept_drop(id);
    assert_eq!(*notifications.borrow(), 0);
    assert_eq!(finished.card_count(), 1);
}

#[test]
fn every_notification_rebuilds_the_list_in_full() {
    let store = ProjectStore::new_shared();
    let active = StatusListView::attach(Rc::clone(&store), ProjectStatus::Active);
    let service = BoardService::new(store);

    let first = service.submit_project(&submission("First", 2)).unwrap();
    service.submit_project(&submission("Second", 2)).unwrap();
    assert_eq!(active.card_count(), 2);

    service.move_project(first, ProjectStatus::Finished);
    assert_eq!(active.card_count(), 1);

    service.move_project(first, ProjectStatus::Active);
    assert_eq!(active.card_count(), 2);
}

#[test]
fn render_lines_include_assignment_phrasing() {
    let store = ProjectStore::new_shared();
    let active = StatusListView::attach(Rc::clone(&store), ProjectStatus::Active);
    let service = BoardService::new(store);

    service.submit_project(&submission("Solo", 1)).unwrap();

    let lines = active.render_lines();
    assert!(lines[1].contains("1 person assigned"), "got: {}", lines[1]);
}

#[test]
fn card_drag_payload_is_the_project_id() {
    let project = Project::new("Website", "Rebuild the marketing site", 3);
    let id = project.id;
    let card = ProjectCard::new(project);

    assert_eq!(card.drag_payload(), id);
    assert_eq!(card.project().id, id);
}

#[test]
fn view_target_status_matches_its_lane() {
    let store = ProjectStore::new_shared();
    let finished = StatusListView::attach(store, ProjectStatus::Finished);

    assert_eq!(finished.target_status(), ProjectStatus::Finished);
    assert_eq!(finished.status(), ProjectStatus::Finished);
}
