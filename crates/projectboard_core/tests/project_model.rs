use projectboard_core::{Project, ProjectStatus};

#[test]
fn new_project_starts_active_with_fresh_id() {
    let project = Project::new("Website relaunch", "Rebuild the marketing site", 3);

    assert!(!project.id.is_nil());
    assert_eq!(project.title, "Website relaunch");
    assert_eq!(project.description, "Rebuild the marketing site");
    assert_eq!(project.people, 3);
    assert_eq!(project.status, ProjectStatus::Active);
    assert!(project.is_active());
    assert!(!project.is_finished());
}

#[test]
fn new_projects_get_distinct_ids() {
    let first = Project::new("First", "first description", 1);
    let second = Project::new("Second", "second description", 2);

    assert_ne!(first.id, second.id);
}

#[test]
fn team_size_label_uses_singular_for_one_person() {
    assert_eq!(Project::new("Solo", "one-person job", 1).team_size_label(), "1 person");
    assert_eq!(Project::new("Team", "group effort", 4).team_size_label(), "4 people");
}

#[test]
fn status_display_matches_lane_names() {
    assert_eq!(ProjectStatus::Active.to_string(), "active");
    assert_eq!(ProjectStatus::Finished.to_string(), "finished");
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let mut project = Project::new("Launch", "Ship the launch checklist", 2);
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], project.id.to_string());
    assert_eq!(json["title"], "Launch");
    assert_eq!(json["description"], "Ship the launch checklist");
    assert_eq!(json["people"], 2);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}
