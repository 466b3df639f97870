//! Board CLI entry point.
//!
//! # Responsibility
//! - Act as the composition root: construct the store explicitly and wire
//!   the two lane views and the intake service to one shared handle.
//! - Drive the board from a line-oriented command loop.

use projectboard_core::{
    core_version, default_log_level, init_logging, BoardService, DropTarget, Project, ProjectId,
    ProjectStatus, ProjectStore, ProjectSubmission, StatusListView,
};
use std::io::{self, BufRead, Write};
use std::rc::Rc;

fn main() {
    if let Ok(log_dir) = std::env::var("PROJECTBOARD_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let store = ProjectStore::new_shared();
    let service = BoardService::new(Rc::clone(&store));
    let active = StatusListView::attach(Rc::clone(&store), ProjectStatus::Active);
    let finished = StatusListView::attach(store, ProjectStatus::Finished);

    println!("projectboard {}", core_version());

    if std::env::args().any(|arg| arg == "--demo") {
        run_demo(&service, &active, &finished);
        return;
    }

    run_repl(&service, &active, &finished);
}

/// Deterministic scripted run used for quick smoke checks.
fn run_demo(service: &BoardService, active: &StatusListView, finished: &StatusListView) {
    let submissions = [
        ProjectSubmission {
            title: "Website relaunch".to_string(),
            description: "Rebuild the marketing site".to_string(),
            people: 3,
        },
        ProjectSubmission {
            title: "Quarterly report".to_string(),
            description: "Collect numbers and write it up".to_string(),
            people: 1,
        },
    ];

    let mut first_id = None;
    for submission in &submissions {
        match service.submit_project(submission) {
            Ok(id) => {
                first_id.get_or_insert(id);
            }
            Err(err) => {
                eprintln!("demo submission rejected: {err}");
                return;
            }
        }
    }

    print_board(active, finished);
    if let Some(id) = first_id {
        finished.accept_drop(id);
        println!("-- moved `{}` to finished --", submissions[0].title);
        print_board(active, finished);
    }
}

fn run_repl(service: &BoardService, active: &StatusListView, finished: &StatusListView) {
    print_help();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "add" => handle_add(service, rest),
            "move" => handle_move(service, active, finished, rest),
            "board" => print_board(active, finished),
            "ids" => print_ids(&service.projects()),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command `{other}`; try `help`"),
        }
    }
}

/// Parses `add <title> :: <description> :: <people>` and submits it.
fn handle_add(service: &BoardService, rest: &str) {
    let parts: Vec<&str> = rest.splitn(3, "::").map(str::trim).collect();
    let [title, description, people] = parts.as_slice() else {
        println!("usage: add <title> :: <description> :: <people>");
        return;
    };
    let Ok(people) = people.parse::<i64>() else {
        println!("people must be a number");
        return;
    };

    let submission = ProjectSubmission {
        title: (*title).to_string(),
        description: (*description).to_string(),
        people,
    };
    match service.submit_project(&submission) {
        Ok(id) => println!("added {id}"),
        Err(err) => println!("rejected: {err}"),
    }
}

/// Parses `move <id-prefix> <active|finished>` and drops the project on
/// the matching lane view; the id prefix stands in for the drag payload.
fn handle_move(
    service: &BoardService,
    active: &StatusListView,
    finished: &StatusListView,
    rest: &str,
) {
    let Some((prefix, lane)) = rest.split_once(' ') else {
        println!("usage: move <id-prefix> <active|finished>");
        return;
    };
    let Some(status) = parse_lane(lane.trim()) else {
        println!("unknown lane `{}`; use active or finished", lane.trim());
        return;
    };

    match resolve_project_id(&service.projects(), prefix.trim()) {
        Ok(id) => match status {
            ProjectStatus::Active => active.accept_drop(id),
            ProjectStatus::Finished => finished.accept_drop(id),
        },
        Err(message) => println!("{message}"),
    }
}

fn parse_lane(lane: &str) -> Option<ProjectStatus> {
    match lane {
        "active" => Some(ProjectStatus::Active),
        "finished" => Some(ProjectStatus::Finished),
        _ => None,
    }
}

fn resolve_project_id(projects: &[Project], prefix: &str) -> Result<ProjectId, String> {
    if prefix.is_empty() {
        return Err("usage: move <id-prefix> <active|finished>".to_string());
    }
    let matches: Vec<ProjectId> = projects
        .iter()
        .filter(|project| project.id.to_string().starts_with(prefix))
        .map(|project| project.id)
        .collect();
    match matches.as_slice() {
        [] => Err(format!("no project id starts with `{prefix}`")),
        [id] => Ok(*id),
        _ => Err(format!("id prefix `{prefix}` is ambiguous")),
    }
}

fn print_board(active: &StatusListView, finished: &StatusListView) {
    for line in active.render_lines() {
        println!("{line}");
    }
    for line in finished.render_lines() {
        println!("{line}");
    }
}

fn print_ids(projects: &[Project]) {
    for project in projects {
        let id = project.id.to_string();
        println!("{} {} [{}]", &id[..8], project.title, project.status);
    }
}

fn print_help() {
    println!("commands:");
    println!("  add <title> :: <description> :: <people>");
    println!("  move <id-prefix> <active|finished>");
    println!("  board");
    println!("  ids");
    println!("  quit");
}
