//! Sample board loaded when storage holds no usable record.

use crate::model::project::{Collection, Project, ProjectStatus, ProjectType, Task, TaskStatus};
use chrono::NaiveDate;

/// Returns the two-project sample collection, stamped with `created_at`.
pub fn default_collection(created_at: i64) -> Collection {
    Collection::new(vec![
        Project {
            id: "1".to_string(),
            title: "Sample Research Project".to_string(),
            description: "A sample project to demonstrate the dashboard".to_string(),
            kind: ProjectType::Research,
            status: ProjectStatus::InProgress,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            tasks: vec![
                task("t1", "Literature review", TaskStatus::Done),
                task("t2", "Data collection", TaskStatus::InProgress),
                task("t3", "Analysis", TaskStatus::Todo),
                task("t4", "Write report", TaskStatus::Todo),
            ],
            next_steps: Vec::new(),
            created_at,
        },
        Project {
            id: "2".to_string(),
            title: "Dashboard App".to_string(),
            description: "Build the project management dashboard".to_string(),
            kind: ProjectType::Development,
            status: ProjectStatus::InProgress,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            end_date: NaiveDate::from_ymd_opt(2025, 2, 15),
            tasks: vec![
                task("t5", "Setup project", TaskStatus::Done),
                task("t6", "Build UI components", TaskStatus::Done),
                task("t7", "Implement Kanban", TaskStatus::InProgress),
                task("t8", "Add Gantt chart", TaskStatus::Todo),
                task("t9", "Testing", TaskStatus::Todo),
            ],
            next_steps: Vec::new(),
            created_at,
        },
    ])
}

fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        status,
    }
}
