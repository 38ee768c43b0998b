#![allow(dead_code)]

use projdash_core::board::mutations::add_project;
use projdash_core::{
    Collection, IdSource, NextStep, ProjectDraft, ProjectStatus, ProjectType, Task, TaskStatus,
};

/// Deterministic id source: `id-1`, `id-2`, ... and a fixed clock.
pub struct SequenceIds {
    next: u32,
    pub now_ms: i64,
}

impl SequenceIds {
    pub fn new(now_ms: i64) -> Self {
        Self { next: 0, now_ms }
    }
}

impl IdSource for SequenceIds {
    fn generate_id(&mut self) -> String {
        self.next += 1;
        format!("id-{}", self.next)
    }

    fn now_ms(&mut self) -> i64 {
        self.now_ms
    }
}

pub fn draft(title: &str, kind: ProjectType, status: ProjectStatus) -> ProjectDraft {
    ProjectDraft::new(title, format!("{title} description"), kind, status)
}

pub fn task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: format!("task {id}"),
        status,
    }
}

/// Two projects with tasks and next steps, ids `p1` and `p2`.
pub fn sample_board() -> Collection {
    let mut first = draft("Thesis", ProjectType::Research, ProjectStatus::InProgress);
    first.tasks = vec![
        task("t1", TaskStatus::Done),
        task("t2", TaskStatus::Todo),
        task("t3", TaskStatus::InProgress),
    ];
    first.next_steps = vec![NextStep::new("s1", "email advisor")];

    let mut second = draft("Website", ProjectType::Development, ProjectStatus::NotStarted);
    second.tasks = vec![task("t1", TaskStatus::Todo)];
    second.next_steps = vec![NextStep::new("s1", "buy domain"), NextStep::new("s2", "pick theme")];

    let board = add_project(&Collection::default(), first, "p1", 1_000);
    add_project(&board, second, "p2", 2_000)
}
