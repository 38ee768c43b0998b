//! Pure board mutations.
//!
//! # Responsibility
//! - Transform a `Collection` by one command into a new `Collection`.
//! - Keep every transformation free of storage and logging side effects.
//!
//! # Invariants
//! - The input collection is never modified.
//! - Unknown project/task/step ids are silent no-ops: the result equals the
//!   input.
//! - A mutation only touches the addressed project, and within it only the
//!   addressed task or step.

use crate::model::id::IdSource;
use crate::model::project::{
    Collection, NextStep, Project, ProjectDraft, ProjectId, StepId, TaskId, TaskStatus,
};

/// A single board mutation requested by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddProject(ProjectDraft),
    UpdateProject(Project),
    DeleteProject(ProjectId),
    SetTaskStatus {
        project_id: ProjectId,
        task_id: TaskId,
        status: TaskStatus,
    },
    /// Advances a task one step along `todo -> in-progress -> done -> todo`.
    CycleTaskStatus {
        project_id: ProjectId,
        task_id: TaskId,
    },
    AddNextStep {
        project_id: ProjectId,
        title: String,
    },
    ToggleNextStep {
        project_id: ProjectId,
        step_id: StepId,
    },
    DeleteNextStep {
        project_id: ProjectId,
        step_id: StepId,
    },
}

/// Applies `command` to `collection`, drawing new ids from `ids`.
pub fn apply<I: IdSource + ?Sized>(
    collection: &Collection,
    command: Command,
    ids: &mut I,
) -> Collection {
    match command {
        Command::AddProject(draft) => {
            let id = ids.generate_id();
            let created_at = ids.now_ms();
            add_project(collection, draft, id, created_at)
        }
        Command::UpdateProject(project) => update_project(collection, &project),
        Command::DeleteProject(id) => delete_project(collection, &id),
        Command::SetTaskStatus {
            project_id,
            task_id,
            status,
        } => set_task_status(collection, &project_id, &task_id, status),
        Command::CycleTaskStatus {
            project_id,
            task_id,
        } => cycle_task_status(collection, &project_id, &task_id),
        Command::AddNextStep { project_id, title } => {
            if !collection.contains(&project_id) {
                return collection.clone();
            }
            let step_id = ids.generate_id();
            add_next_step(collection, &project_id, step_id, title)
        }
        Command::ToggleNextStep {
            project_id,
            step_id,
        } => toggle_next_step(collection, &project_id, &step_id),
        Command::DeleteNextStep {
            project_id,
            step_id,
        } => delete_next_step(collection, &project_id, &step_id),
    }
}

/// Appends a project built from `draft` with the given identity.
pub fn add_project(
    collection: &Collection,
    draft: ProjectDraft,
    id: impl Into<ProjectId>,
    created_at: i64,
) -> Collection {
    let mut projects = collection.projects.clone();
    projects.push(Project::from_draft(draft, id, created_at));
    Collection::new(projects)
}

/// Replaces the project whose id matches `updated.id`.
pub fn update_project(collection: &Collection, updated: &Project) -> Collection {
    map_project(collection, &updated.id, |_| updated.clone())
}

/// Removes the project with `id` together with its tasks and next steps.
pub fn delete_project(collection: &Collection, id: &str) -> Collection {
    Collection::new(
        collection
            .projects
            .iter()
            .filter(|project| project.id != id)
            .cloned()
            .collect(),
    )
}

/// Sets the status of one task.
pub fn set_task_status(
    collection: &Collection,
    project_id: &str,
    task_id: &str,
    status: TaskStatus,
) -> Collection {
    update_task(collection, project_id, task_id, |_| status)
}

/// Moves one task to the next status of the cycle.
pub fn cycle_task_status(collection: &Collection, project_id: &str, task_id: &str) -> Collection {
    update_task(collection, project_id, task_id, TaskStatus::next)
}

/// Appends an open next step with `step_id` to the project.
pub fn add_next_step(
    collection: &Collection,
    project_id: &str,
    step_id: impl Into<StepId>,
    title: impl Into<String>,
) -> Collection {
    let step = NextStep::new(step_id, title);
    map_project(collection, project_id, |project| {
        let mut project = project.clone();
        project.next_steps.push(step.clone());
        project
    })
}

/// Flips `done` on one next step.
pub fn toggle_next_step(collection: &Collection, project_id: &str, step_id: &str) -> Collection {
    map_project(collection, project_id, |project| {
        let mut project = project.clone();
        for step in project.next_steps.iter_mut().filter(|s| s.id == step_id) {
            step.done = !step.done;
        }
        project
    })
}

/// Removes one next step.
pub fn delete_next_step(collection: &Collection, project_id: &str, step_id: &str) -> Collection {
    map_project(collection, project_id, |project| {
        let mut project = project.clone();
        project.next_steps.retain(|step| step.id != step_id);
        project
    })
}

fn update_task(
    collection: &Collection,
    project_id: &str,
    task_id: &str,
    next_status: impl Fn(TaskStatus) -> TaskStatus,
) -> Collection {
    map_project(collection, project_id, |project| {
        let mut project = project.clone();
        for task in project.tasks.iter_mut().filter(|t| t.id == task_id) {
            task.status = next_status(task.status);
        }
        project
    })
}

/// Rebuilds the collection with every project matching `id` replaced by
/// `f(project)`.
fn map_project(collection: &Collection, id: &str, f: impl Fn(&Project) -> Project) -> Collection {
    Collection::new(
        collection
            .projects
            .iter()
            .map(|project| {
                if project.id == id {
                    f(project)
                } else {
                    project.clone()
                }
            })
            .collect(),
    )
}
