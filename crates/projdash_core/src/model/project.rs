//! Project domain model.
//!
//! # Responsibility
//! - Define `Project`, `Task`, `NextStep` and the `Collection` that owns them.
//! - Keep the serialized shape identical to the persisted board record.
//!
//! # Invariants
//! - `tasks` and `next_steps` are never absent; missing arrays decode as empty.
//! - Calendar dates serialize as `YYYY-MM-DD`, or `""` when unset.
//! - Unknown enum strings fail decoding instead of being coerced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable identifier of a project, unique across the board.
pub type ProjectId = String;
/// Identifier of a task, unique within its project.
pub type TaskId = String;
/// Identifier of a next step, unique within its project.
pub type StepId = String;

/// Error returned when a string is not one of an enum's wire values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    /// Human-readable name of the target enum.
    pub expected: &'static str,
    /// Offending input, as received.
    pub value: String,
}

impl Display for ParseEnumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} `{}`", self.expected, self.value)
    }
}

impl Error for ParseEnumError {}

/// Category of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Research,
    Development,
}

impl ProjectType {
    pub const ALL: [ProjectType; 2] = [ProjectType::Research, ProjectType::Development];

    /// Returns the persisted wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Development => "development",
        }
    }
}

impl FromStr for ProjectType {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ParseEnumError {
                expected: "project type",
                value: value.to_string(),
            })
    }
}

/// Lifecycle state of a whole project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::NotStarted,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
    ];

    /// Returns the persisted wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseEnumError {
                expected: "project status",
                value: value.to_string(),
            })
    }
}

/// Task lifecycle state.
///
/// The forward cycle is `todo -> in-progress -> done -> todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed.
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Returns the persisted wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Returns the next status along the task cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::Todo,
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseEnumError {
                expected: "task status",
                value: value.to_string(),
            })
    }
}

/// Unit of work inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
}

impl Task {
    /// Creates a task in `todo` state.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::Todo,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// Checklist item inside a project, independent of the task lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStep {
    pub id: StepId,
    pub title: String,
    pub done: bool,
}

impl NextStep {
    /// Creates an open (not done) step.
    pub fn new(id: impl Into<StepId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            done: false,
        }
    }
}

/// Caller-supplied project payload without store-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub kind: ProjectType,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub tasks: Vec<Task>,
    pub next_steps: Vec<NextStep>,
}

impl ProjectDraft {
    /// Creates a draft with no dates, tasks or next steps.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ProjectType,
        status: ProjectStatus,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            status,
            start_date: None,
            end_date: None,
            tasks: Vec::new(),
            next_steps: Vec::new(),
        }
    }
}

/// Tracked unit of work with metadata, tasks and next steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Serialized as `type` to match the persisted record.
    #[serde(rename = "type")]
    pub kind: ProjectType,
    pub status: ProjectStatus,
    #[serde(default, with = "calendar_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "calendar_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub next_steps: Vec<NextStep>,
    /// Unix epoch milliseconds, assigned by the store.
    pub created_at: i64,
}

impl Project {
    /// Materializes a draft with store-assigned identity.
    pub fn from_draft(draft: ProjectDraft, id: impl Into<ProjectId>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            description: draft.description,
            kind: draft.kind,
            status: draft.status,
            start_date: draft.start_date,
            end_date: draft.end_date,
            tasks: draft.tasks,
            next_steps: draft.next_steps,
            created_at,
        }
    }

    /// Returns an editable draft carrying every caller-owned field.
    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            kind: self.kind,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            tasks: self.tasks.clone(),
            next_steps: self.next_steps.clone(),
        }
    }

    /// Returns a copy with caller-owned fields replaced from `draft`.
    ///
    /// `id` and `created_at` are preserved.
    pub fn with_draft(&self, draft: ProjectDraft) -> Self {
        Self::from_draft(draft, self.id.clone(), self.created_at)
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn next_step(&self, step_id: &str) -> Option<&NextStep> {
        self.next_steps.iter().find(|step| step.id == step_id)
    }
}

/// Full in-memory set of projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Collection {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.project(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Serde adapter for optional calendar dates persisted as `""` when unset.
mod calendar_date {
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, FORMAT)
                .map(Some)
                .map_err(|err| D::Error::custom(format!("invalid date `{text}`: {err}"))),
        }
    }
}
