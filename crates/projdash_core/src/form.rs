//! Project form boundary.
//!
//! # Responsibility
//! - Hold raw, string-typed project form input.
//! - Validate it into a typed `ProjectDraft` before any mutation sees it.
//! - Edit the draft task list the way the project form does.
//!
//! # Invariants
//! - Enum fields only accept their exact wire values; nothing is coerced.
//! - Titles are trimmed and must not be empty.
//! - Empty date inputs mean "no date".

use crate::model::id::IdSource;
use crate::model::project::{
    NextStep, ParseEnumError, Project, ProjectDraft, ProjectStatus, ProjectType, Task, TaskId,
};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rejected form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    EmptyTitle,
    InvalidEnum(ParseEnumError),
    InvalidDate { field: &'static str, value: String },
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "project title is required"),
            Self::InvalidEnum(err) => write!(f, "{err}"),
            Self::InvalidDate { field, value } => {
                write!(f, "invalid {field} `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEnum(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseEnumError> for FormError {
    fn from(value: ParseEnumError) -> Self {
        Self::InvalidEnum(value)
    }
}

/// Raw project form state, as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub kind: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub tasks: Vec<Task>,
    /// Carried through unchanged so editing a project keeps its checklist.
    pub next_steps: Vec<NextStep>,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            kind: ProjectType::Research.as_str().to_string(),
            status: ProjectStatus::NotStarted.as_str().to_string(),
            start_date: String::new(),
            end_date: String::new(),
            tasks: Vec::new(),
            next_steps: Vec::new(),
        }
    }
}

impl ProjectForm {
    /// Prefills the form for editing `project`.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            kind: project.kind.as_str().to_string(),
            status: project.status.as_str().to_string(),
            start_date: format_date(project.start_date),
            end_date: format_date(project.end_date),
            tasks: project.tasks.clone(),
            next_steps: project.next_steps.clone(),
        }
    }

    /// Appends a `todo` task. Blank titles are ignored.
    ///
    /// Returns the new task id, or `None` when nothing was added.
    pub fn add_task<I: IdSource + ?Sized>(&mut self, title: &str, ids: &mut I) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let task = Task::new(ids.generate_id(), title);
        let id = task.id.clone();
        self.tasks.push(task);
        Some(id)
    }

    /// Removes the task with `task_id`, if present.
    pub fn remove_task(&mut self, task_id: &str) {
        self.tasks.retain(|task| task.id != task_id);
    }

    /// Validates the form into a draft.
    pub fn validate(&self) -> Result<ProjectDraft, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }

        Ok(ProjectDraft {
            title: title.to_string(),
            description: self.description.clone(),
            kind: self.kind.parse()?,
            status: self.status.parse()?,
            start_date: parse_date("start date", &self.start_date)?,
            end_date: parse_date("end date", &self.end_date)?,
            tasks: self.tasks.clone(),
            next_steps: self.next_steps.clone(),
        })
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| FormError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_unknown_enum_values() {
        let form = ProjectForm {
            title: "x".to_string(),
            status: "paused".to_string(),
            ..ProjectForm::default()
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, FormError::InvalidEnum(ref e) if e.value == "paused"));
    }

    #[test]
    fn validate_parses_dates_and_trims_title() {
        let form = ProjectForm {
            title: "  Survey  ".to_string(),
            start_date: "2025-01-02".to_string(),
            ..ProjectForm::default()
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.title, "Survey");
        assert_eq!(draft.kind, ProjectType::Research);
        assert_eq!(draft.status, ProjectStatus::NotStarted);
        assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2025, 1, 2));
        assert_eq!(draft.end_date, None);

        let bad = ProjectForm {
            end_date: "02/03/2025".to_string(),
            ..form
        };
        assert_eq!(
            bad.validate().unwrap_err(),
            FormError::InvalidDate {
                field: "end date",
                value: "02/03/2025".to_string(),
            }
        );
    }

    #[test]
    fn blank_title_is_rejected() {
        let form = ProjectForm {
            title: "   ".to_string(),
            ..ProjectForm::default()
        };
        assert_eq!(form.validate().unwrap_err(), FormError::EmptyTitle);
    }
}
