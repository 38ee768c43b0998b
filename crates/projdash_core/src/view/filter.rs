//! Project filtering.

use crate::model::project::{Collection, ParseEnumError, Project, ProjectStatus, ProjectType};
use std::str::FromStr;

/// Wire value selecting every variant.
pub const ALL_FILTER: &str = "all";

/// Either every value of `T` or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: FromStr<Err = ParseEnumError>> FromStr for Filter<T> {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL_FILTER {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

/// Combined dashboard filter: text query AND type AND status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Case-insensitive substring of title or description. Empty matches all.
    pub query: String,
    pub kind: Filter<ProjectType>,
    pub status: Filter<ProjectStatus>,
}

impl ProjectFilter {
    pub fn new(
        query: impl Into<String>,
        kind: Filter<ProjectType>,
        status: Filter<ProjectStatus>,
    ) -> Self {
        Self {
            query: query.into(),
            kind,
            status,
        }
    }

    /// Builds a filter from raw dashboard inputs (`"all"` or an enum value).
    pub fn parse(query: &str, kind: &str, status: &str) -> Result<Self, ParseEnumError> {
        Ok(Self::new(query, kind.parse()?, status.parse()?))
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.matches_query(project)
            && self.kind.matches(&project.kind)
            && self.status.matches(&project.status)
    }

    pub fn matches_query(&self, project: &Project) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle)
    }

    /// Returns whether any predicate narrows the result.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.kind.is_all() || !self.status.is_all()
    }
}

/// Returns the projects matching `filter`, in board order.
pub fn filter_projects<'a>(collection: &'a Collection, filter: &ProjectFilter) -> Vec<&'a Project> {
    collection
        .projects
        .iter()
        .filter(|project| filter.matches(project))
        .collect()
}
