//! Board-level statistics.

use crate::model::project::{Collection, ProjectStatus, ProjectType};

/// Project counts shown in the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    pub total: usize,
    pub research: usize,
    pub development: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

/// Counts projects by type and status over the whole collection.
pub fn compute_stats(collection: &Collection) -> BoardStats {
    collection
        .projects
        .iter()
        .fold(BoardStats::default(), |mut stats, project| {
            stats.total += 1;
            match project.kind {
                ProjectType::Research => stats.research += 1,
                ProjectType::Development => stats.development += 1,
            }
            match project.status {
                ProjectStatus::Completed => stats.completed += 1,
                ProjectStatus::InProgress => stats.in_progress += 1,
                ProjectStatus::NotStarted => stats.not_started += 1,
            }
            stats
        })
}
