//! Per-project progress and deadline projections.

use crate::model::project::{Project, TaskStatus};
use chrono::{DateTime, NaiveTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Percentage of done tasks, rounded half up. Projects without tasks are 0.
pub fn compute_progress(project: &Project) -> u8 {
    let total = project.tasks.len() as u64;
    if total == 0 {
        return 0;
    }
    let done = project.tasks.iter().filter(|task| task.is_done()).count() as u64;
    ((done * 200 + total) / (total * 2)) as u8
}

/// Whole days until the end date, rounded up.
///
/// End dates are taken at midnight UTC. Returns `None` without an end date;
/// `Some(0)` or negative values mean the deadline is today or has passed.
pub fn days_remaining(project: &Project, now: DateTime<Utc>) -> Option<i64> {
    let end = project.end_date?.and_time(NaiveTime::MIN).and_utc();
    let delta_ms = end.timestamp_millis() - now.timestamp_millis();
    Some(ceil_div(delta_ms, MILLIS_PER_DAY))
}

/// Card-level summary of one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectSummary {
    pub total_tasks: usize,
    pub done_tasks: usize,
    pub in_progress_tasks: usize,
    /// Next steps not yet checked off.
    pub pending_steps: usize,
    pub progress: u8,
    pub days_remaining: Option<i64>,
}

pub fn summarize_project(project: &Project, now: DateTime<Utc>) -> ProjectSummary {
    let count = |status: TaskStatus| {
        project
            .tasks
            .iter()
            .filter(|task| task.status == status)
            .count()
    };
    ProjectSummary {
        total_tasks: project.tasks.len(),
        done_tasks: count(TaskStatus::Done),
        in_progress_tasks: count(TaskStatus::InProgress),
        pending_steps: project.next_steps.iter().filter(|step| !step.done).count(),
        progress: compute_progress(project),
        days_remaining: days_remaining(project, now),
    }
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    -(-value).div_euclid(divisor)
}

#[cfg(test)]
mod tests {
    use super::ceil_div;

    #[test]
    fn ceil_div_rounds_toward_positive_infinity() {
        assert_eq!(ceil_div(1, 10), 1);
        assert_eq!(ceil_div(10, 10), 1);
        assert_eq!(ceil_div(0, 10), 0);
        assert_eq!(ceil_div(-1, 10), 0);
        assert_eq!(ceil_div(-10, 10), -1);
        assert_eq!(ceil_div(-11, 10), -1);
    }
}
