mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::{sample_board, SequenceIds};
use projdash_core::{
    compute_progress, compute_stats, days_remaining, default_collection, filter_projects,
    summarize_project, BoardStats, Filter, FormError, ProjectFilter, ProjectForm, ProjectStatus,
    ProjectType,
};

#[test]
fn stats_count_the_unfiltered_board() {
    let mut board = sample_board();
    board.projects[1].status = ProjectStatus::Completed;

    assert_eq!(
        compute_stats(&board),
        BoardStats {
            total: 2,
            research: 1,
            development: 1,
            completed: 1,
            in_progress: 1,
            not_started: 0,
        }
    );
}

#[test]
fn query_matches_title_or_description_case_insensitively() {
    let board = default_collection(0);

    let by_title = ProjectFilter::new("DASHBOARD app", Filter::All, Filter::All);
    let titles: Vec<&str> = filter_projects(&board, &by_title)
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Dashboard App"]);

    let by_description = ProjectFilter::new("demonstrate", Filter::All, Filter::All);
    assert_eq!(filter_projects(&board, &by_description)[0].id, "1");

    let everything = ProjectFilter::default();
    assert_eq!(filter_projects(&board, &everything).len(), 2);
}

#[test]
fn enum_filters_combine_with_the_query() {
    let board = default_collection(0);

    let filter = ProjectFilter::parse("a", "development", "in-progress").unwrap();
    let matched = filter_projects(&board, &filter);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].kind, ProjectType::Development);

    let none = ProjectFilter::parse("", "research", "completed").unwrap();
    assert!(filter_projects(&board, &none).is_empty());
}

#[test]
fn seed_progress_matches_task_counts() {
    let board = default_collection(0);
    assert_eq!(compute_progress(&board.projects[0]), 25);
    assert_eq!(compute_progress(&board.projects[1]), 40);

    let mut empty = board.projects[0].clone();
    empty.tasks.clear();
    assert_eq!(compute_progress(&empty), 0);
}

#[test]
fn progress_rounds_half_up() {
    let mut project = default_collection(0).projects[1].clone();
    project.tasks.truncate(3);
    // 2 of 3 done.
    assert_eq!(compute_progress(&project), 67);
    project.tasks.truncate(1);
    assert_eq!(compute_progress(&project), 100);
}

#[test]
fn days_remaining_distinguishes_past_today_and_missing() {
    let mut project = default_collection(0).projects[0].clone();
    project.end_date = NaiveDate::from_ymd_opt(2025, 3, 1);

    let morning_before = Utc.with_ymd_and_hms(2025, 2, 27, 9, 0, 0).unwrap();
    assert_eq!(days_remaining(&project, morning_before), Some(2));

    let midnight = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    assert_eq!(days_remaining(&project, midnight), Some(0));

    let afternoon_on_deadline = Utc.with_ymd_and_hms(2025, 3, 1, 15, 0, 0).unwrap();
    assert_eq!(days_remaining(&project, afternoon_on_deadline), Some(0));

    let week_after = Utc.with_ymd_and_hms(2025, 3, 8, 12, 0, 0).unwrap();
    assert_eq!(days_remaining(&project, week_after), Some(-7));

    project.end_date = None;
    assert_eq!(days_remaining(&project, week_after), None);
}

#[test]
fn summary_counts_tasks_and_pending_steps() {
    let board = sample_board();
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let summary = summarize_project(board.project("p2").unwrap(), now);
    assert_eq!(summary.total_tasks, 1);
    assert_eq!(summary.done_tasks, 0);
    assert_eq!(summary.in_progress_tasks, 0);
    assert_eq!(summary.pending_steps, 2);
    assert_eq!(summary.progress, 0);
    assert_eq!(summary.days_remaining, None);

    let summary = summarize_project(board.project("p1").unwrap(), now);
    assert_eq!(summary.done_tasks, 1);
    assert_eq!(summary.in_progress_tasks, 1);
    assert_eq!(summary.progress, 33);
}

#[test]
fn form_edits_round_trip_through_a_project() {
    let board = default_collection(0);
    let original = &board.projects[1];
    let mut ids = SequenceIds::new(0);

    let mut form = ProjectForm::from_project(original);
    assert_eq!(form.start_date, "2025-01-15");
    assert_eq!(form.status, "in-progress");

    assert_eq!(form.add_task("   ", &mut ids), None);
    let added = form.add_task("  Release notes ", &mut ids).unwrap();
    form.remove_task("t9");
    form.status = "completed".to_string();

    let updated = original.with_draft(form.validate().unwrap());
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.status, ProjectStatus::Completed);
    assert_eq!(updated.tasks.len(), original.tasks.len());
    assert_eq!(updated.tasks.last().unwrap().id, added);
    assert_eq!(updated.tasks.last().unwrap().title, "Release notes");
    assert!(updated.task("t9").is_none());
}

#[test]
fn form_rejects_filter_sentinel_as_project_type() {
    let form = ProjectForm {
        title: "x".to_string(),
        kind: "all".to_string(),
        ..ProjectForm::default()
    };
    assert!(matches!(form.validate(), Err(FormError::InvalidEnum(_))));
}
