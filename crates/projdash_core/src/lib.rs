//! Core state and persistence layer for the project dashboard.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod config;
pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod storage;
pub mod view;

pub use board::mutations::Command;
pub use board::persist::{load_collection, persist_collection, PersistError};
pub use board::schema::{latest_record_version, RecordError};
pub use board::seed::default_collection;
pub use board::store::BoardStore;
pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use form::{FormError, ProjectForm};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::id::{generate_id, IdSource, SystemIdSource};
pub use model::project::{
    Collection, NextStep, ParseEnumError, Project, ProjectDraft, ProjectId, ProjectStatus,
    ProjectType, StepId, Task, TaskId, TaskStatus,
};
pub use storage::{
    FileStorage, MemoryStorage, SqliteStorage, StorageBackend, StorageError, StorageResult,
};
pub use view::filter::{filter_projects, Filter, ProjectFilter};
pub use view::progress::{compute_progress, days_remaining, summarize_project, ProjectSummary};
pub use view::stats::{compute_stats, BoardStats};
