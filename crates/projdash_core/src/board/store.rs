//! Owned, single-writer board state.
//!
//! # Responsibility
//! - Hold the canonical collection for one session.
//! - Apply pure mutations, persist the result and notify listeners.
//!
//! # Invariants
//! - Every changing mutation is written to storage before the method returns.
//! - Persistence failures never fail the mutation; the in-memory collection
//!   stays authoritative and the error is kept in `last_save_error`.
//! - Mutations that leave the collection unchanged skip the write and do not
//!   notify listeners.

use super::mutations::{self, Command};
use super::persist::{load_collection, persist_collection, PersistError};
use crate::config::StoreConfig;
use crate::model::id::{IdSource, SystemIdSource};
use crate::model::project::{Collection, Project, ProjectDraft, ProjectId, StepId, TaskStatus};
use crate::storage::StorageBackend;
use log::{debug, error, info};

/// Callback invoked with the new collection after every change.
pub type ChangeListener = Box<dyn FnMut(&Collection)>;

/// Board state bound to one storage backend.
pub struct BoardStore<B: StorageBackend, I: IdSource = SystemIdSource> {
    backend: B,
    config: StoreConfig,
    ids: I,
    collection: Collection,
    listeners: Vec<ChangeListener>,
    last_save_error: Option<PersistError>,
}

impl<B: StorageBackend> BoardStore<B> {
    /// Loads the board from `backend` under the default storage key.
    pub fn open(backend: B) -> Self {
        Self::open_with(backend, StoreConfig::default(), SystemIdSource)
    }

    /// Loads the board from `backend` using `config`.
    pub fn open_with_config(backend: B, config: StoreConfig) -> Self {
        Self::open_with(backend, config, SystemIdSource)
    }
}

impl<B: StorageBackend, I: IdSource> BoardStore<B, I> {
    /// Loads the board with an explicit id source.
    ///
    /// Never fails: unusable stored data yields the fallback board.
    pub fn open_with(backend: B, config: StoreConfig, mut ids: I) -> Self {
        let collection = load_collection(&backend, &config, ids.now_ms());
        info!(
            "event=store_open module=board status=ok key={} project_count={}",
            config.storage_key,
            collection.len()
        );
        Self {
            backend,
            config,
            ids,
            collection,
            listeners: Vec::new(),
            last_save_error: None,
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Returns the error of the most recent failed write, cleared by the next
    /// successful one.
    pub fn last_save_error(&self) -> Option<&PersistError> {
        self.last_save_error.as_ref()
    }

    /// Registers a listener called after every change to the collection.
    pub fn subscribe(&mut self, listener: impl FnMut(&Collection) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Re-reads the board from storage, replacing the in-memory collection.
    pub fn reload(&mut self) -> &Collection {
        let loaded = load_collection(&self.backend, &self.config, self.ids.now_ms());
        if loaded != self.collection {
            self.collection = loaded;
            self.notify();
        }
        &self.collection
    }

    /// Writes the current collection to storage.
    ///
    /// Returns whether the write succeeded; failures are logged and recorded.
    pub fn persist(&mut self) -> bool {
        match persist_collection(&mut self.backend, &self.config.storage_key, &self.collection) {
            Ok(()) => {
                self.last_save_error = None;
                true
            }
            Err(err) => {
                error!(
                    "event=board_save module=board status=error key={} error={}",
                    self.config.storage_key, err
                );
                self.last_save_error = Some(err);
                false
            }
        }
    }

    /// Applies one command. Returns whether the collection changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let next = mutations::apply(&self.collection, command, &mut self.ids);
        self.commit(next)
    }

    /// Adds a project and returns its store-assigned id.
    pub fn add_project(&mut self, draft: ProjectDraft) -> ProjectId {
        let id = self.ids.generate_id();
        let created_at = self.ids.now_ms();
        let next = mutations::add_project(&self.collection, draft, id.clone(), created_at);
        self.commit(next);
        id
    }

    pub fn update_project(&mut self, project: Project) -> bool {
        self.apply(Command::UpdateProject(project))
    }

    pub fn delete_project(&mut self, id: &str) -> bool {
        self.apply(Command::DeleteProject(id.to_string()))
    }

    pub fn set_task_status(&mut self, project_id: &str, task_id: &str, status: TaskStatus) -> bool {
        self.apply(Command::SetTaskStatus {
            project_id: project_id.to_string(),
            task_id: task_id.to_string(),
            status,
        })
    }

    pub fn cycle_task_status(&mut self, project_id: &str, task_id: &str) -> bool {
        self.apply(Command::CycleTaskStatus {
            project_id: project_id.to_string(),
            task_id: task_id.to_string(),
        })
    }

    /// Adds an open next step. Returns its id, or `None` when the project does
    /// not exist.
    pub fn add_next_step(&mut self, project_id: &str, title: impl Into<String>) -> Option<StepId> {
        if !self.collection.contains(project_id) {
            return None;
        }
        let step_id = self.ids.generate_id();
        let next = mutations::add_next_step(&self.collection, project_id, step_id.clone(), title);
        self.commit(next);
        Some(step_id)
    }

    pub fn toggle_next_step(&mut self, project_id: &str, step_id: &str) -> bool {
        self.apply(Command::ToggleNextStep {
            project_id: project_id.to_string(),
            step_id: step_id.to_string(),
        })
    }

    pub fn delete_next_step(&mut self, project_id: &str, step_id: &str) -> bool {
        self.apply(Command::DeleteNextStep {
            project_id: project_id.to_string(),
            step_id: step_id.to_string(),
        })
    }

    fn commit(&mut self, next: Collection) -> bool {
        if next == self.collection {
            debug!("event=board_mutate module=board status=unchanged");
            return false;
        }
        self.collection = next;
        self.persist();
        self.notify();
        true
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.collection);
        }
    }
}
