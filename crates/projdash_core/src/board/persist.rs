//! Load/save contract between the board and a storage backend.
//!
//! # Responsibility
//! - Read the persisted record and fall back to a usable board on any failure.
//! - Write the full board record, replacing the previous value.
//!
//! # Invariants
//! - `load_collection` never fails; read and decode errors are logged and
//!   treated as "no data".
//! - `persist_collection` writes the whole record or returns an error; it
//!   never merges with the stored value.

use super::schema::{decode_record, encode_record, RecordError};
use super::seed::default_collection;
use crate::config::StoreConfig;
use crate::model::project::Collection;
use crate::storage::{StorageBackend, StorageError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure while writing the board record.
#[derive(Debug)]
pub enum PersistError {
    Record(RecordError),
    Storage(StorageError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Record(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Record(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<RecordError> for PersistError {
    fn from(value: RecordError) -> Self {
        Self::Record(value)
    }
}

impl From<StorageError> for PersistError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Reads the board from `backend`.
///
/// Absent, unreadable or undecodable records yield the fallback board: the
/// sample seed stamped with `now_ms`, or an empty board when
/// `config.seed_when_empty` is false.
pub fn load_collection<B>(backend: &B, config: &StoreConfig, now_ms: i64) -> Collection
where
    B: StorageBackend + ?Sized,
{
    let raw = match backend.read(&config.storage_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(
                "event=board_load module=board status=empty key={}",
                config.storage_key
            );
            return fallback_collection(config, now_ms);
        }
        Err(err) => {
            warn!(
                "event=board_load module=board status=error error_code=storage_read_failed key={} error={}",
                config.storage_key, err
            );
            return fallback_collection(config, now_ms);
        }
    };

    match decode_record(&raw) {
        Ok(collection) => {
            debug!(
                "event=board_load module=board status=ok key={} project_count={}",
                config.storage_key,
                collection.len()
            );
            collection
        }
        Err(err) => {
            warn!(
                "event=board_load module=board status=error error_code=record_decode_failed key={} error={}",
                config.storage_key, err
            );
            fallback_collection(config, now_ms)
        }
    }
}

/// Serializes `collection` and stores it under `key`.
pub fn persist_collection<B>(
    backend: &mut B,
    key: &str,
    collection: &Collection,
) -> Result<(), PersistError>
where
    B: StorageBackend + ?Sized,
{
    let record = encode_record(collection)?;
    backend.write(key, &record)?;
    debug!(
        "event=board_save module=board status=ok key={key} project_count={} bytes={}",
        collection.len(),
        record.len()
    );
    Ok(())
}

fn fallback_collection(config: &StoreConfig, now_ms: i64) -> Collection {
    if config.seed_when_empty {
        default_collection(now_ms)
    } else {
        Collection::default()
    }
}
