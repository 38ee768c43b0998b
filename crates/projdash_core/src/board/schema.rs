//! Persisted board record format and its versioned migrations.
//!
//! # Responsibility
//! - Encode a `Collection` into the single persisted JSON record.
//! - Decode a record, upgrading older layouts before typed decoding.
//!
//! # Invariants
//! - Records without `schemaVersion` are version 0.
//! - Migrations run in increasing version order, each exactly once per load.
//! - Encoding always stamps the latest version.
//! - Records newer than the latest known version are rejected, not guessed at.

use crate::model::project::{Collection, Project};
use serde::Serialize;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Top-level field carrying the record layout version.
pub const SCHEMA_VERSION_FIELD: &str = "schemaVersion";

/// Failure to encode or decode the persisted record.
#[derive(Debug)]
pub enum RecordError {
    Json(serde_json::Error),
    /// Top-level value is not a JSON object.
    NotAnObject,
    /// `schemaVersion` is present but not a non-negative integer.
    InvalidVersion(Value),
    /// `projects` is not an array after migration.
    ProjectsNotAnArray,
    /// Project at `index` in `projects` does not decode.
    InvalidProject {
        index: usize,
        source: serde_json::Error,
    },
    UnsupportedVersion {
        record_version: u64,
        latest_supported: u32,
    },
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid board record json: {err}"),
            Self::NotAnObject => write!(f, "board record is not a json object"),
            Self::InvalidVersion(value) => {
                write!(f, "invalid `{SCHEMA_VERSION_FIELD}` value `{value}`")
            }
            Self::ProjectsNotAnArray => write!(f, "board record `projects` is not an array"),
            Self::InvalidProject { index, source } => {
                write!(f, "board record project {index} is invalid: {source}")
            }
            Self::UnsupportedVersion {
                record_version,
                latest_supported,
            } => write!(
                f,
                "board record version {record_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidProject { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy)]
struct RecordMigration {
    version: u32,
    upgrade: fn(&mut Map<String, Value>),
}

const RECORD_MIGRATIONS: &[RecordMigration] = &[RecordMigration {
    version: 1,
    upgrade: default_project_sequences,
}];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordRef<'a> {
    schema_version: u32,
    projects: &'a [Project],
}

/// Returns the record layout version written by this binary.
pub fn latest_record_version() -> u32 {
    RECORD_MIGRATIONS
        .last()
        .map_or(0, |migration| migration.version)
}

/// Serializes the full collection as the latest record layout.
pub fn encode_record(collection: &Collection) -> Result<String, RecordError> {
    let record = RecordRef {
        schema_version: latest_record_version(),
        projects: &collection.projects,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Parses, migrates and decodes a persisted record.
///
/// Projects are decoded one by one so a failure names the offending index.
pub fn decode_record(raw: &str) -> Result<Collection, RecordError> {
    let mut document: Value = serde_json::from_str(raw)?;
    migrate_record(&mut document)?;

    let Some(Value::Array(projects)) = document.get_mut("projects").map(Value::take) else {
        return Err(RecordError::ProjectsNotAnArray);
    };
    let projects = projects
        .into_iter()
        .enumerate()
        .map(|(index, project)| {
            serde_json::from_value::<Project>(project)
                .map_err(|source| RecordError::InvalidProject { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Collection::new(projects))
}

/// Upgrades a raw record in place to the latest layout.
///
/// Returns the version the record had before migration.
pub fn migrate_record(document: &mut Value) -> Result<u64, RecordError> {
    let object = document.as_object_mut().ok_or(RecordError::NotAnObject)?;
    let record_version = match object.get(SCHEMA_VERSION_FIELD) {
        None | Some(Value::Null) => 0,
        Some(value) => value
            .as_u64()
            .ok_or_else(|| RecordError::InvalidVersion(value.clone()))?,
    };

    let latest = latest_record_version();
    if record_version > u64::from(latest) {
        return Err(RecordError::UnsupportedVersion {
            record_version,
            latest_supported: latest,
        });
    }

    for migration in RECORD_MIGRATIONS
        .iter()
        .filter(|migration| u64::from(migration.version) > record_version)
    {
        (migration.upgrade)(object);
    }
    object.insert(SCHEMA_VERSION_FIELD.to_string(), Value::from(latest));

    Ok(record_version)
}

/// v1: `projects`, and each project's `tasks`/`nextSteps`, default to `[]`.
fn default_project_sequences(record: &mut Map<String, Value>) {
    let projects = record
        .entry("projects")
        .or_insert_with(|| Value::Array(Vec::new()));
    if projects.is_null() {
        *projects = Value::Array(Vec::new());
    }

    let Some(projects) = projects.as_array_mut() else {
        return;
    };
    for project in projects.iter_mut().filter_map(Value::as_object_mut) {
        for field in ["tasks", "nextSteps"] {
            let sequence = project
                .entry(field)
                .or_insert_with(|| Value::Array(Vec::new()));
            if sequence.is_null() {
                *sequence = Value::Array(Vec::new());
            }
        }
    }
}
