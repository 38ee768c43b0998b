mod common;

use common::{sample_board, SequenceIds};
use projdash_core::db::migrations::{current_version, latest_version};
use projdash_core::db::{open_db, open_db_in_memory, DbError};
use projdash_core::{
    BoardStore, FileStorage, SqliteStorage, StorageBackend, StorageError, StoreConfig,
    TaskStatus, DEFAULT_STORAGE_KEY,
};
use rusqlite::Connection;

#[test]
fn migrated_database_exposes_the_storage_entries_columns() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(current_version(&conn).unwrap(), latest_version());

    let mut statement = conn.prepare("PRAGMA table_info(storage_entries);").unwrap();
    let columns: Vec<String> = statement
        .query_map([], |row| row.get(1))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(columns, vec!["key", "value", "updated_at"]);
}

#[test]
fn reopening_a_database_keeps_entries_without_remigrating() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    {
        let conn = open_db(&path).unwrap();
        let mut storage = SqliteStorage::try_new(&conn).unwrap();
        storage.write(DEFAULT_STORAGE_KEY, "{}").unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(current_version(&conn).unwrap(), latest_version());
    let storage = SqliteStorage::try_new(&conn).unwrap();
    assert_eq!(
        storage.read(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some("{}")
    );
}

#[test]
fn database_from_a_newer_build_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 999;")
        .unwrap();

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        DbError::SchemaTooNew {
            found: 999,
            supported
        } if supported == latest_version()
    ));
    assert!(err.to_string().contains("newer than this build"));

    let conn = Connection::open(&path).unwrap();
    assert!(matches!(
        SqliteStorage::try_new(&conn).err(),
        Some(StorageError::Db(DbError::SchemaTooNew { found: 999, .. }))
    ));
}

#[test]
fn sqlite_storage_rejects_unmigrated_connections() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteStorage::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        StorageError::Db(DbError::SchemaNotMigrated { found: 0, expected }) if expected == latest_version()
    ));
}

#[test]
fn sqlite_storage_upserts_and_removes() {
    let conn = open_db_in_memory().unwrap();
    let mut storage = SqliteStorage::try_new(&conn).unwrap();

    assert_eq!(storage.read("k").unwrap(), None);
    storage.write("k", "first").unwrap();
    storage.write("k", "second").unwrap();
    assert_eq!(storage.read("k").unwrap().as_deref(), Some("second"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM storage_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    storage.remove("k").unwrap();
    assert_eq!(storage.read("k").unwrap(), None);
}

#[test]
fn board_survives_reopening_a_sqlite_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    {
        let conn = open_db(&path).unwrap();
        let storage = SqliteStorage::try_new(&conn).unwrap();
        let mut store = BoardStore::open_with(storage, StoreConfig::default(), SequenceIds::new(1));
        store.set_task_status("1", "t3", TaskStatus::Done);
        store.add_next_step("2", "Write changelog").unwrap();
    }

    let conn = open_db(&path).unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let store = BoardStore::open_with(storage, StoreConfig::default(), SequenceIds::new(2));

    let research = store.collection().project("1").unwrap();
    assert_eq!(research.task("t3").unwrap().status, TaskStatus::Done);
    assert_eq!(research.created_at, 1);
    let dashboard = store.collection().project("2").unwrap();
    assert_eq!(dashboard.next_steps.len(), 1);
    assert_eq!(dashboard.next_steps[0].title, "Write changelog");
}

#[test]
fn file_storage_round_trips_the_board() {
    let dir = tempfile::tempdir().unwrap();
    let board = sample_board();

    let mut storage = FileStorage::open(dir.path()).unwrap();
    projdash_core::persist_collection(&mut storage, DEFAULT_STORAGE_KEY, &board).unwrap();
    assert!(dir
        .path()
        .join(format!("{DEFAULT_STORAGE_KEY}.json"))
        .exists());

    let store = BoardStore::open_with(storage, StoreConfig::default(), SequenceIds::new(0));
    assert_eq!(store.collection(), &board);
}

#[test]
fn file_storage_with_garbage_falls_back_to_the_seed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(format!("{DEFAULT_STORAGE_KEY}.json")),
        "{\"projects\": 7}",
    )
    .unwrap();

    let storage = FileStorage::open(dir.path()).unwrap();
    let store = BoardStore::open_with(storage, StoreConfig::default(), SequenceIds::new(0));
    assert_eq!(store.collection(), &projdash_core::default_collection(0));
}
