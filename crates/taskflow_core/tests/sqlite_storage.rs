use rusqlite::Connection;
use taskflow_core::db::migrations::latest_version;
use taskflow_core::db::{open_db, open_db_in_memory, DbError};
use taskflow_core::{
    KeyValueStorage, SqliteStorage, StorageError, TaskRegistry, TaskStore, Theme, TASKS_KEY,
};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_items");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskflow.sqlite3");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "kv_items");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn storage_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteStorage::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        StorageError::Db(DbError::SchemaNotMigrated { db_version: 0, .. })
    ));
}

#[test]
fn get_set_remove_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();

    assert_eq!(storage.get_item("k").unwrap(), None);

    storage.set_item("k", "first").unwrap();
    storage.set_item("k", "second").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("second"));

    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);
    storage.remove_item("k").unwrap();

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_items;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn registry_state_survives_reopening_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskflow.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let storage = SqliteStorage::try_new(&conn).unwrap();
        let mut registry = TaskRegistry::new(TaskStore::new(storage));
        registry.add("Buy milk").unwrap();
        let walk = registry.add("Walk dog").unwrap();
        registry.toggle(walk.id().as_str());
        registry.set_theme(Theme::Dark);
    }

    let conn = open_db(&path).unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let raw = storage.get_item(TASKS_KEY).unwrap().unwrap();
    let registry = TaskRegistry::new(TaskStore::new(storage));

    let contents: Vec<_> = registry.tasks().iter().map(|task| task.content()).collect();
    assert_eq!(contents, vec!["Buy milk", "Walk dog"]);
    assert_eq!(registry.active_count(), 1);
    assert_eq!(registry.theme(), Theme::Dark);
    assert!(raw.starts_with('['));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
