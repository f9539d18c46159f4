//! SQLite schema for the notes table.

use rusqlite::Connection;

/// File name of the notes database inside the data directory.
pub const DATABASE_NAME: &str = "notes.db";

/// Schema version written by this build.
///
/// Raising it makes the next open drop and recreate the notes table.
pub const DATABASE_VERSION: u32 = 1;

pub const TABLE_NAME: &str = "notes";
pub const COLUMN_ID: &str = "_id";
pub const COLUMN_TITLE: &str = "title";
pub const COLUMN_CONTENT: &str = "content";

/// Creates the notes table if it does not exist.
///
/// Title and content are nullable at the storage level; non-emptiness is
/// checked before insertion.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {TABLE_NAME} (
            {COLUMN_ID} INTEGER PRIMARY KEY AUTOINCREMENT,
            {COLUMN_TITLE} TEXT,
            {COLUMN_CONTENT} TEXT
        );"
    ))
}

/// Drops the notes table and every row in it.
pub fn drop_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(&format!("DROP TABLE IF EXISTS {TABLE_NAME};"))
}

/// Returns the schema version stamped on the database.
///
/// A fresh database reports `0`.
pub fn schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

/// Stamps the schema version on the database.
pub fn set_schema_version(conn: &Connection, version: u32) -> rusqlite::Result<()> {
    conn.pragma_update(None, "user_version", version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_exists(conn: &Connection, name: &str) -> bool {
        conn.query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |_| Ok(true),
        )
        .unwrap_or(false)
    }

    fn column_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info({TABLE_NAME})"))
            .unwrap();
        stmt.query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn create_schema_creates_notes_table() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        assert!(table_exists(&conn, "notes"));
        assert_eq!(column_names(&conn), vec!["_id", "title", "content"]);
    }

    #[test]
    fn create_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn.execute("INSERT INTO notes (title, content) VALUES ('t', 'c')", [])
            .unwrap();
        create_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn drop_schema_removes_table() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        drop_schema(&conn).unwrap();
        assert!(!table_exists(&conn, "notes"));
    }

    #[test]
    fn drop_schema_without_table_is_ok() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(drop_schema(&conn).is_ok());
    }

    #[test]
    fn fresh_database_has_version_zero() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(schema_version(&conn).unwrap(), 0);
    }

    #[test]
    fn set_schema_version_round_trips() {
        let conn = Connection::open_in_memory().unwrap();
        set_schema_version(&conn, 3).unwrap();
        assert_eq!(schema_version(&conn).unwrap(), 3);
    }

    #[test]
    fn autoincrement_ids_are_not_reused() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn.execute("INSERT INTO notes (title, content) VALUES ('a', 'a')", [])
            .unwrap();
        conn.execute("DELETE FROM notes", []).unwrap();
        conn.execute("INSERT INTO notes (title, content) VALUES ('b', 'b')", [])
            .unwrap();

        let id: i64 = conn
            .query_row("SELECT _id FROM notes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(id, 2);
    }
}
