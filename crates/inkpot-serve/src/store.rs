//! SQLite-backed store for blog entries.
//!
//! rusqlite is synchronous; the connection is shared behind a
//! `parking_lot::Mutex`, which serializes the store's short point queries.
//! Entries are immutable once created; there is no update or delete path.

use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};

/// A single blog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogEntry {
    /// Store-assigned identifier, unique and monotonically increasing.
    pub id: i64,
    /// Post title. Non-empty (enforced by the submission handler).
    pub subject: String,
    /// Post body. Non-empty (enforced by the submission handler).
    pub content: String,
}

/// Shared handle to the posts database.
#[derive(Clone)]
pub struct PostStore {
    conn: Arc<Mutex<Connection>>,
}

impl PostStore {
    /// Open (or create) the database file at `path` and ensure the schema.
    pub fn open(path: &str) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::init(conn)
    }

    /// Open a throwaway in-memory database.
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                subject TEXT NOT NULL,
                content TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Persist a new entry and return its assigned id.
    pub fn create(&self, subject: &str, content: &str) -> rusqlite::Result<i64> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO posts (subject, content) VALUES (?1, ?2)",
            params![subject, content],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetch a single entry, or `None` if the id is unknown.
    pub fn get_by_id(&self, id: i64) -> rusqlite::Result<Option<BlogEntry>> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT id, subject, content FROM posts WHERE id = ?1",
            params![id],
            |row| {
                Ok(BlogEntry {
                    id: row.get(0)?,
                    subject: row.get(1)?,
                    content: row.get(2)?,
                })
            },
        )
        .optional()
    }

    /// List all entries, newest first.
    pub fn list_all(&self) -> rusqlite::Result<Vec<BlogEntry>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT id, subject, content FROM posts ORDER BY id DESC")?;
        let rows = stmt.query_map([], |row| {
            Ok(BlogEntry {
                id: row.get(0)?,
                subject: row.get(1)?,
                content: row.get(2)?,
            })
        })?;
        rows.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_fetch_round_trip() {
        let store = PostStore::open_in_memory().expect("store");
        let id = store.create("S", "C").expect("create");
        let entry = store.get_by_id(id).expect("query").expect("entry");
        assert_eq!(entry.subject, "S");
        assert_eq!(entry.content, "C");
        assert_eq!(entry.id, id);
    }

    #[test]
    fn ids_are_distinct_and_increasing() {
        let store = PostStore::open_in_memory().expect("store");
        let a = store.create("first", "post").expect("create");
        let b = store.create("second", "post").expect("create");
        let c = store.create("third", "post").expect("create");
        assert!(a < b && b < c);
    }

    #[test]
    fn unknown_id_is_absent() {
        let store = PostStore::open_in_memory().expect("store");
        assert_eq!(store.get_by_id(42).expect("query"), None);
    }

    #[test]
    fn list_all_is_newest_first() {
        let store = PostStore::open_in_memory().expect("store");
        let a = store.create("older", "x").expect("create");
        let b = store.create("newer", "y").expect("create");
        let posts = store.list_all().expect("list");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, b);
        assert_eq!(posts[1].id, a);
    }

    #[test]
    fn list_all_empty_store() {
        let store = PostStore::open_in_memory().expect("store");
        assert!(store.list_all().expect("list").is_empty());
    }

    #[test]
    fn entries_preserve_unicode_content() {
        let store = PostStore::open_in_memory().expect("store");
        let id = store.create("日記", "こんにちは 🎉").expect("create");
        let entry = store.get_by_id(id).expect("query").expect("entry");
        assert_eq!(entry.subject, "日記");
        assert_eq!(entry.content, "こんにちは 🎉");
    }
}
