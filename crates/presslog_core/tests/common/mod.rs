//! Shared news-store fixture for report integration tests.
//!
//! The reporting crate never creates schema in production (the news store
//! is owned by the site), so tests build their own throwaway copy of the
//! minimal schema the queries rely on.

use presslog_core::open_db_in_memory;
use rusqlite::{params, Connection};

#[allow(dead_code)]
pub const NEWS_SCHEMA_SQL: &str = "
CREATE TABLE authors (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
CREATE TABLE articles (
    id INTEGER PRIMARY KEY,
    author INTEGER NOT NULL REFERENCES authors(id),
    title TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE
);
CREATE TABLE log (
    id INTEGER PRIMARY KEY,
    path TEXT,
    status TEXT,
    time TEXT
);
";

/// Opens an in-memory database with the news fixture schema applied.
#[allow(dead_code)]
pub fn news_db() -> Connection {
    let conn = open_db_in_memory().expect("in-memory database should open");
    conn.execute_batch(NEWS_SCHEMA_SQL)
        .expect("news fixture schema should apply");
    conn
}

#[allow(dead_code)]
pub fn insert_author(conn: &Connection, id: i64, name: &str) {
    conn.execute(
        "INSERT INTO authors (id, name) VALUES (?1, ?2);",
        params![id, name],
    )
    .expect("author row should insert");
}

#[allow(dead_code)]
pub fn insert_article(conn: &Connection, author: i64, slug: &str, title: &str) {
    conn.execute(
        "INSERT INTO articles (author, slug, title) VALUES (?1, ?2, ?3);",
        params![author, slug, title],
    )
    .expect("article row should insert");
}

/// Inserts `count` log rows with identical path/status/time.
#[allow(dead_code)]
pub fn insert_log_rows(conn: &Connection, path: &str, status: &str, time: &str, count: usize) {
    for _ in 0..count {
        conn.execute(
            "INSERT INTO log (path, status, time) VALUES (?1, ?2, ?3);",
            params![path, status, time],
        )
        .expect("log row should insert");
    }
}
