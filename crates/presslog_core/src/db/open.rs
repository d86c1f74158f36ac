//! Connection bootstrap utilities for the news database.
//!
//! # Responsibility
//! - Open the file-backed news database read-only.
//! - Open in-memory databases for test fixtures.
//! - Configure connection settings shared by all report queries.
//!
//! # Invariants
//! - File-backed connections reject writes at the engine level.
//! - A missing database file is reported before the engine is asked to
//!   open it, so callers see the path instead of a generic open failure.

use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the news database file read-only.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
///
/// # Errors
/// - `DbError::MissingDatabase` when `path` does not exist.
/// - `DbError::Sqlite` when the engine rejects the open or bootstrap.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    if !path.exists() {
        error!(
            "event=db_open module=db status=error mode=file duration_ms={} error_code=db_missing path={}",
            started_at.elapsed().as_millis(),
            path.display()
        );
        return Err(DbError::MissingDatabase {
            path: path.to_path_buf(),
        });
    }

    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = match Connection::open_with_flags(path, flags) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens a read-write in-memory database.
///
/// Test fixtures seed their own schema and rows through this connection;
/// report queries treat it exactly like the file-backed store.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=memory duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(())
}
