//! Console entry point for the news report run.
//!
//! # Responsibility
//! - Open the fixed news database, run all three reports, print them.
//! - Exit non-zero with a diagnostic when any step fails.

use presslog_core::db::open_db;
use presslog_core::{
    default_log_level, init_logging, ReportService, SqliteStatsRepository,
};
use std::error::Error;
use std::io::Write;

/// Fixed database file name; the tool takes no arguments.
const DB_PATH: &str = "news.db";
const LOG_DIR_NAME: &str = "logs";

fn main() -> Result<(), Box<dyn Error>> {
    // Why: diagnostics go to a log file so stdout carries nothing but the
    // three report groups.
    let log_dir = std::env::current_dir()?.join(LOG_DIR_NAME);
    init_logging(default_log_level(), &log_dir.to_string_lossy())?;

    let conn = open_db(DB_PATH)?;
    let service = ReportService::new(SqliteStatsRepository::new(&conn));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    service.render_to(&mut out)?;
    out.flush()?;

    Ok(())
}
