//! Report query contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the three analytical queries behind the console reports.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Article paths are matched by exact equality against
//!   `'/article/' || slug`; substring matching would cross-match slugs
//!   that prefix one another.
//! - The error-day ratio divides error count by success count; dates
//!   without a single successful request are excluded by the join.
//! - Read paths must reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::stats::{ArticleViews, AuthorViews, ErrorDay};
use log::{error, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Log status value counted as a failed request.
pub const ERROR_STATUS: &str = "404 NOT FOUND";
/// Log status value counted as a successful request.
pub const SUCCESS_STATUS: &str = "200 OK";

const TOP_ARTICLES_SQL: &str = "SELECT
    articles.title AS title,
    COUNT(log.id) AS views
FROM log
JOIN articles ON log.path = '/article/' || articles.slug
WHERE log.path <> '/'
GROUP BY log.path, articles.title
ORDER BY views DESC, title ASC
LIMIT ?1;";

const AUTHOR_VIEWS_SQL: &str = "SELECT
    authors.name AS name,
    COALESCE(SUM(path_hits.hits), 0) AS views
FROM authors
LEFT JOIN articles ON articles.author = authors.id
LEFT JOIN (
    SELECT path, COUNT(id) AS hits
    FROM log
    GROUP BY path
) AS path_hits ON path_hits.path = '/article/' || articles.slug
GROUP BY authors.name
ORDER BY views DESC, name ASC;";

const ERROR_DAYS_SQL: &str = "SELECT
    errors.day AS day,
    errors.err_count AS err_count,
    hits.ok_count AS ok_count
FROM (
    SELECT date(time) AS day, COUNT(id) AS err_count
    FROM log
    WHERE status = ?1
    GROUP BY day
) AS errors
JOIN (
    SELECT date(time) AS day, COUNT(id) AS ok_count
    FROM log
    WHERE status = ?2
    GROUP BY day
) AS hits ON hits.day = errors.day
WHERE CAST(errors.err_count AS REAL) / hits.ok_count > ?3
ORDER BY day ASC;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for report query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted report data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the three report queries.
pub trait StatsRepository {
    /// Most-viewed articles, descending, capped at `limit` rows.
    fn top_articles(&self, limit: u32) -> RepoResult<Vec<ArticleViews>>;
    /// Every author with total views, descending; zero-view authors included.
    fn author_views(&self) -> RepoResult<Vec<AuthorViews>>;
    /// Dates whose error ratio strictly exceeds `min_error_ratio`.
    fn high_error_days(&self, min_error_ratio: f64) -> RepoResult<Vec<ErrorDay>>;
}

/// SQLite-backed report query repository.
pub struct SqliteStatsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStatsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn fetch_top_articles(&self, limit: u32) -> RepoResult<Vec<ArticleViews>> {
        let mut stmt = self.conn.prepare(TOP_ARTICLES_SQL)?;
        let mut rows = stmt.query(params![limit])?;
        let mut articles = Vec::new();

        while let Some(row) = rows.next()? {
            articles.push(parse_article_row(row)?);
        }

        Ok(articles)
    }

    fn fetch_author_views(&self) -> RepoResult<Vec<AuthorViews>> {
        let mut stmt = self.conn.prepare(AUTHOR_VIEWS_SQL)?;
        let mut rows = stmt.query([])?;
        let mut authors = Vec::new();

        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }

        Ok(authors)
    }

    fn fetch_high_error_days(&self, min_error_ratio: f64) -> RepoResult<Vec<ErrorDay>> {
        let mut stmt = self.conn.prepare(ERROR_DAYS_SQL)?;
        let mut rows = stmt.query(params![ERROR_STATUS, SUCCESS_STATUS, min_error_ratio])?;
        let mut days = Vec::new();

        while let Some(row) = rows.next()? {
            days.push(parse_error_day_row(row)?);
        }

        Ok(days)
    }
}

impl StatsRepository for SqliteStatsRepository<'_> {
    fn top_articles(&self, limit: u32) -> RepoResult<Vec<ArticleViews>> {
        let started_at = Instant::now();
        let result = self.fetch_top_articles(limit);
        log_query("top_articles", started_at, &result);
        result
    }

    fn author_views(&self) -> RepoResult<Vec<AuthorViews>> {
        let started_at = Instant::now();
        let result = self.fetch_author_views();
        log_query("author_views", started_at, &result);
        result
    }

    fn high_error_days(&self, min_error_ratio: f64) -> RepoResult<Vec<ErrorDay>> {
        let started_at = Instant::now();
        let result = self.fetch_high_error_days(min_error_ratio);
        log_query("high_error_days", started_at, &result);
        result
    }
}

fn parse_article_row(row: &Row<'_>) -> RepoResult<ArticleViews> {
    Ok(ArticleViews {
        title: row.get("title")?,
        views: row.get("views")?,
    })
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<AuthorViews> {
    Ok(AuthorViews {
        name: row.get("name")?,
        views: row.get("views")?,
    })
}

fn parse_error_day_row(row: &Row<'_>) -> RepoResult<ErrorDay> {
    let day = ErrorDay {
        day: row.get("day")?,
        error_count: row.get("err_count")?,
        success_count: row.get("ok_count")?,
    };

    if day.success_count <= 0 {
        return Err(RepoError::InvalidData(format!(
            "non-positive success count `{}` for {}",
            day.success_count, day.day
        )));
    }

    Ok(day)
}

fn log_query<T>(query: &str, started_at: Instant, result: &RepoResult<Vec<T>>) {
    match result {
        Ok(rows) => info!(
            "event=report_query module=repo status=ok query={} rows={} duration_ms={}",
            query,
            rows.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=report_query module=repo status=error query={} duration_ms={} error={}",
            query,
            started_at.elapsed().as_millis(),
            err
        ),
    }
}
