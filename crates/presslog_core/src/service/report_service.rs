//! Report pipeline: fixed report definitions, row formatting, rendering.
//!
//! # Responsibility
//! - Map repository rows to the exact console line shapes.
//! - Render the three report groups in fixed order to any writer.
//!
//! # Invariants
//! - The report list and its headings are fixed at build time.
//! - Output is streamed group by group; groups printed before a failure
//!   stay visible, nothing after the failure is printed.
//! - Every group, including the last, is followed by one blank line.

use crate::model::stats::{ArticleViews, AuthorViews, ErrorDay};
use crate::repo::stats_repo::{RepoError, StatsRepository};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::time::Instant;

/// Heading for the top-articles group.
pub const TOP_ARTICLES_HEADING: &str = "Top three articles:";
/// Heading for the author popularity group.
pub const POPULAR_AUTHORS_HEADING: &str = "Most Popular Authors:";
/// Heading for the high-error-rate group.
pub const ERROR_DAYS_HEADING: &str = "Days where errors exceeded 1%:";

/// Row cap for the top-articles report.
pub const TOP_ARTICLES_LIMIT: u32 = 3;
/// Error ratio a date must strictly exceed to be reported.
pub const ERROR_RATIO_THRESHOLD: f64 = 0.01;

pub type ReportResult<T> = Result<T, ReportError>;

/// Pipeline error: a failed query or a failed write to the output sink.
#[derive(Debug)]
pub enum ReportError {
    Repo(RepoError),
    Io(std::io::Error),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to write report output: {err}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RepoError> for ReportError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<std::io::Error> for ReportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// One rendered report group: heading plus formatted lines in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub heading: &'static str,
    pub lines: Vec<String>,
}

/// Report pipeline over a repository implementation.
pub struct ReportService<R: StatsRepository> {
    repo: R,
}

impl<R: StatsRepository> ReportService<R> {
    /// The three report definitions, in console order.
    const REPORTS: [Report<R>; 3] = [
        Report {
            key: "top_articles",
            heading: TOP_ARTICLES_HEADING,
            lines: Self::top_article_lines,
        },
        Report {
            key: "popular_authors",
            heading: POPULAR_AUTHORS_HEADING,
            lines: Self::popular_author_lines,
        },
        Report {
            key: "error_days",
            heading: ERROR_DAYS_HEADING,
            lines: Self::error_day_lines,
        },
    ];

    /// Creates a pipeline using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lines for the top-articles group, most viewed first.
    pub fn top_article_lines(&self) -> ReportResult<Vec<String>> {
        let rows = self.repo.top_articles(TOP_ARTICLES_LIMIT)?;
        Ok(rows.iter().map(format_article_line).collect())
    }

    /// Lines for the author popularity group, most viewed first.
    pub fn popular_author_lines(&self) -> ReportResult<Vec<String>> {
        let rows = self.repo.author_views()?;
        Ok(rows.iter().map(format_author_line).collect())
    }

    /// Lines for dates whose error ratio exceeded the fixed threshold.
    pub fn error_day_lines(&self) -> ReportResult<Vec<String>> {
        let rows = self.repo.high_error_days(ERROR_RATIO_THRESHOLD)?;
        Ok(rows.iter().map(format_error_day_line).collect())
    }

    /// Materializes all report groups in fixed order.
    pub fn sections(&self) -> ReportResult<Vec<ReportSection>> {
        Self::REPORTS
            .iter()
            .map(|report| {
                Ok(ReportSection {
                    heading: report.heading,
                    lines: self.run_report(report)?,
                })
            })
            .collect()
    }

    /// Streams all report groups to `out` in fixed order.
    ///
    /// # Contract
    /// - Each group is queried, then written, before the next one runs.
    /// - Heading, then one line per row, then one blank separator line.
    pub fn render_to<W: Write>(&self, out: &mut W) -> ReportResult<()> {
        for report in &Self::REPORTS {
            let lines = self.run_report(report)?;

            writeln!(out, "{}", report.heading)?;
            for line in &lines {
                writeln!(out, "{line}")?;
            }
            writeln!(out)?;
        }

        Ok(())
    }

    fn run_report(&self, report: &Report<R>) -> ReportResult<Vec<String>> {
        let started_at = Instant::now();
        let result = (report.lines)(self);

        match &result {
            Ok(lines) => info!(
                "event=report_run module=service status=ok report={} lines={} duration_ms={}",
                report.key,
                lines.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=report_run module=service status=error report={} duration_ms={} error={}",
                report.key,
                started_at.elapsed().as_millis(),
                err
            ),
        }

        result
    }
}

/// Fixed report definition: stable key, console heading, line producer.
struct Report<R: StatsRepository> {
    key: &'static str,
    heading: &'static str,
    lines: fn(&ReportService<R>) -> ReportResult<Vec<String>>,
}

fn format_article_line(row: &ArticleViews) -> String {
    format!("\"{}\" - {} Views", row.title, row.views)
}

fn format_author_line(row: &AuthorViews) -> String {
    format!("{} - {} Views", row.name, row.views)
}

fn format_error_day_line(row: &ErrorDay) -> String {
    format!(
        "{} - {:.1}% errors",
        row.day.format("%B %d, %Y"),
        row.error_percent()
    )
}
