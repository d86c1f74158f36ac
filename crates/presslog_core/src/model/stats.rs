//! Typed rows returned by the report queries.
//!
//! # Responsibility
//! - Give each query result a stable, named shape.
//! - Derive the error ratio from persisted per-day counts.
//!
//! # Invariants
//! - `AuthorViews::views` is 0 for authors without hits, never absent.
//! - `ErrorDay::success_count` is strictly positive; rows with no
//!   successful requests are excluded by the query.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One article with its total request count, for the top-articles report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleViews {
    /// Article display title.
    pub title: String,
    /// Number of logged requests for the article path.
    pub views: i64,
}

/// One author with views summed across all of their articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorViews {
    /// Author display name.
    pub name: String,
    /// Total views across the author's articles; 0 when none were hit.
    pub views: i64,
}

/// Per-day request outcome counts for the high-error-rate report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDay {
    /// Calendar date of the aggregated log entries.
    pub day: NaiveDate,
    /// Requests that failed on this date.
    pub error_count: i64,
    /// Requests that succeeded on this date. Always > 0.
    pub success_count: i64,
}

impl ErrorDay {
    /// Failed requests divided by successful requests for this date.
    pub fn error_ratio(&self) -> f64 {
        self.error_count as f64 / self.success_count as f64
    }

    /// Error ratio expressed as a percentage.
    pub fn error_percent(&self) -> f64 {
        self.error_ratio() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorDay;
    use chrono::NaiveDate;

    #[test]
    fn error_ratio_divides_errors_by_successes() {
        let day = ErrorDay {
            day: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
            error_count: 3,
            success_count: 100,
        };
        assert!((day.error_ratio() - 0.03).abs() < 1e-12);
        assert!((day.error_percent() - 3.0).abs() < 1e-12);
    }
}
