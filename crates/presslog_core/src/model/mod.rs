//! Read models for the three news reports.
//!
//! # Responsibility
//! - Define the typed row shapes produced by the report queries.
//! - Keep derived metrics (error ratio) next to the data they come from.
//!
//! # Invariants
//! - Row shapes are fixed by their queries; a mismatch is rejected at
//!   parse time, never patched over.

pub mod stats;
