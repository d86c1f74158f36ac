//! Report pipeline orchestration.
//!
//! # Responsibility
//! - Drive the fixed report list against a repository implementation.
//! - Keep console formatting decoupled from query details.

pub mod report_service;
