//! Repository layer abstractions and query implementations.
//!
//! # Responsibility
//! - Define the data access contract used by the report pipeline.
//! - Isolate SQL text and row decoding from report orchestration.
//!
//! # Invariants
//! - Repository APIs are read-only; no method mutates the news store.
//! - Row ordering is fixed by each query's ORDER BY clause, including
//!   tie-breaks, so repeated runs produce identical results.

pub mod stats_repo;
