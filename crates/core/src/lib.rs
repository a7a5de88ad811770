//! Core domain types for the maerchenwald project.
//!
//! This crate holds the pure, I/O-free pieces of the service: the feedback
//! record and its validation rules, the repository abstraction over the
//! partitioned table store, and the HTTP status mapping for repository
//! errors. Everything here is testable without network access.

pub mod feedback;
pub mod storage;
