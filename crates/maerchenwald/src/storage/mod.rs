//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! `maerchenwald_core::storage::FeedbackRepository`. The implementation used
//! by the binary is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local storage for tests and local dev
//! - `dynamodb`: AWS DynamoDB, the partitioned table store used in production
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p maerchenwald --no-default-features --features dynamodb
//! ```
//!
//! The in-memory backend is always compiled for tests so the router suite
//! runs without network access regardless of the selected backend.

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
