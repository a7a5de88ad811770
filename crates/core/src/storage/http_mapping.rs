//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`]
//! variants, following the Functional Core pattern - pure functions with no
//! side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// The feedback endpoints expose a deliberately small status surface:
///
/// - `InvalidData` -> 400 (Bad Request)
/// - everything else -> 500 (Internal Server Error)
///
/// With UUID-class row keys an `AlreadyExists` outcome on the append-only
/// store indicates a server-side fault, not a client conflict, so it maps
/// to 500 like the other storage failures.
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::AlreadyExists { .. }
        | RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_) => 500,
    }
}
