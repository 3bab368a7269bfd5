//! Repository error types

use thiserror::Error;

/// Errors a portal data source can report
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The backing store could not be reached
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    /// Stored data violates a model invariant
    #[error("Corrupt data: {0}")]
    Corruption(String),
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
