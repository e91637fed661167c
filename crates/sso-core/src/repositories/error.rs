//! Storage error kinds shared by all adapters

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("record already exists")]
    AlreadyExists,

    #[error("record not found")]
    NotFound,

    /// Transient or unexpected backend failure. Callers own retry policy.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
