//! User repository trait (port)

use async_trait::async_trait;
use crate::domain::User;
use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user if the email is free. The uniqueness check and the insert
    /// must be one atomic step; a taken email yields `AlreadyExists`.
    async fn create(&self, email: &str, password_hash: &[u8]) -> Result<i64, RepositoryError>;

    /// Exact (case-sensitive) email lookup.
    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError>;
}
