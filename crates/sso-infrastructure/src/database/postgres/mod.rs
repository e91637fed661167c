//! PostgreSQL repository implementations

pub mod user_repo_impl;
pub mod app_repo_impl;

pub use user_repo_impl::PgUserRepository;
pub use app_repo_impl::PgAppRepository;

use sso_core::repositories::RepositoryError;

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn unavailable(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Unavailable(e.to_string())
}
