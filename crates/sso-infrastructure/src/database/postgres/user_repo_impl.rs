// ============================================================================
// SSO Infrastructure - PostgreSQL User Repository
// File: crates/sso-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use tracing::{info, error};

use sso_core::domain::User;
use sso_core::repositories::{RepositoryError, UserRepository};
use sso_shared::utils::mask_email;

use super::{is_unique_violation, unavailable};

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: i64,
    pub email: String,
    pub pass_hash: Vec<u8>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            password_hash: row.pass_hash,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, email: &str, password_hash: &[u8]) -> Result<i64, RepositoryError> {
        // The UNIQUE constraint on email makes check-and-insert a single statement.
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, pass_hash)
            VALUES ($1, $2)
            RETURNING id
            "#
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            if is_unique_violation(&e) {
                RepositoryError::AlreadyExists
            } else {
                error!("Database error creating user: {}", e);
                unavailable(e)
            }
        })?;

        info!("User created successfully: {} ({})", id, mask_email(email));
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, email, pass_hash
            FROM users
            WHERE email = $1
            "#
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding user by email: {}", e);
            unavailable(e)
        })?;

        row.map(User::from).ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Needs DATABASE_URL pointing at a disposable Postgres instance.
    #[sqlx::test]
    #[ignore]
    async fn test_duplicate_email_maps_to_already_exists(pool: PgPool) {
        let repo = PgUserRepository::new(pool);

        let id = repo.create("dup@example.com", b"hash-one").await.unwrap();
        assert!(id > 0);

        let err = repo.create("dup@example.com", b"hash-two").await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists));

        let stored = repo.find_by_email("dup@example.com").await.unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.password_hash, b"hash-one");
    }

    #[sqlx::test]
    #[ignore]
    async fn test_find_unknown_email_is_not_found(pool: PgPool) {
        let repo = PgUserRepository::new(pool);
        let err = repo.find_by_email("nobody@example.com").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
