// ============================================================================
// SSO Infrastructure - PostgreSQL App Repository
// File: crates/sso-infrastructure/src/database/postgres/app_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use tracing::{info, error};

use sso_core::domain::App;
use sso_core::repositories::{AppRepository, RepositoryError};

use super::unavailable;

pub struct PgAppRepository {
    pool: PgPool,
}

impl PgAppRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Provision or update an application (administrative seed path).
    pub async fn upsert(&self, app: &App) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO apps (id, name, secret, token_ttl_secs)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                secret = EXCLUDED.secret,
                token_ttl_secs = EXCLUDED.token_ttl_secs
            "#
        )
        .bind(app.id)
        .bind(&app.name)
        .bind(&app.secret)
        .bind(app.token_ttl_secs)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error upserting app {}: {}", app.id, e);
            unavailable(e)
        })?;

        info!("App provisioned: {} ({})", app.id, app.name);
        Ok(())
    }
}

#[async_trait]
impl AppRepository for PgAppRepository {
    async fn find_by_id(&self, id: i32) -> Result<App, RepositoryError> {
        let row: Option<AppRow> = sqlx::query_as(
            r#"
            SELECT id, name, secret, token_ttl_secs
            FROM apps
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding app by id: {}", e);
            unavailable(e)
        })?;

        let row = row.ok_or(RepositoryError::NotFound)?;
        App::try_from(row).map_err(|e| {
            error!("Stored app {} failed validation: {}", id, e);
            RepositoryError::Unavailable(format!("invalid app record {}: {}", id, e))
        })
    }
}

// Internal row type for SQLx mapping
#[derive(FromRow)]
struct AppRow {
    pub id: i32,
    pub name: String,
    pub secret: String,
    pub token_ttl_secs: i64,
}

impl TryFrom<AppRow> for App {
    type Error = validator::ValidationErrors;

    fn try_from(row: AppRow) -> Result<Self, Self::Error> {
        App::new(row.id, row.name, row.secret, row.token_ttl_secs)
    }
}
