// ============================================================================
// SSO Core - Authentication Service
// File: crates/sso-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service: registration and per-application login

use std::sync::Arc;
use chrono::{DateTime, Utc};
use tracing::{info, warn, error};

use sso_security::password::{PasswordError, PasswordHasher};
use sso_shared::utils::mask_email;

use crate::domain::{App, User};
use crate::error::DomainError;
use crate::repositories::{AppRepository, RepositoryError, UserRepository};
use crate::services::token_issuer::TokenIssuer;

/// Verified against when the email is unknown, so both failure paths cost one Argon2 run.
const DUMMY_PASSWORD: &str = "sso-dummy-password";

/// Time source used for token issuance.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Stateless orchestrator over the credential store, the application
/// registry, the password hasher and the token issuer. Cheap to share.
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    app_repo: Arc<dyn AppRepository>,
    hasher: Arc<dyn PasswordHasher>,
    dummy_hash: Vec<u8>,
    clock: Clock,
}

impl AuthService {
    /// Hashes a throwaway password once, with the same cost as real accounts.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        app_repo: Arc<dyn AppRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Result<Self, PasswordError> {
        let dummy_hash = hasher.hash(DUMMY_PASSWORD)?;
        Ok(Self {
            user_repo,
            app_repo,
            hasher,
            dummy_hash,
            clock: Arc::new(Utc::now),
        })
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Register a new user, returning the id assigned by the store
    pub async fn register(&self, email: &str, password: &str) -> Result<i64, DomainError> {
        if email.is_empty() {
            return Err(DomainError::required("email"));
        }
        if password.is_empty() {
            return Err(DomainError::required("password"));
        }

        info!("Registration attempt for email: {}", mask_email(email));

        let password_hash = self.hash_password(password).await?;

        let user_id = self
            .user_repo
            .create(email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists => {
                    warn!("Registration failed: email already exists: {}", mask_email(email));
                    DomainError::UserAlreadyExists
                }
                other => internal("create user", other),
            })?;

        info!(user_id, "Registration successful for: {}", mask_email(email));
        Ok(user_id)
    }

    /// Verify credentials and issue a token signed for `app_id`
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        app_id: i32,
    ) -> Result<String, DomainError> {
        if email.is_empty() {
            return Err(DomainError::required("email"));
        }
        if password.is_empty() {
            return Err(DomainError::required("password"));
        }
        if app_id == 0 {
            return Err(DomainError::required("app_id"));
        }

        info!(app_id, "Login attempt for email: {}", mask_email(email));

        // 1. Find user by email
        let user: User = match self.user_repo.find_by_email(email).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound) => {
                self.verify_password(password, &self.dummy_hash).await?;
                warn!("Login failed: email not found: {}", mask_email(email));
                return Err(DomainError::InvalidCredentials);
            }
            Err(other) => return Err(internal("find user", other)),
        };

        // 2. Verify password
        if !self.verify_password(password, &user.password_hash).await? {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(DomainError::InvalidCredentials);
        }

        // 3. Resolve the application only once credentials are proven
        let app: App = self.app_repo.find_by_id(app_id).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                warn!(app_id, "Login failed: application not found");
                DomainError::AppNotFound
            }
            other => internal("find app", other),
        })?;

        // 4. Issue token
        let token = TokenIssuer::issue(&user, &app, (self.clock)())?;

        info!(user_id = user.id, app_id, "Login successful");
        Ok(token)
    }

    // Argon2 is CPU bound; keep it off the async workers.
    async fn hash_password(&self, password: &str) -> Result<Vec<u8>, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| internal("hash task", e))?
            .map_err(|e| internal("hash password", e))
    }

    async fn verify_password(&self, password: &str, hash: &[u8]) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let hash = hash.to_vec();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| internal("verify task", e))
    }
}

/// Logs the cause here; callers render only "internal error".
fn internal(op: &str, cause: impl std::fmt::Display) -> DomainError {
    error!("{} failed: {}", op, cause);
    DomainError::Internal(format!("{}: {}", op, cause))
}
