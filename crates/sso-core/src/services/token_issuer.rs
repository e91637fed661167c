//! Session token issuance bound to a (user, application) pair

use chrono::{DateTime, Utc};
use sso_security::jwt::{Claims, JwtService};

use crate::domain::{App, User};
use crate::error::DomainError;

pub struct TokenIssuer;

impl TokenIssuer {
    /// Sign `{uid, email, app_id, iat, exp}` with the app's secret.
    /// `exp` is `now` plus the app's TTL.
    pub fn issue(user: &User, app: &App, now: DateTime<Utc>) -> Result<String, DomainError> {
        let claims = Claims::new(user.id, &user.email, app.id, now, app.token_ttl())
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        JwtService::sign(&claims, app.secret_bytes())
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}
