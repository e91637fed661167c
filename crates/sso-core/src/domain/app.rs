// ============================================================================
// SSO Core - App Entity
// File: crates/sso-core/src/domain/app.rs
// Description: Relying application with its own signing secret and token TTL
// ============================================================================

use std::fmt;

use chrono::Duration;
use validator::Validate;

/// Application entity. Id 0 is reserved for "unset".
#[derive(Clone, PartialEq, Eq, Validate)]
pub struct App {
    #[validate(range(min = 1, message = "App id must be positive"))]
    pub id: i32,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    /// HS256 signing secret
    #[validate(length(min = 1, message = "Secret must not be empty"))]
    pub secret: String,

    /// Capped at ten years so `now + ttl` always fits a timestamp
    #[validate(range(min = 1, max = 315_360_000, message = "Token TTL must be between one second and ten years"))]
    pub token_ttl_secs: i64,
}

impl App {
    /// Create a validated application descriptor
    pub fn new(
        id: i32,
        name: String,
        secret: String,
        token_ttl_secs: i64,
    ) -> Result<Self, validator::ValidationErrors> {
        let app = Self {
            id,
            name: name.trim().to_string(),
            secret,
            token_ttl_secs,
        };

        app.validate()?;
        Ok(app)
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::seconds(self.token_ttl_secs)
    }

    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &"[redacted]")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid_app() {
        let app = App::new(1, " test ".to_string(), "test_secret".to_string(), 3600).unwrap();
        assert_eq!(app.name, "test");
        assert_eq!(app.token_ttl(), Duration::hours(1));
        assert_eq!(app.secret_bytes(), b"test_secret");
    }

    #[test]
    fn test_zero_id_is_reserved() {
        assert!(App::new(0, "test".into(), "s".into(), 60).is_err());
    }

    #[test]
    fn test_rejects_empty_secret_and_bad_ttl() {
        assert!(App::new(1, "test".into(), String::new(), 60).is_err());
        assert!(App::new(1, "test".into(), "s".into(), 0).is_err());
    }

    #[test]
    fn test_rejects_ttl_beyond_ten_years() {
        assert!(App::new(1, "test".into(), "s".into(), 315_360_000).is_ok());
        assert!(App::new(1, "test".into(), "s".into(), 315_360_001).is_err());
        assert!(App::new(1, "big".into(), "s".into(), 10_000_000_000_000).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let app = App::new(7, "billing".into(), "hunter2".into(), 60).unwrap();
        assert!(!format!("{:?}", app).contains("hunter2"));
    }
}
