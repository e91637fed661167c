//! Domain errors
//!
//! Display strings are part of the public contract: clients match on them.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("application not found")]
    AppNotFound,

    /// Detail is for logs only and never rendered.
    #[error("internal error")]
    Internal(String),
}

impl DomainError {
    /// `"<field> is required"`
    pub fn required(field: &str) -> Self {
        DomainError::Validation(format!("{} is required", field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(DomainError::required("email").to_string(), "email is required");
        assert_eq!(DomainError::required("app_id").to_string(), "app_id is required");
        assert_eq!(DomainError::UserAlreadyExists.to_string(), "user already exists");
        assert_eq!(DomainError::InvalidCredentials.to_string(), "invalid email or password");
        assert_eq!(DomainError::AppNotFound.to_string(), "application not found");
    }

    #[test]
    fn test_internal_hides_detail() {
        let err = DomainError::Internal("connection refused to 10.0.0.5".into());
        assert_eq!(err.to_string(), "internal error");
    }
}
