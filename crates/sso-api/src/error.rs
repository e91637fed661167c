//! Maps engine outcomes to HTTP status codes and the error envelope.
//! Messages are passed through verbatim; clients match on them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sso_core::DomainError;
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Body could not be decoded as the expected JSON shape
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Domain(DomainError::Validation(_)) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Domain(DomainError::UserAlreadyExists) => (StatusCode::CONFLICT, "ALREADY_EXISTS"),
            ApiError::Domain(DomainError::InvalidCredentials) => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            ApiError::Domain(DomainError::AppNotFound) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Domain(DomainError::Internal(_)) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        // Internal causes are logged by the engine where they occur.
        if !matches!(self, ApiError::Domain(DomainError::Internal(_))) {
            tracing::warn!("{}: {}", code, self);
        }

        let body = Json(ApiResponse::<()>::error(code, &self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_while(err: ApiError) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _ = err.into_response();
        });
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::required("email"), StatusCode::BAD_REQUEST),
            (DomainError::UserAlreadyExists, StatusCode::CONFLICT),
            (DomainError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (DomainError::AppNotFound, StatusCode::NOT_FOUND),
            (DomainError::Internal("db down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_and_code().0, status);
        }
    }

    #[test]
    fn test_message_passthrough() {
        assert_eq!(
            ApiError::from(DomainError::required("app_id")).to_string(),
            "app_id is required"
        );
        assert_eq!(
            ApiError::from(DomainError::Internal("secret detail".into())).to_string(),
            "internal error"
        );
    }

    #[test]
    fn test_internal_error_not_logged_again() {
        let logs = logged_while(ApiError::from(DomainError::Internal("db down".into())));
        assert!(logs.is_empty(), "unexpected log output: {}", logs);
    }

    #[test]
    fn test_client_errors_are_logged_as_warnings() {
        let logs = logged_while(ApiError::from(DomainError::InvalidCredentials));
        assert!(logs.contains("WARN"));
        assert!(logs.contains("INVALID_CREDENTIALS"));
    }
}
