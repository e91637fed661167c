//! JWT token handling

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
    #[error("Token expired")]
    TokenExpired,
}

/// Session token claims. Wire names are fixed: relying apps read them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub uid: i64,
    pub email: String,
    pub app_id: i32,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(
        uid: i64,
        email: &str,
        app_id: i32,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let exp = now
            .checked_add_signed(ttl)
            .ok_or_else(|| JwtError::CreationError(format!("expiry out of range for ttl {}", ttl)))?;
        Ok(Self {
            uid,
            email: email.to_string(),
            app_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }
}

/// HS256 signing. Stateless: the secret is supplied per call since every
/// application signs with its own.
pub struct JwtService;

impl JwtService {
    pub fn sign(claims: &Claims, secret: &[u8]) -> Result<String, JwtError> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| JwtError::CreationError(e.to_string()))
    }

    pub fn decode(token: &str, secret: &[u8]) -> Result<Claims, JwtError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => JwtError::TokenExpired,
            _ => JwtError::ValidationError(e.to_string()),
        })
    }
}
