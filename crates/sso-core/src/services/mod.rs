//! Domain services (business logic)

pub mod auth_service;
pub mod token_issuer;

pub use auth_service::{AuthService, Clock};
pub use token_issuer::TokenIssuer;
