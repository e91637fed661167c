//! # SSO Shared
//! 
//! Shared configuration, constants, utilities, and telemetry for the SSO service.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use crate::config::AppConfig;
pub use error::AppError;
