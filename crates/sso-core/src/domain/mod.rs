//! # SSO Core - Domain Module
//! 
//! Domain entities for the SSO application.

pub mod user;
pub mod app;

pub use user::User;
pub use app::App;
