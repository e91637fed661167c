//! # SSO Infrastructure
//! 
//! Storage adapters for the repository ports: PostgreSQL and in-memory.

pub mod database;
pub mod memory;

pub use database::{create_pool, run_migrations, PgUserRepository, PgAppRepository};
pub use memory::{seed_apps, InMemoryAppRepository, InMemoryUserRepository};
