//! In-memory adapters (single process, no persistence)

pub mod user_store;
pub mod app_registry;

pub use user_store::InMemoryUserRepository;
pub use app_registry::{seed_apps, InMemoryAppRepository};
