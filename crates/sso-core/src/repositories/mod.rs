//! Repository traits (ports)

pub mod error;
pub mod user_repository;
pub mod app_repository;

pub use error::RepositoryError;
pub use user_repository::UserRepository;
pub use app_repository::AppRepository;

#[cfg(test)]
pub use app_repository::MockAppRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
