//! Application registry trait (port)

use async_trait::async_trait;
use crate::domain::App;
use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<App, RepositoryError>;
}
