//! In-memory application registry
//!
//! Loaded once at startup and immutable afterwards, except through `reload`,
//! which swaps the whole table at once.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::info;

use sso_core::domain::App;
use sso_core::repositories::{AppRepository, RepositoryError};
use sso_shared::config::{AppSeed, AuthSettings};

pub struct InMemoryAppRepository {
    apps: RwLock<HashMap<i32, App>>,
}

impl InMemoryAppRepository {
    pub fn new(apps: impl IntoIterator<Item = App>) -> Self {
        Self {
            apps: RwLock::new(index(apps)),
        }
    }

    /// Replace every registered application. Returns the new count.
    pub fn reload(&self, apps: impl IntoIterator<Item = App>) -> usize {
        let table = index(apps);
        let count = table.len();
        *self.apps.write() = table;
        info!("App registry reloaded: {} application(s)", count);
        count
    }

    pub fn len(&self) -> usize {
        self.apps.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn index(apps: impl IntoIterator<Item = App>) -> HashMap<i32, App> {
    apps.into_iter().map(|app| (app.id, app)).collect()
}

#[async_trait]
impl AppRepository for InMemoryAppRepository {
    async fn find_by_id(&self, id: i32) -> Result<App, RepositoryError> {
        self.apps
            .read()
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

/// Validate configured seeds into domain apps, applying the default TTL.
pub fn seed_apps(
    seeds: &[AppSeed],
    auth: &AuthSettings,
) -> Result<Vec<App>, validator::ValidationErrors> {
    seeds
        .iter()
        .map(|seed| {
            App::new(
                seed.id,
                seed.name.clone(),
                seed.secret.clone(),
                seed.ttl_secs(auth),
            )
        })
        .collect()
}
