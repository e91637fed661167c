//! In-memory credential store

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use sso_core::domain::User;
use sso_core::repositories::{RepositoryError, UserRepository};

#[derive(Default)]
struct UserTable {
    by_email: HashMap<String, User>,
    last_id: i64,
}

/// Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.read().by_email.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, email: &str, password_hash: &[u8]) -> Result<i64, RepositoryError> {
        // Check and insert under one write guard.
        let mut table = self.table.write();
        if table.by_email.contains_key(email) {
            return Err(RepositoryError::AlreadyExists);
        }

        table.last_id += 1;
        let id = table.last_id;
        table.by_email.insert(
            email.to_string(),
            User {
                id,
                email: email.to_string(),
                password_hash: password_hash.to_vec(),
            },
        );
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        self.table
            .read()
            .by_email
            .get(email)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}
