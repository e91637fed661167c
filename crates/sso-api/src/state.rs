use std::sync::Arc;

use sso_core::services::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self { auth: Arc::new(auth) }
    }
}
