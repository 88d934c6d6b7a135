use std::sync::Arc;

use crate::repository::UserRepository;

/// Shared by every handler. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: impl UserRepository + 'static) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}
