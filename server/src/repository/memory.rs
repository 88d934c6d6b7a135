use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RepositoryError, UserRepository};
use crate::models::{User, UserPayload};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, User>,
    last_id: i32,
}

/// In-memory users table.
///
/// Intended for tests/dev. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, payload: &UserPayload) -> Result<User, RepositoryError> {
        let mut table = self.table.write().await;
        table.last_id = table
            .last_id
            .checked_add(1)
            .ok_or(RepositoryError::IdsExhausted)?;

        let user = payload.clone().into_user(table.last_id);
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<User, RepositoryError> {
        let table = self.table.read().await;
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i32, payload: &UserPayload) -> Result<u64, RepositoryError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = payload.clone().into_user(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
