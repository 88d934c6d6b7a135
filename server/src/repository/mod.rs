//! Data access for the `users` table.
//!
//! Handlers only see [`UserRepository`]; the process wires in
//! [`PgUserRepository`] at startup and tests substitute
//! [`InMemoryUserRepository`].

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{User, UserPayload};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserRepository;
pub use postgres::{connect_pool, PgUserRepository};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("user {0} not found")]
    NotFound(i32),

    /// A row came back but could not be decoded into a [`User`].
    #[error("failed to scan user row")]
    Scan(#[source] sqlx::Error),

    #[error("database error")]
    Database(#[source] sqlx::Error),

    #[error("no user ids left to assign")]
    IdsExhausted,
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_) => RepositoryError::Scan(err),
            other => RepositoryError::Database(other),
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts `(name, email, age)` and returns the stored record with its
    /// database-assigned id.
    async fn create(&self, payload: &UserPayload) -> Result<User, RepositoryError>;

    /// Every row, in whatever order the store yields them. Either all rows
    /// decode or the call fails.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Returns [`RepositoryError::NotFound`] when no row matches.
    async fn get(&self, id: i32) -> Result<User, RepositoryError>;

    /// Overwrites name, email and age. Returns the number of rows affected.
    async fn update(&self, id: i32, payload: &UserPayload) -> Result<u64, RepositoryError>;

    async fn ping(&self) -> Result<(), RepositoryError>;
}
