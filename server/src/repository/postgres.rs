use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{RepositoryError, UserRepository};
use crate::config::Config;
use crate::models::{User, UserPayload};

const INSERT_USER: &str = "INSERT INTO users (name, email, age) VALUES ($1, $2, $3) RETURNING id";
const SELECT_USERS: &str = "SELECT id, name, email, age FROM users";
const SELECT_USER: &str = "SELECT id, name, email, age FROM users WHERE id = $1";
const UPDATE_USER: &str = "UPDATE users SET name = $2, email = $3, age = $4 WHERE id = $1";

/// Opens the process-wide pool and verifies it with a round trip.
pub async fn connect_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, payload: &UserPayload) -> Result<User, RepositoryError> {
        let id: i32 = sqlx::query_scalar(INSERT_USER)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(payload.age)
            .fetch_one(&self.pool)
            .await?;

        Ok(payload.clone().into_user(id))
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let users = sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn get(&self, id: i32) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, User>(SELECT_USER)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i32, payload: &UserPayload) -> Result<u64, RepositoryError> {
        let result = sqlx::query(UPDATE_USER)
            .bind(id)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(payload.age)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
