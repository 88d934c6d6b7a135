//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::extract::{JsonBody, UserId};
use crate::models::{User, UserPayload};
use crate::repository::RepositoryError;
use crate::state::AppState;
use crate::utils::error::AppError;

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<Json<User>, AppError> {
    let user = state
        .users
        .create(&payload)
        .await
        .map_err(AppError::database("Failed to insert new user"))?;

    tracing::info!(user_id = user.id, "Created user");
    Ok(Json(user))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.list().await.map_err(|err| match err {
        RepositoryError::Scan(_) => AppError::database("Failed to scan user")(err),
        _ => AppError::database("Failed to retrieve users")(err),
    })?;

    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, AppError> {
    match state.users.get(id).await {
        Ok(user) => Ok(Json(user)),
        Err(RepositoryError::NotFound(_)) => {
            Err(AppError::NotFound(format!("User {id} not found")))
        }
        Err(err) => Err(AppError::database("Failed to retrieve user")(err)),
    }
}

/// Overwrites name, email and age. The path id wins over any id in the body;
/// an id with no row is reported as 404 rather than silently accepted.
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<StatusCode, AppError> {
    let affected = state
        .users
        .update(id, &payload)
        .await
        .map_err(AppError::database("Failed to update user"))?;

    if affected == 0 {
        return Err(AppError::NotFound(format!("User {id} not found")));
    }

    tracing::info!(user_id = id, "Updated user");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn users_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed { allow: "GET, POST" }
}

/// Takes [`UserId`] so a malformed identifier is still reported as 400.
pub async fn user_method_not_allowed(_id: UserId) -> AppError {
    AppError::MethodNotAllowed { allow: "GET, PUT" }
}
