use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::Acknowledged;

pub mod extract;
pub mod users;

#[derive(Debug, Serialize)]
pub struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Acknowledged<HealthPayload>, AppError> {
    state
        .users
        .ping()
        .await
        .map_err(AppError::ServiceUnavailable)?;

    let payload = HealthPayload {
        status: "ok",
        service: "users-api",
    };

    Ok(Acknowledged::new(payload, "Health check successful"))
}
