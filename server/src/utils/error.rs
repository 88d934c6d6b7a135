use std::net::SocketAddr;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::repository::RepositoryError;
use crate::utils::response::error_response;

/// Every failure a request can end in. Converted to a response at the
/// handler boundary and never propagated further.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed { allow: &'static str },

    /// `message` is what the client sees; `source` only reaches the logs.
    #[error("Database error: {message}")]
    DatabaseError {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },

    #[error("Service unavailable")]
    ServiceUnavailable(#[source] RepositoryError),
}

impl AppError {
    pub fn database(message: &'static str) -> impl FnOnce(RepositoryError) -> AppError {
        move |source| AppError::DatabaseError { message, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            AppError::DatabaseError { .. } => "DATABASE_ERROR",
            AppError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    fn log(&self) {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                warn!(message = %msg, "Client error");
            }
            AppError::MethodNotAllowed { allow } => {
                warn!(allow = %allow, "Method not allowed");
            }
            AppError::DatabaseError { message, source } => {
                error!(error = ?source, message = %message, "Database error");
            }
            AppError::ServiceUnavailable(source) => {
                error!(error = ?source, "Health check failed");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        // Server-side failures only ever expose a fixed message
        let public_message = match &self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::MethodNotAllowed { .. } => "Method not allowed".to_string(),
            AppError::DatabaseError { message, .. } => message.to_string(),
            AppError::ServiceUnavailable(_) => "Database unavailable".to_string(),
        };

        let mut response = error_response(status, code, &public_message);

        if let AppError::MethodNotAllowed { allow } = self {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(allow));
        }

        response
    }
}

/// Reasons the process can fail before it starts serving traffic.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to connect to database")]
    Database(#[from] sqlx::Error),

    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed")]
    Serve(#[source] std::io::Error),
}
