//! JSON envelopes for responses that are not a bare user representation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `{"success": true, "data": ..., "message": ...}`, used by `/health`.
#[derive(Debug, Serialize)]
pub struct Acknowledged<T> {
    pub success: bool,
    pub data: T,
    pub message: &'static str,
}

impl<T: Serialize> Acknowledged<T> {
    pub fn new(data: T, message: &'static str) -> Self {
        Self {
            success: true,
            data,
            message,
        }
    }
}

impl<T: Serialize> IntoResponse for Acknowledged<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// `{"success": false, "error": {"code": ..., "message": ...}}`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub success: bool,
    pub error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail<'a> {
    pub code: &'a str,
    pub message: &'a str,
}

pub fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    let body = ErrorEnvelope {
        success: false,
        error: ErrorDetail { code, message },
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_acknowledged_shape() {
        let ack = Acknowledged::new(json!({"status": "ok"}), "fine");
        let body = serde_json::to_value(ack).unwrap();
        assert_eq!(
            body,
            json!({"success": true, "data": {"status": "ok"}, "message": "fine"})
        );
    }

    #[test]
    fn test_error_envelope_shape() {
        let body = serde_json::to_value(ErrorEnvelope {
            success: false,
            error: ErrorDetail {
                code: "NOT_FOUND",
                message: "User 9 not found",
            },
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "success": false,
                "error": {"code": "NOT_FOUND", "message": "User 9 not found"}
            })
        );
    }

    #[test]
    fn test_error_response_status() {
        let response =
            error_response(StatusCode::BAD_REQUEST, "BAD_REQUEST", "Invalid user ID");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
