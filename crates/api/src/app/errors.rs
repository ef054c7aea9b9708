use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use budgetd_core::DomainError;

/// Map a domain error to its HTTP response.
///
/// Everything the store rejects is a deterministic function of the
/// request and current state, so all rejections are client errors:
/// 400 for shape and constraint failures, 404 for missing envelopes.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invariant_violation", msg)
        }
        DomainError::Conflict(msg) => json_error(StatusCode::BAD_REQUEST, "conflict", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn envelope_not_found(name: &str) -> axum::response::Response {
    json_error(
        StatusCode::NOT_FOUND,
        "not_found",
        format!("envelope with name {name} does not exist"),
    )
}
