use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use eventadmin_core::DomainError;

use crate::admin::AdminError;

pub fn admin_error_to_response(err: AdminError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        AdminError::Validation(_) => json_error(StatusCode::BAD_REQUEST, "validation_error", message),
        AdminError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", message),
        AdminError::Unauthorized => json_error(StatusCode::FORBIDDEN, "unauthorized", message),
        AdminError::NotEnoughBudget { .. } => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "not_enough_budget", message)
        }
        AdminError::ForeignMismatch(_) => json_error(StatusCode::CONFLICT, "foreign_mismatch", message),
        AdminError::Provider(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "provider_error", message)
        }
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

/// Parse a path identifier, answering 400 on failure.
pub fn parse_id<T>(raw: &str) -> Result<T, axum::response::Response>
where
    T: core::str::FromStr<Err = DomainError>,
{
    raw.parse::<T>()
        .map_err(|e| admin_error_to_response(AdminError::from(e)))
}

/// Unwrap a JSON body, answering 400 `validation_error` when it is malformed or
/// missing fields.
pub fn json_body<T>(
    body: Result<axum::Json<T>, JsonRejection>,
) -> Result<T, axum::response::Response> {
    body.map(|axum::Json(value)| value).map_err(|rejection| {
        json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text())
    })
}
