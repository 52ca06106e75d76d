//! Error conversions - HTTP rendering of [`AppError`] / [`AppErrors`]
//!
//! The kind of the first error selects the status code; validation failures
//! carry every `(code, description)` pair grouped by code.

use super::app_error::AppError;
use super::errors::AppErrors;
use super::kind::ErrorKind;

/// RFC 7807 Problem Details body for an error list
pub fn problem_body(errors: &AppErrors) -> serde_json::Value {
    let first = errors.first();
    let status = first.status_code();

    let mut body = serde_json::json!({
        "type": format!("https://httpstatuses.io/{}", status),
        "title": first.kind().as_str(),
        "status": status,
        "detail": first.description(),
    });

    if errors.kind() == ErrorKind::Validation {
        let mut grouped = serde_json::Map::new();
        for err in errors {
            let entry = grouped
                .entry(err.code().to_string())
                .or_insert_with(|| serde_json::Value::Array(Vec::new()));
            if let serde_json::Value::Array(descriptions) = entry {
                descriptions.push(serde_json::Value::String(err.description().to_string()));
            }
        }
        body["errors"] = serde_json::Value::Object(grouped);
    } else {
        body["code"] = serde_json::Value::String(first.code().to_string());
    }

    body
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppErrors {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.first().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(problem_body(&self))).into_response()
    }
}

/// Code reported when the request body cannot be decoded
pub const INVALID_BODY: &str = "Request.Body.Invalid";

/// Malformed or mistyped JSON bodies become a validation failure
#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::validation(INVALID_BODY, rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        AppErrors::from(self).into_response()
    }
}
