use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use seclab::model::ErrorBody;

pub(crate) fn error_response(status: StatusCode, msg: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

/// No bearer token at all.
pub(crate) fn unauthorized() -> Response {
    error_response(StatusCode::UNAUTHORIZED, "Authentication required")
}

pub(crate) fn invalid_credentials() -> Response {
    error_response(StatusCode::UNAUTHORIZED, "Invalid credentials")
}

/// A token was presented but is not acceptable.
pub(crate) fn forbidden() -> Response {
    error_response(StatusCode::FORBIDDEN, "Invalid or expired token")
}

pub(crate) fn bad_request(msg: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, msg)
}

pub(crate) fn internal_error(err: anyhow::Error) -> Response {
    tracing::error!(error = %format!("{:#}", err), "request failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
}
