use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::http_error::{forbidden, unauthorized};
use crate::types::{AppState, Subject};

/// 401 without a bearer token; 403 when the token fails signature or expiry
/// checks; otherwise the verified claims ride along as a [`Subject`].
pub(crate) async fn require_bearer(
    State(state): State<Arc<AppState>>,
    mut req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(req.headers()) else {
        return unauthorized();
    };

    let claims = match state.signer.verify(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(error = %err, "rejected bearer token");
            return forbidden();
        }
    };

    req.extensions_mut().insert(Subject { claims });
    next.run(req).await
}

/// Auth schemes are case-insensitive, so `bearer <token>` is accepted too.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, rest) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

#[cfg(test)]
#[path = "../../tests/bin/seclab_server/access_tests.rs"]
mod tests;
