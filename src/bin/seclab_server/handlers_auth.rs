use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::response::Response;

use seclab::model::{LoginRequest, LoginResponse, WhoAmI};

use crate::http_error::{bad_request, internal_error, invalid_credentials};
use crate::types::{AppState, Subject};

pub(crate) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

pub(crate) async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, Response> {
    let Json(payload) = payload.map_err(|rejection| bad_request(&rejection.body_text()))?;
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(bad_request("username and password are required"));
    }

    let Some(user) = state
        .users
        .authenticate(&payload.username, &payload.password)
    else {
        tracing::info!(username = %payload.username, "login rejected");
        return Err(invalid_credentials());
    };

    let token = state
        .signer
        .issue(&user.id.to_string(), &user.name)
        .map_err(|e| internal_error(e.into()))?;
    tracing::info!(username = %user.username, sub = user.id, "issued session token");

    Ok(Json(LoginResponse { token }))
}

pub(crate) async fn whoami(Extension(subject): Extension<Subject>) -> Json<WhoAmI> {
    let claims = subject.claims;
    Json(WhoAmI {
        sub: claims.sub,
        name: claims.name,
        iat: claims.iat,
        exp: claims.exp,
    })
}
