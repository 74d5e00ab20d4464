use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::access::require_bearer;
use crate::handlers_auth::{healthz, login, whoami};
use crate::handlers_notes::{add_note, list_notes};
use crate::types::AppState;

pub(crate) fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/login", post(login))
        .merge(authed_router(state.clone()))
        .with_state(state)
}

fn authed_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/notes", get(list_notes).post(add_note))
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn_with_state(state, require_bearer))
}
