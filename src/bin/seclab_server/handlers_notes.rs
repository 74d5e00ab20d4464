use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::Response;

use seclab::model::{CreateNoteRequest, NoteResponse, NotesResponse};

use crate::http_error::{bad_request, internal_error};
use crate::notes_repo::{CreateNoteError, create_note};
use crate::types::{AppState, Subject};

// Every authenticated caller sees and extends the same collection; there is
// no per-user scoping.

pub(crate) async fn list_notes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NotesResponse>, Response> {
    let notes = state.notes.list().await.map_err(internal_error)?;
    Ok(Json(NotesResponse { notes }))
}

pub(crate) async fn add_note(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NoteResponse>), Response> {
    let Json(payload) = payload.map_err(|rejection| bad_request(&rejection.body_text()))?;

    let note = match create_note(state.notes.as_ref(), payload.text).await {
        Ok(note) => note,
        Err(CreateNoteError::EmptyText) => {
            return Err(bad_request(&CreateNoteError::EmptyText.to_string()));
        }
        Err(CreateNoteError::Storage(err)) => return Err(internal_error(err)),
    };
    tracing::info!(id = note.id, sub = %subject.claims.sub, "note created");

    Ok((StatusCode::CREATED, Json(NoteResponse { note })))
}
