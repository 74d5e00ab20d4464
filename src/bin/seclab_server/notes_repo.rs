use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use seclab::model::{Note, seed_notes};
use seclab::token::now_ts;

/// Storage for the shared notes collection. Handlers only see this trait, so
/// the in-memory vector can be replaced by a database.
#[async_trait]
pub(crate) trait NoteRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Note>>;

    /// Append a note, assigning `id = current count + 1` and the current time.
    async fn append(&self, text: String) -> Result<Note>;
}

/// Process-memory notes; lost on restart.
pub(crate) struct MemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteRepository {
    pub(crate) fn new(notes: Vec<Note>) -> Self {
        Self {
            notes: RwLock::new(notes),
        }
    }

    pub(crate) fn seeded() -> Self {
        Self::new(seed_notes(&now_ts()))
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn list(&self) -> Result<Vec<Note>> {
        Ok(self.notes.read().await.clone())
    }

    async fn append(&self, text: String) -> Result<Note> {
        // Count and push under one write lock so concurrent creates get distinct ids.
        let mut notes = self.notes.write().await;
        let note = Note {
            id: notes.len() as u64 + 1,
            text,
            timestamp: now_ts(),
        };
        notes.push(note.clone());
        Ok(note)
    }
}

#[derive(Debug, Error)]
pub(crate) enum CreateNoteError {
    #[error("Note text is required")]
    EmptyText,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Validate and append. Blank text never reaches the repository.
pub(crate) async fn create_note(
    repo: &dyn NoteRepository,
    text: String,
) -> Result<Note, CreateNoteError> {
    if text.trim().is_empty() {
        return Err(CreateNoteError::EmptyText);
    }
    Ok(repo.append(text).await?)
}

#[cfg(test)]
#[path = "../../tests/bin/seclab_server/notes_repo_tests.rs"]
mod tests;
