use anyhow::Result;

use crate::model::{Note, seed_notes};
use crate::remote::NotesApi;
use crate::token::now_ts;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedSource {
    Live,
    /// The service could not be reached; showing the built-in sample notes
    /// plus anything added since.
    Offline,
}

/// Client view of the shared notes collection.
///
/// Any failure talking to the service degrades to local sample data instead of
/// surfacing an error, so a broken backend looks like an empty-ish offline list.
#[derive(Debug)]
pub struct NotesFeed {
    notes: Vec<Note>,
    source: FeedSource,
}

impl Default for NotesFeed {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            source: FeedSource::Live,
        }
    }
}

impl NotesFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn source(&self) -> FeedSource {
        self.source
    }

    pub fn clear(&mut self) {
        self.notes.clear();
        self.source = FeedSource::Live;
    }

    pub fn refresh<A: NotesApi + ?Sized>(&mut self, api: &A, token: Option<&str>) -> FeedSource {
        let fetched = match token {
            Some(token) => api.list_notes(token).map_err(|e| e.to_string()),
            None => Err("no credentials".to_string()),
        };
        match fetched {
            Ok(notes) => {
                self.notes = notes;
                self.source = FeedSource::Live;
            }
            Err(err) => {
                tracing::warn!(error = %err, "notes unavailable; using offline sample data");
                self.notes = seed_notes(&now_ts());
                self.source = FeedSource::Offline;
            }
        }
        self.source
    }

    pub fn add<A: NotesApi + ?Sized>(
        &mut self,
        api: &A,
        token: Option<&str>,
        text: &str,
    ) -> Result<Note> {
        if text.trim().is_empty() {
            anyhow::bail!("Note text is required");
        }

        let created = match token {
            Some(token) => api.add_note(token, text).map_err(|e| e.to_string()),
            None => Err("no credentials".to_string()),
        };
        match created {
            Ok(note) => {
                self.refresh(api, token);
                Ok(note)
            }
            Err(err) => {
                tracing::warn!(error = %err, "note not sent; keeping it locally");
                let note = Note {
                    id: self.notes.len() as u64 + 1,
                    text: text.to_string(),
                    timestamp: now_ts(),
                };
                self.notes.push(note.clone());
                self.source = FeedSource::Offline;
                Ok(note)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/notes_feed_tests.rs"]
mod tests;
