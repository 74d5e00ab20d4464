use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub text: String,

    /// RFC 3339, UTC.
    pub timestamp: String,
}

/// The three notes every fresh service instance starts with. The client shows
/// the same set when the service cannot be reached.
pub fn seed_notes(timestamp: &str) -> Vec<Note> {
    ["Business plan draft", "Meeting notes", "Project requirements"]
        .into_iter()
        .enumerate()
        .map(|(i, text)| Note {
            id: i as u64 + 1,
            text: text.to_string(),
            timestamp: timestamp.to_string(),
        })
        .collect()
}
