mod config;
mod notes;
mod wire;

pub use self::config::{ClientConfig, DEFAULT_BASE_URL, StoreKind};
pub use self::notes::{Note, seed_notes};
pub use self::wire::{
    CreateNoteRequest, ErrorBody, LoginRequest, LoginResponse, NoteResponse, NotesResponse,
    WhoAmI,
};
