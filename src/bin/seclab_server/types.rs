use std::sync::Arc;

use seclab::token::{Claims, TokenSigner};

use crate::notes_repo::NoteRepository;
use crate::users::UserTable;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) signer: Arc<TokenSigner>,
    pub(crate) users: Arc<UserTable>,
    pub(crate) notes: Arc<dyn NoteRepository>,
}

/// Verified claims of the caller, attached to every request past `require_bearer`.
#[derive(Clone, Debug)]
pub(crate) struct Subject {
    pub(crate) claims: Claims,
}
