use crate::model::{
    CreateNoteRequest, LoginRequest, LoginResponse, NoteResponse, NotesResponse, WhoAmI,
};

use super::*;

impl ApiClient {
    pub fn healthz(&self) -> Result<(), ApiError> {
        let resp = self.client.get(self.url("/healthz")).send()?;
        self.ensure_ok(resp)?;
        Ok(())
    }

    pub fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let resp = self
            .client
            .post(self.url("/login"))
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()?;
        let out: LoginResponse = self.ensure_ok(resp)?.json()?;
        Ok(out.token)
    }

    pub fn whoami(&self, token: &str) -> Result<WhoAmI, ApiError> {
        let resp = self
            .client
            .get(self.url("/whoami"))
            .header(reqwest::header::AUTHORIZATION, Self::auth(token))
            .send()?;
        Ok(self.ensure_ok(resp)?.json()?)
    }

    pub fn list_notes(&self, token: &str) -> Result<Vec<Note>, ApiError> {
        let resp = self
            .client
            .get(self.url("/notes"))
            .header(reqwest::header::AUTHORIZATION, Self::auth(token))
            .send()?;
        let out: NotesResponse = self.ensure_ok(resp)?.json()?;
        Ok(out.notes)
    }

    pub fn add_note(&self, token: &str, text: &str) -> Result<Note, ApiError> {
        let resp = self
            .client
            .post(self.url("/notes"))
            .header(reqwest::header::AUTHORIZATION, Self::auth(token))
            .json(&CreateNoteRequest {
                text: text.to_string(),
            })
            .send()?;
        let out: NoteResponse = self.ensure_ok(resp)?.json()?;
        Ok(out.note)
    }
}
