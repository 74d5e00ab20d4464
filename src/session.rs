//! Client session lifecycle: `LoggedOut -> LoggingIn -> LoggedIn -> LoggedOut`.

use thiserror::Error;

use crate::credentials::{CredentialCache, Credentials};
use crate::payment::PaymentVault;
use crate::remote::{ApiError, AuthApi};
use crate::token::{Claims, DEFAULT_TOKEN_TTL, decode_unverified, now_epoch, unsigned_demo_token};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggingIn,
    LoggedIn {
        username: String,
        token: String,
        claims: Claims,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Username and password are required")]
    MissingFields,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token received")]
    InvalidToken,

    #[error("Service unreachable: {0}")]
    Unreachable(String),

    #[error("Login failed: {0}")]
    Service(String),
}

pub struct Session {
    state: SessionState,
    credentials: CredentialCache,
    payments: PaymentVault,
    offline_demo: bool,
}

impl Session {
    pub fn new(credentials: CredentialCache, payments: PaymentVault) -> Self {
        Self {
            state: SessionState::LoggedOut,
            credentials,
            payments,
            offline_demo: false,
        }
    }

    /// Accept `admin/password123` with a locally minted token when the service
    /// cannot be reached.
    pub fn with_offline_demo(mut self, enabled: bool) -> Self {
        self.offline_demo = enabled;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            SessionState::LoggedIn { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn claims(&self) -> Option<&Claims> {
        match &self.state {
            SessionState::LoggedIn { claims, .. } => Some(claims),
            _ => None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match &self.state {
            SessionState::LoggedIn { username, .. } => Some(username),
            _ => None,
        }
    }

    pub fn payments(&self) -> &PaymentVault {
        &self.payments
    }

    /// Pick up a cached token at startup. Anything that does not decode to a
    /// live token is purged from every store.
    pub fn restore(&mut self) -> &SessionState {
        self.state = match self.credentials.load() {
            Credentials::None => SessionState::LoggedOut,
            Credentials::Present { username, token } => match live_claims(&token) {
                Some(claims) => {
                    tracing::info!(username, sub = %claims.sub, "restored cached session");
                    SessionState::LoggedIn {
                        username,
                        token,
                        claims,
                    }
                }
                None => {
                    tracing::info!(username, "cached token expired or invalid; purging");
                    self.credentials.reset();
                    SessionState::LoggedOut
                }
            },
        };
        &self.state
    }

    pub fn login<A: AuthApi + ?Sized>(
        &mut self,
        api: &A,
        username: &str,
        password: &str,
    ) -> Result<Claims, SessionError> {
        if username.is_empty() || password.is_empty() {
            return Err(SessionError::MissingFields);
        }

        self.state = SessionState::LoggingIn;
        let (token, claims) = match self.authenticate(api, username, password) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(username, error = %err, "login failed");
                self.state = SessionState::LoggedOut;
                return Err(err);
            }
        };

        // The in-memory session still works when no store accepts the token.
        if let Err(err) = self.credentials.save(username, &token) {
            tracing::error!(error = %err, "login not cached; session lasts for this process only");
        }

        self.state = SessionState::LoggedIn {
            username: username.to_string(),
            token,
            claims: claims.clone(),
        };
        Ok(claims)
    }

    fn authenticate<A: AuthApi + ?Sized>(
        &self,
        api: &A,
        username: &str,
        password: &str,
    ) -> Result<(String, Claims), SessionError> {
        let token = match api.login(username, password) {
            Ok(token) => token,
            Err(ApiError::Unauthorized(_)) => return Err(SessionError::InvalidCredentials),
            Err(err) if err.is_transport() && self.offline_demo => {
                tracing::warn!(error = %err, "service unreachable; trying offline demo login");
                demo_login(username, password).ok_or(SessionError::InvalidCredentials)?
            }
            Err(err) if err.is_transport() => {
                return Err(SessionError::Unreachable(err.to_string()));
            }
            Err(err) => return Err(SessionError::Service(err.to_string())),
        };

        let claims = live_claims(&token).ok_or(SessionError::InvalidToken)?;
        Ok((token, claims))
    }

    /// Drop cached credentials and payment data, then return to `LoggedOut`.
    pub fn logout(&mut self) {
        self.credentials.reset();
        self.payments.clear();
        self.state = SessionState::LoggedOut;
        tracing::info!("logged out");
    }
}

fn live_claims(token: &str) -> Option<Claims> {
    decode_unverified(token)
        .ok()
        .filter(|c| c.is_live_at(now_epoch()))
}

fn demo_login(username: &str, password: &str) -> Option<String> {
    if username != "admin" || password != "password123" {
        return None;
    }
    let iat = now_epoch();
    let claims = Claims {
        sub: "1234567890".to_string(),
        name: "John Doe".to_string(),
        iat,
        exp: Some(iat + DEFAULT_TOKEN_TTL.as_secs()),
    };
    unsigned_demo_token(&claims).ok()
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
