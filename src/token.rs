//! Session tokens: HS256 JWTs carrying `{sub, name, iat, exp}`.
//!
//! The service signs and verifies with a shared secret. The client never sees
//! the secret; it only decodes the payload to check expiry before trusting a
//! cached token.

use std::collections::HashSet;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string.
    pub sub: String,
    pub name: String,
    pub iat: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

impl Claims {
    /// A token without an expiry is never live.
    pub fn is_live_at(&self, now: u64) -> bool {
        self.exp.is_some_and(|exp| exp > now)
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token has no expiry")]
    MissingExpiry,

    #[error("token expired")]
    Expired,

    #[error("sign token: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}

pub fn now_epoch() -> u64 {
    time::OffsetDateTime::now_utc().unix_timestamp().max(0) as u64
}

pub fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

/// Decode the payload segment without checking the signature.
pub fn decode_unverified(token: &str) -> Result<Claims, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Malformed(
            "token must have 3 parts separated by dots".to_string(),
        ));
    }

    let payload = URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| TokenError::Malformed(format!("decode payload: {}", e)))?;

    serde_json::from_slice(&payload)
        .map_err(|e| TokenError::Malformed(format!("parse claims: {}", e)))
}

/// Build a token-shaped string whose signature segment is a fixed placeholder.
///
/// Only the offline demo login uses this; the service rejects such tokens.
pub fn unsigned_demo_token(claims: &Claims) -> Result<String, TokenError> {
    let header = serde_json::json!({"alg": "HS256", "typ": "JWT"});
    let header = serde_json::to_vec(&header).map_err(|e| TokenError::Signing(e.to_string()))?;
    let payload = serde_json::to_vec(claims).map_err(|e| TokenError::Signing(e.to_string()))?;
    Ok(format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(header),
        URL_SAFE_NO_PAD.encode(payload),
        "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c"
    ))
}

pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mint a token for `sub` that expires `ttl` from now.
    pub fn issue(&self, sub: &str, name: &str) -> Result<String, TokenError> {
        let iat = now_epoch();
        let exp = iat
            .checked_add(self.ttl.as_secs())
            .ok_or_else(|| TokenError::Signing("token lifetime out of range".to_string()))?;
        self.sign(&Claims {
            sub: sub.to_string(),
            name: name.to_string(),
            iat,
            exp: Some(exp),
        })
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Check the signature, then require `exp` to be strictly in the future.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        let claims = decode::<Claims>(token, &self.decoding, &validation)?.claims;
        match claims.exp {
            None => Err(TokenError::MissingExpiry),
            Some(_) if !claims.is_live_at(now_epoch()) => Err(TokenError::Expired),
            Some(_) => Ok(claims),
        }
    }
}

#[cfg(test)]
#[path = "tests/token_tests.rs"]
mod tests;
