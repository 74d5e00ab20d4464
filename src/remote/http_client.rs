use crate::model::ErrorBody;

use super::*;

impl ApiClient {
    /// Map 401/403 and other failures to typed errors, carrying the service's
    /// `{"error": ...}` message when there is one.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp
            .json::<ErrorBody>()
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Err(match status {
            reqwest::StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            reqwest::StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            _ => ApiError::Rejected {
                status: status.as_u16(),
                message,
            },
        })
    }

    pub(super) fn auth(token: &str) -> String {
        format!("Bearer {}", token)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
