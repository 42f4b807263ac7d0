use axum::{extract::FromRequestParts, http::header};

use crate::{auth::AuthError, error::AppError, state::AppState};

/// Caller identity for mutating routes. Extraction fails with 401 when the
/// bearer credential is missing or rejected by the identity verifier.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub subject: String,
}

impl AuthUser {
    /// Body-supplied owner email, falling back to the caller's own.
    pub fn email_or(&self, supplied: Option<String>) -> String {
        supplied
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| self.email.clone())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingCredential)?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AuthError::MalformedHeader)?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MalformedHeader)?;

        let principal = state.verifier.verify(token).await?;

        Ok(AuthUser {
            email: principal.email,
            subject: principal.subject,
        })
    }
}
