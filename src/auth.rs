use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verified identity behind a bearer credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub email: String,
    pub subject: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingCredential,

    #[error("Invalid Authorization header")]
    MalformedHeader,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token has no email claim")]
    MissingEmail,
}

/// Validates a bearer credential. The production implementation checks a signed
/// JWT; tests inject a fixed table of tokens.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Principal, AuthError>;
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

pub struct JwtVerifier {
    decoding: DecodingKey,
    encoding: EncodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Sign a token for `principal`, valid for `ttl`. Used by the seed binary to
    /// hand out development credentials.
    pub fn issue(&self, principal: &Principal, ttl: Duration) -> anyhow::Result<String> {
        let expiration = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| anyhow::anyhow!("Failed to set expiration"))?;
        let claims = Claims {
            sub: principal.subject.clone(),
            email: principal.email.clone(),
            exp: expiration.timestamp() as usize,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }
}

#[async_trait]
impl IdentityVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let decoded = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| AuthError::InvalidToken)?;
        let Claims { sub, email, .. } = decoded.claims;
        if email.trim().is_empty() {
            return Err(AuthError::MissingEmail);
        }
        Ok(Principal {
            email,
            subject: sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issued_tokens_verify() {
        let verifier = JwtVerifier::new("test-secret");
        let principal = Principal {
            email: "cook@example.com".into(),
            subject: "uid-1".into(),
        };
        let token = verifier.issue(&principal, Duration::hours(1)).unwrap();
        assert_eq!(verifier.verify(&token).await.unwrap(), principal);
    }

    #[tokio::test]
    async fn foreign_and_expired_tokens_are_rejected() {
        let verifier = JwtVerifier::new("test-secret");
        let other = JwtVerifier::new("other-secret");
        let principal = Principal {
            email: "cook@example.com".into(),
            subject: "uid-1".into(),
        };

        let foreign = other.issue(&principal, Duration::hours(1)).unwrap();
        assert!(matches!(
            verifier.verify(&foreign).await,
            Err(AuthError::InvalidToken)
        ));

        let expired = verifier.issue(&principal, Duration::hours(-2)).unwrap();
        assert!(matches!(
            verifier.verify(&expired).await,
            Err(AuthError::InvalidToken)
        ));
    }
}
