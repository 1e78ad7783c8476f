//! Identity tokens issued by the external identity provider
//!
//! The provider signs an HS256 JWT whose claims carry the provider uid,
//! display name, and email. This service verifies those tokens and, for
//! development and tests, can mint them with the same secret.

use chrono::{Duration, Utc};
use hourboard_core::DocumentId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims carried by an identity token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject (provider uid)
    pub sub: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl IdentityClaims {
    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Authenticated identity: who the provider says the caller is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: DocumentId,
    pub name: String,
    pub email: String,
}

impl TryFrom<IdentityClaims> for Identity {
    type Error = AppError;

    fn try_from(claims: IdentityClaims) -> Result<Self, Self::Error> {
        let uid = DocumentId::parse(&claims.sub).map_err(|_| AppError::InvalidToken)?;
        Ok(Self {
            uid,
            name: claims.name,
            email: claims.email,
        })
    }
}

/// Verifies (and for tests, issues) identity tokens
#[derive(Clone)]
pub struct IdentityTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    leeway_secs: u64,
}

impl IdentityTokenService {
    /// Create a service for the given shared secret
    #[must_use]
    pub fn new(secret: &str, leeway_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            leeway_secs,
        }
    }

    /// Issue a token for an identity, valid for `ttl_secs`
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, identity: &Identity, ttl_secs: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = IdentityClaims {
            sub: identity.uid.to_string(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode identity token")))
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<IdentityClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;

        let token_data =
            decode::<IdentityClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Validate a token and return the identity it carries
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or has a malformed subject
    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        self.decode_token(token)?.try_into()
    }
}

impl std::fmt::Debug for IdentityTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityTokenService")
            .field("leeway_secs", &self.leeway_secs)
            .finish_non_exhaustive()
    }
}
