//! Document ID - opaque string key of a document within a collection
//!
//! Ids minted by the system are UUID v4 strings. Ids handed over by the
//! identity provider (user uids) are kept verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque document identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Longest id accepted from outside
    pub const MAX_LEN: usize = 128;

    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Parse an id supplied by a caller
    ///
    /// Ids must be non-blank, at most [`Self::MAX_LEN`] bytes, and must not
    /// contain a path separator.
    pub fn parse(s: &str) -> Result<Self, DocumentIdParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DocumentIdParseError::Empty);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(DocumentIdParseError::TooLong);
        }
        if trimmed.contains('/') {
            return Err(DocumentIdParseError::InvalidCharacter('/'));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing a DocumentId
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DocumentIdParseError {
    #[error("document id is empty")]
    Empty,

    #[error("document id is too long")]
    TooLong,

    #[error("document id contains invalid character '{0}'")]
    InvalidCharacter(char),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DocumentId {
    type Err = DocumentIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentId::parse(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
