//! Role - the closed set of user roles

use serde::{Deserialize, Serialize};
use std::fmt;

/// User role, stored lowercase in the `users` collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Officer,
    Advisor,
    Creator,
}

impl Role {
    /// Every role, lowest privilege first
    pub const ALL: [Role; 4] = [Role::Member, Role::Officer, Role::Advisor, Role::Creator];

    /// Stored string form
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Officer => "officer",
            Self::Advisor => "advisor",
            Self::Creator => "creator",
        }
    }

    /// Parse the stored string form
    pub fn parse(s: &str) -> Result<Self, RoleParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "member" => Ok(Self::Member),
            "officer" => Ok(Self::Officer),
            "advisor" => Ok(Self::Advisor),
            "creator" => Ok(Self::Creator),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// Error when a stored or supplied role string is not one of the four roles
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s)
    }
}
