//! Role policy - which actions and which data each role gets

mod session;

use serde::Serialize;

use crate::value_objects::{Capabilities, DocumentId, Role};

pub use session::Session;

/// Fixed capability set of a role, without overlays
pub const fn role_capabilities(role: Role) -> Capabilities {
    match role {
        Role::Member => Capabilities::MEMBER,
        Role::Officer => Capabilities::OFFICER,
        Role::Advisor => Capabilities::ADVISOR,
        Role::Creator => Capabilities::CREATOR,
    }
}

/// Check whether a role may perform an action
pub fn can_perform(role: Role, action: Capabilities) -> bool {
    role_capabilities(role).allows(action)
}

/// Effective capabilities; the temporary-advisor flag only lifts officers
pub fn capabilities(role: Role, temporary_advisor: bool) -> Capabilities {
    match role {
        Role::Officer if temporary_advisor => Capabilities::OFFICER | Capabilities::ADVISOR,
        _ => role_capabilities(role),
    }
}

/// Dashboard rendered for a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Member,
    Officer,
    Advisor,
    Creator,
}

impl DashboardView {
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Member => Self::Member,
            Role::Officer => Self::Officer,
            Role::Advisor => Self::Advisor,
            Role::Creator => Self::Creator,
        }
    }

    /// Views a role can open; creators get every composited view
    pub fn available(role: Role) -> Vec<DashboardView> {
        match role {
            Role::Creator => vec![Self::Creator, Self::Advisor, Self::Officer, Self::Member],
            other => vec![Self::for_role(other)],
        }
    }
}

/// Which events a read is allowed to cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventScope {
    /// Only the caller's own events
    Own,
    /// One selected user's events, read-only
    User(DocumentId),
    /// Every event in the store
    All,
}
