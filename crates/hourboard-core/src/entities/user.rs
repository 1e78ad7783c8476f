//! User entity - a volunteer account and its running hour total

use crate::value_objects::{Capabilities, DocumentId, Role};

/// Document in the `users` collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: DocumentId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub hours: u32,
    pub temporary_advisor: bool,
}

impl User {
    /// Largest hour total a user can hold
    pub const MAX_HOURS: u32 = i32::MAX.unsigned_abs();

    /// Total after adding `delta` hours, or `None` past `MAX_HOURS`
    pub fn hours_after(&self, delta: u32) -> Option<u32> {
        self.hours
            .checked_add(delta)
            .filter(|total| *total <= Self::MAX_HOURS)
    }

    /// Create a user with zero hours and no overlay
    pub fn new(id: DocumentId, name: String, email: String, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            role,
            hours: 0,
            temporary_advisor: false,
        }
    }

    /// Record created for a first-time login
    pub fn provisioned(id: DocumentId, name: String, email: String) -> Self {
        Self::new(id, name, email, Role::Member)
    }

    /// Effective capability set including the temporary-advisor overlay
    pub fn capabilities(&self) -> Capabilities {
        crate::policy::capabilities(self.role, self.temporary_advisor)
    }
}
