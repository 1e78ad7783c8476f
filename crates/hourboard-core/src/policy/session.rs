//! Per-request session built from the stored user

use super::{capabilities, DashboardView, EventScope};
use crate::entities::User;
use crate::error::DomainError;
use crate::value_objects::{Capabilities, DocumentId, Role};

/// Authenticated caller, passed explicitly to every workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: DocumentId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub temporary_advisor: bool,
}

impl Session {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            temporary_advisor: user.temporary_advisor,
        }
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        capabilities(self.role, self.temporary_advisor)
    }

    #[inline]
    pub fn can(&self, action: Capabilities) -> bool {
        self.capabilities().allows(action)
    }

    /// Fail with `MissingCapability` unless the session allows `action`
    pub fn require(&self, action: Capabilities) -> Result<(), DomainError> {
        if self.can(action) {
            Ok(())
        } else {
            let missing = action.difference(self.capabilities());
            Err(DomainError::MissingCapability(missing.to_string()))
        }
    }

    /// Whether the caller may read the events of `user_id`
    pub fn can_view_user_events(&self, user_id: &DocumentId) -> bool {
        *user_id == self.user_id || self.can(Capabilities::VIEW_OTHER_USER_EVENTS)
    }

    /// Resolve the scope of an event listing
    ///
    /// No selection means everything for sessions that may see all events
    /// and the caller's own events otherwise.
    pub fn event_scope(&self, selected: Option<&DocumentId>) -> Result<EventScope, DomainError> {
        match selected {
            Some(id) if *id == self.user_id => Ok(EventScope::Own),
            Some(id) => {
                self.require(Capabilities::VIEW_OTHER_USER_EVENTS)?;
                Ok(EventScope::User(id.clone()))
            }
            None if self.can(Capabilities::VIEW_ALL_EVENTS) => Ok(EventScope::All),
            None => Ok(EventScope::Own),
        }
    }

    /// Dashboard for this session's role
    pub fn dashboard_view(&self) -> DashboardView {
        DashboardView::for_role(self.role)
    }
}
