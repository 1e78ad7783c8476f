//! Advisor request - an officer asking for temporary advisor privileges

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::DocumentId;

/// Request status; only `pending` is ever stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
}

impl RequestStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }

    /// Unknown stored values are read as pending
    pub fn from_stored(_s: &str) -> Self {
        Self::Pending
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document in the `advisorRequests` collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorRequest {
    pub id: DocumentId,
    pub user_id: DocumentId,
    pub user_name: String,
    pub status: RequestStatus,
    pub timestamp: DateTime<Utc>,
}

impl AdvisorRequest {
    /// New pending request stamped now
    pub fn new(user_id: DocumentId, user_name: String) -> Self {
        Self {
            id: DocumentId::generate(),
            user_id,
            user_name,
            status: RequestStatus::Pending,
            timestamp: Utc::now(),
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}
