//! Capability bitflags for role-gated actions
//!
//! Every mutating or scoped-read action a workflow can perform is one flag.
//! Roles map to fixed sets; the temporary-advisor overlay ORs the advisor set
//! into an officer's set.

use bitflags::bitflags;
use serde::{Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Actions a session may perform
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// Read own events and totals
        const VIEW_OWN_EVENTS           = 1 << 0;
        /// Read the overall leaderboard
        const VIEW_LEADERBOARD          = 1 << 1;
        /// Switch the viewing scope to one other user (read-only)
        const VIEW_OTHER_USER_EVENTS    = 1 << 2;
        /// Read every event in the store
        const VIEW_ALL_EVENTS           = 1 << 3;
        /// Ask an advisor for temporary advisor privileges
        const SUBMIT_ADVISOR_REQUEST    = 1 << 4;
        /// Record hours for any user
        const ADD_HOURS                 = 1 << 5;
        /// Reassign event tags
        const MANAGE_EVENTS             = 1 << 6;
        /// Create and delete users, change roles
        const MANAGE_USERS              = 1 << 7;
        /// Reset every user's hours to zero
        const RESET_HOURS               = 1 << 8;
        /// Run the school-year archival workflow
        const RUN_ARCHIVAL              = 1 << 9;
        /// Read historical records
        const VIEW_HISTORY              = 1 << 10;
        /// Delete historical records by year
        const MANAGE_HISTORY            = 1 << 11;
        /// Approve or deny advisor requests
        const REVIEW_ADVISOR_REQUESTS   = 1 << 12;
        /// Grant or revoke the temporary-advisor flag
        const MANAGE_TEMPORARY_ADVISORS = 1 << 13;
        /// Open the composited dashboards of every role
        const VIEW_ALL_DASHBOARDS       = 1 << 14;

        const MEMBER = Self::VIEW_OWN_EVENTS.bits() | Self::VIEW_LEADERBOARD.bits();

        const OFFICER = Self::MEMBER.bits()
            | Self::VIEW_OTHER_USER_EVENTS.bits()
            | Self::SUBMIT_ADVISOR_REQUEST.bits();

        const ADVISOR = Self::MEMBER.bits()
            | Self::VIEW_OTHER_USER_EVENTS.bits()
            | Self::VIEW_ALL_EVENTS.bits()
            | Self::ADD_HOURS.bits()
            | Self::MANAGE_EVENTS.bits()
            | Self::MANAGE_USERS.bits()
            | Self::RESET_HOURS.bits()
            | Self::RUN_ARCHIVAL.bits()
            | Self::VIEW_HISTORY.bits()
            | Self::MANAGE_HISTORY.bits()
            | Self::REVIEW_ADVISOR_REQUESTS.bits()
            | Self::MANAGE_TEMPORARY_ADVISORS.bits();

        const CREATOR = Self::ADVISOR.bits() | Self::VIEW_ALL_DASHBOARDS.bits();
    }
}

impl Capabilities {
    /// Check if the set contains every flag of `action`
    #[inline]
    pub fn allows(&self, action: Capabilities) -> bool {
        self.contains(action)
    }

    /// Names of the individual flags that are set
    pub fn list(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::empty()
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.list().join(", "))
    }
}

// Serialized as a list of flag names so the presentation layer can gate controls
impl Serialize for Capabilities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_is_read_only() {
        let member = Capabilities::MEMBER;
        assert!(member.allows(Capabilities::VIEW_OWN_EVENTS));
        assert!(member.allows(Capabilities::VIEW_LEADERBOARD));
        assert!(!member.allows(Capabilities::ADD_HOURS));
        assert!(!member.allows(Capabilities::VIEW_OTHER_USER_EVENTS));
    }

    #[test]
    fn test_officer_extends_member() {
        assert!(Capabilities::OFFICER.contains(Capabilities::MEMBER));
        assert!(Capabilities::OFFICER.allows(Capabilities::SUBMIT_ADVISOR_REQUEST));
        assert!(!Capabilities::OFFICER.allows(Capabilities::RUN_ARCHIVAL));
    }

    #[test]
    fn test_creator_is_superset_of_advisor() {
        assert!(Capabilities::CREATOR.contains(Capabilities::ADVISOR));
        assert!(Capabilities::CREATOR.allows(Capabilities::VIEW_ALL_DASHBOARDS));
        assert!(!Capabilities::ADVISOR.allows(Capabilities::VIEW_ALL_DASHBOARDS));
    }

    #[test]
    fn test_list_names() {
        let caps = Capabilities::ADD_HOURS | Capabilities::RUN_ARCHIVAL;
        let list = caps.list();
        assert_eq!(list, vec!["ADD_HOURS", "RUN_ARCHIVAL"]);
    }

    #[test]
    fn test_serialize_as_names() {
        let json = serde_json::to_string(&Capabilities::MEMBER).unwrap();
        assert_eq!(json, r#"["VIEW_OWN_EVENTS","VIEW_LEADERBOARD"]"#);
    }
}
