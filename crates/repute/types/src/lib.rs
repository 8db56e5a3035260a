//! Repute Types - shared records, keys, errors, and events
//!
//! Leaf crate of the repute workspace. Every other crate builds on the
//! identities, pair keys, records, and the closed error enumeration defined
//! here.

#![deny(unsafe_code)]

pub mod error;
pub mod event;
pub mod invitation;
pub mod meeting;
pub mod rating;

pub use error::{ReputeError, ReputeResult};
pub use event::LedgerEvent;
pub use invitation::{Invitation, InvitationId, InvitationState};
pub use meeting::{Meeting, MeetingId, PairKey};
pub use rating::{ReputationTally, ScorePolicy};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A uniquely addressable participant handle (an address-like key).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant admitted to the registry.
///
/// Registration is permanent: records are never removed and `index` is the
/// stable ordinal assigned in registration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub user: UserId,
    pub index: u64,
    pub registered_at: DateTime<Utc>,
}

impl RegisteredUser {
    /// Create the record for a user admitted at `index`.
    pub fn new(user: UserId, index: u64) -> Self {
        Self {
            user,
            index,
            registered_at: Utc::now(),
        }
    }
}
