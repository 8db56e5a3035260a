use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeetingId(pub String);

impl MeetingId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for MeetingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical key for an unordered identity pair.
///
/// The lexicographically smaller identity is stored first, so {A, B} and
/// {B, A} map to the same key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    first: UserId,
    second: UserId,
}

impl PairKey {
    pub fn new(a: &UserId, b: &UserId) -> Self {
        if a <= b {
            Self {
                first: a.clone(),
                second: b.clone(),
            }
        } else {
            Self {
                first: b.clone(),
                second: a.clone(),
            }
        }
    }

    pub fn first(&self) -> &UserId {
        &self.first
    }

    pub fn second(&self) -> &UserId {
        &self.second
    }
}

/// A confirmed, unordered association between two identities enabling
/// mutual rating.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub meeting_id: MeetingId,
    pub participants: PairKey,
    pub confirmed_at: DateTime<Utc>,
    /// Identities that have already used their one rating for this meeting.
    pub ratings_given: HashSet<UserId>,
}

impl Meeting {
    pub fn new(a: &UserId, b: &UserId) -> Self {
        Self {
            meeting_id: MeetingId::generate(),
            participants: PairKey::new(a, b),
            confirmed_at: Utc::now(),
            ratings_given: HashSet::new(),
        }
    }

    pub fn has_rated(&self, rater: &UserId) -> bool {
        self.ratings_given.contains(rater)
    }
}
