//! Repute Meetings - confirmed meetings keyed by unordered pair
//!
//! Meeting existence is decoupled from invitation state so rating
//! eligibility is a single existence test instead of a re-derivation from
//! invitation history.

#![deny(unsafe_code)]

use repute_types::{Meeting, MeetingId, PairKey, UserId};
use std::collections::HashMap;

/// Store of confirmed meetings.
#[derive(Clone, Debug, Default)]
pub struct MeetingStore {
    meetings: HashMap<PairKey, Meeting>,
}

impl MeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the meeting formed by an accepted invitation.
    ///
    /// One meeting exists per unordered pair. A second create for the same
    /// pair is a sequencing bug in the caller: it trips a debug assertion
    /// and otherwise returns the existing meeting untouched.
    pub fn create_meeting(&mut self, a: &UserId, b: &UserId) -> MeetingId {
        let key = PairKey::new(a, b);
        debug_assert!(
            !self.meetings.contains_key(&key),
            "meeting already exists for {} and {}",
            key.first(),
            key.second(),
        );

        self.meetings
            .entry(key)
            .or_insert_with(|| Meeting::new(a, b))
            .meeting_id
            .clone()
    }

    pub fn has_meeting(&self, a: &UserId, b: &UserId) -> bool {
        self.meetings.contains_key(&PairKey::new(a, b))
    }

    pub fn meeting(&self, a: &UserId, b: &UserId) -> Option<&Meeting> {
        self.meetings.get(&PairKey::new(a, b))
    }

    pub fn meeting_count(&self) -> u64 {
        self.meetings.len() as u64
    }

    /// Whether `rater` has already used their one rating for the
    /// {rater, ratee} meeting. False when no such meeting exists.
    pub fn has_rated(&self, rater: &UserId, ratee: &UserId) -> bool {
        self.meeting(rater, ratee)
            .is_some_and(|meeting| meeting.has_rated(rater))
    }

    /// Consume `rater`'s one rating slot for the {rater, ratee} meeting.
    pub fn mark_rated(&mut self, rater: &UserId, ratee: &UserId) {
        if let Some(meeting) = self.meetings.get_mut(&PairKey::new(rater, ratee)) {
            meeting.ratings_given.insert(rater.clone());
        }
    }
}
