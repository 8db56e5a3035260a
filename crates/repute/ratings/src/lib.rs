//! Repute Ratings - reputation aggregation gated on confirmed meetings
//!
//! Ratings are accepted only between identities with a confirmed meeting,
//! at most once per direction per meeting, and are aggregated per ratee
//! into a running total and count.

#![deny(unsafe_code)]

use repute_meetings::MeetingStore;
use repute_types::{ReputationTally, ReputeError, ReputeResult, ScorePolicy, UserId};
use std::collections::HashMap;

/// Per-ratee reputation aggregates.
#[derive(Clone, Debug, Default)]
pub struct RatingLedger {
    tallies: HashMap<UserId, ReputationTally>,
}

impl RatingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `rater`'s score for `ratee`.
    ///
    /// Requires a confirmed meeting between the two, a score within
    /// `policy`, and an unused rating slot for `rater` on that meeting.
    /// All preconditions are checked before any state is touched.
    pub fn rate(
        &mut self,
        meetings: &mut MeetingStore,
        policy: &ScorePolicy,
        rater: &UserId,
        ratee: &UserId,
        score: u8,
    ) -> ReputeResult<()> {
        if !meetings.has_meeting(rater, ratee) {
            return Err(ReputeError::NoMeetingFound {
                rater: rater.clone(),
                ratee: ratee.clone(),
            });
        }
        if !policy.allows(score) {
            return Err(ReputeError::InvalidScore {
                score,
                min: policy.min,
                max: policy.max,
            });
        }
        if meetings.has_rated(rater, ratee) {
            return Err(ReputeError::AlreadyRated {
                rater: rater.clone(),
                ratee: ratee.clone(),
            });
        }

        meetings.mark_rated(rater, ratee);
        self.tallies.entry(ratee.clone()).or_default().record(score);

        Ok(())
    }

    /// Arithmetic mean of scores received by `user`.
    ///
    /// 0.0 for any identity with no ratings, registered or not.
    pub fn get_rating(&self, user: &UserId) -> f64 {
        self.tallies
            .get(user)
            .map(ReputationTally::mean)
            .unwrap_or(0.0)
    }

    pub fn tally(&self, user: &UserId) -> Option<&ReputationTally> {
        self.tallies.get(user)
    }

    /// Total ratings recorded across all ratees.
    pub fn rating_count(&self) -> u64 {
        self.tallies.values().map(|tally| tally.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id)
    }

    fn met(a: &UserId, b: &UserId) -> MeetingStore {
        let mut meetings = MeetingStore::new();
        meetings.create_meeting(a, b);
        meetings
    }

    #[test]
    fn rating_requires_a_meeting() {
        let mut ledger = RatingLedger::new();
        let mut meetings = MeetingStore::new();

        let result = ledger.rate(
            &mut meetings,
            &ScorePolicy::default(),
            &user("0xa11ce"),
            &user("0xb0b"),
            4,
        );

        assert_eq!(
            result,
            Err(ReputeError::NoMeetingFound {
                rater: user("0xa11ce"),
                ratee: user("0xb0b"),
            })
        );
        assert_eq!(ledger.rating_count(), 0);
    }

    #[test]
    fn out_of_range_scores_are_rejected() {
        let alice = user("0xa11ce");
        let bob = user("0xb0b");
        let mut ledger = RatingLedger::new();
        let mut meetings = met(&alice, &bob);
        let policy = ScorePolicy::default();

        for score in [0, 6] {
            assert_eq!(
                ledger.rate(&mut meetings, &policy, &alice, &bob, score),
                Err(ReputeError::InvalidScore {
                    score,
                    min: 1,
                    max: 5,
                })
            );
        }
        // A rejected score must not consume the rating slot.
        assert!(!meetings.has_rated(&alice, &bob));
    }

    #[test]
    fn each_direction_rates_exactly_once() {
        let alice = user("0xa11ce");
        let bob = user("0xb0b");
        let mut ledger = RatingLedger::new();
        let mut meetings = met(&alice, &bob);
        let policy = ScorePolicy::default();

        ledger.rate(&mut meetings, &policy, &alice, &bob, 5).unwrap();
        ledger.rate(&mut meetings, &policy, &bob, &alice, 3).unwrap();

        assert_eq!(
            ledger.rate(&mut meetings, &policy, &alice, &bob, 5),
            Err(ReputeError::AlreadyRated {
                rater: alice.clone(),
                ratee: bob.clone(),
            })
        );
        assert_eq!(ledger.get_rating(&bob), 5.0);
        assert_eq!(ledger.get_rating(&alice), 3.0);
    }

    #[test]
    fn unrated_identities_read_zero() {
        let ledger = RatingLedger::new();
        assert_eq!(ledger.get_rating(&user("0xeve")), 0.0);
        assert!(ledger.tally(&user("0xeve")).is_none());
    }

    #[test]
    fn tallies_accumulate_per_ratee() {
        let alice = user("0xa11ce");
        let bob = user("0xb0b");
        let carol = user("0xca401");
        let mut ledger = RatingLedger::new();
        let policy = ScorePolicy::default();

        let mut meetings = met(&alice, &bob);
        meetings.create_meeting(&carol, &bob);

        ledger.rate(&mut meetings, &policy, &alice, &bob, 5).unwrap();
        ledger.rate(&mut meetings, &policy, &carol, &bob, 2).unwrap();

        let tally = ledger.tally(&bob).unwrap();
        assert_eq!(tally.total_score, 7);
        assert_eq!(tally.count, 2);
        assert_eq!(ledger.get_rating(&bob), 3.5);
        assert_eq!(ledger.rating_count(), 2);
    }
}
