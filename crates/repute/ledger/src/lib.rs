//! Repute Ledger - the authoritative facade over the repute stores
//!
//! This crate provides:
//! - the single public entry point composing the identity registry, the
//!   invitation directory, the meeting store, and the rating ledger
//! - serialized, all-or-nothing mutating operations behind one state lock
//! - `UserRegistered` notifications with a replayable in-order event log
//!
//! Collaborators (presentation, session providers, transports) call these
//! operations and observe notifications; they hold no mutation rights of
//! their own.

#![deny(unsafe_code)]

pub mod events;

pub use events::EventBus;
pub use repute_invitations::InvitationDirectory;
pub use repute_meetings::MeetingStore;
pub use repute_ratings::RatingLedger;
pub use repute_registry::IdentityRegistry;
pub use repute_types::{
    Invitation, InvitationId, InvitationState, LedgerEvent, Meeting, MeetingId, PairKey,
    RegisteredUser, ReputationTally, ReputeError, ReputeResult, ScorePolicy, UserId,
};

use serde::{Deserialize, Serialize};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;
use tracing::info;

/// The authoritative reputation ledger.
///
/// All four stores live behind a single lock: every mutating operation
/// validates its preconditions and applies its writes under one write guard,
/// so operations are serialized and atomic, and readers never observe a
/// half-applied operation.
pub struct ReputeLedger {
    policy: ScorePolicy,
    inner: RwLock<LedgerState>,
}

#[derive(Default)]
struct LedgerState {
    registry: IdentityRegistry,
    invitations: InvitationDirectory,
    meetings: MeetingStore,
    ratings: RatingLedger,
    events: EventBus,
}

impl ReputeLedger {
    /// Create a ledger with the default five-star score policy.
    pub fn new() -> Self {
        Self {
            policy: ScorePolicy::default(),
            inner: RwLock::new(LedgerState::default()),
        }
    }

    /// Create a ledger with an explicit score policy.
    pub fn with_policy(policy: ScorePolicy) -> ReputeResult<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            inner: RwLock::new(LedgerState::default()),
        })
    }

    pub fn policy(&self) -> ScorePolicy {
        self.policy
    }

    fn read(&self) -> ReputeResult<RwLockReadGuard<'_, LedgerState>> {
        self.inner.read().map_err(|_| ReputeError::StatePoisoned)
    }

    fn write(&self) -> ReputeResult<RwLockWriteGuard<'_, LedgerState>> {
        self.inner.write().map_err(|_| ReputeError::StatePoisoned)
    }

    /// Register the calling identity and notify subscribers.
    pub fn register(&self, caller: &UserId) -> ReputeResult<RegisteredUser> {
        let mut state = self.write()?;

        let record = state.registry.register(caller.clone())?;
        state.events.publish(LedgerEvent::UserRegistered {
            user: record.user.clone(),
            index: record.index,
        });
        info!(user = %record.user, index = record.index, "user registered");

        Ok(record)
    }

    /// Invite `guest` to a meeting on behalf of the caller.
    pub fn send_invitation(&self, caller: &UserId, guest: &UserId) -> ReputeResult<InvitationId> {
        let mut state = self.write()?;
        let LedgerState {
            registry,
            invitations,
            meetings,
            ..
        } = &mut *state;

        let invitation_id = invitations.send_invitation(registry, meetings, caller, guest)?;
        info!(sender = %caller, guest = %guest, invitation = %invitation_id, "invitation sent");

        Ok(invitation_id)
    }

    /// Cancel the caller's pending invitation to `guest`.
    pub fn cancel_invitation(&self, caller: &UserId, guest: &UserId) -> ReputeResult<()> {
        let mut state = self.write()?;

        let invitation = state.invitations.cancel_invitation(caller, guest)?;
        info!(
            sender = %invitation.sender,
            guest = %invitation.guest,
            invitation = %invitation.invitation_id,
            "invitation cancelled"
        );

        Ok(())
    }

    /// Accept `sender`'s pending invitation to the caller, confirming the
    /// meeting between the two.
    pub fn accept_invitation(&self, caller: &UserId, sender: &UserId) -> ReputeResult<MeetingId> {
        let mut state = self.write()?;

        let invitation = state.invitations.accept_invitation(sender, caller)?;
        let meeting_id = state
            .meetings
            .create_meeting(&invitation.sender, &invitation.guest);
        info!(
            sender = %invitation.sender,
            guest = %invitation.guest,
            meeting = %meeting_id,
            "invitation accepted, meeting confirmed"
        );

        Ok(meeting_id)
    }

    /// Record the caller's score for `ratee`.
    pub fn rate(&self, caller: &UserId, ratee: &UserId, score: u8) -> ReputeResult<()> {
        let mut state = self.write()?;
        let LedgerState {
            meetings, ratings, ..
        } = &mut *state;

        ratings.rate(meetings, &self.policy, caller, ratee, score)?;
        info!(rater = %caller, ratee = %ratee, score, "rating recorded");

        Ok(())
    }

    /// Mean score received by `identity`; 0.0 for any identity with no
    /// ratings, registered or not.
    pub fn get_rating(&self, identity: &UserId) -> ReputeResult<f64> {
        Ok(self.read()?.ratings.get_rating(identity))
    }

    pub fn is_registered(&self, identity: &UserId) -> ReputeResult<bool> {
        Ok(self.read()?.registry.is_registered(identity))
    }

    pub fn user_count(&self) -> ReputeResult<u64> {
        Ok(self.read()?.registry.user_count())
    }

    /// Participant registered at ordinal `index`.
    pub fn user_at(&self, index: u64) -> ReputeResult<RegisteredUser> {
        self.read()?.registry.user_at(index).cloned()
    }

    /// All participants in registration order.
    pub fn users(&self) -> ReputeResult<Vec<RegisteredUser>> {
        Ok(self.read()?.registry.users().cloned().collect())
    }

    pub fn has_pending_invitation(&self, sender: &UserId, guest: &UserId) -> ReputeResult<bool> {
        Ok(self.read()?.invitations.has_pending(sender, guest))
    }

    pub fn has_meeting(&self, a: &UserId, b: &UserId) -> ReputeResult<bool> {
        Ok(self.read()?.meetings.has_meeting(a, b))
    }

    /// Subscribe to change notifications. Events published after the
    /// subscription are delivered in emission order.
    pub fn subscribe(&self) -> ReputeResult<broadcast::Receiver<LedgerEvent>> {
        Ok(self.read()?.events.subscribe())
    }

    /// Every notification emitted so far, for replay by late-attaching
    /// collaborators.
    pub fn events(&self) -> ReputeResult<Vec<LedgerEvent>> {
        Ok(self.read()?.events.log().to_vec())
    }

    /// Summary counters across all stores.
    pub fn stats(&self) -> ReputeResult<LedgerStats> {
        let state = self.read()?;
        Ok(LedgerStats {
            user_count: state.registry.user_count(),
            pending_invitations: state.invitations.pending_count(),
            meeting_count: state.meetings.meeting_count(),
            ratings_recorded: state.ratings.rating_count(),
        })
    }
}

impl Default for ReputeLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary counters for the whole ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub user_count: u64,
    pub pending_invitations: u64,
    pub meeting_count: u64,
    pub ratings_recorded: u64,
}
