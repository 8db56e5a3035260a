//! Repute Invitations - directory of pending and resolved invitations
//!
//! Pending invitations are keyed by the ordered (sender, guest) pair, so the
//! duplicate and reverse-direction rules are single lookups. Resolving an
//! invitation vacates the pair; resolved invitations are retained in an
//! append-only log.

#![deny(unsafe_code)]

use repute_meetings::MeetingStore;
use repute_registry::IdentityRegistry;
use repute_types::{Invitation, InvitationId, InvitationState, ReputeError, ReputeResult, UserId};
use std::collections::HashMap;

/// Directory of invitations between registered identities.
#[derive(Clone, Debug, Default)]
pub struct InvitationDirectory {
    pending: HashMap<(UserId, UserId), Invitation>,
    resolved: Vec<Invitation>,
}

impl InvitationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pending invitation from `sender` to `guest`.
    ///
    /// Both identities must be registered, the ordered pair must be vacant,
    /// the reverse pair must not be pending (invitations are
    /// symmetric-exclusive), and the pair must not already have met.
    /// All checks pass before any state is written.
    pub fn send_invitation(
        &mut self,
        registry: &IdentityRegistry,
        meetings: &MeetingStore,
        sender: &UserId,
        guest: &UserId,
    ) -> ReputeResult<InvitationId> {
        if !registry.is_registered(sender) {
            return Err(ReputeError::SenderNotRegistered(sender.clone()));
        }
        if !registry.is_registered(guest) {
            return Err(ReputeError::GuestNotRegistered(guest.clone()));
        }
        if self.pending.contains_key(&(sender.clone(), guest.clone())) {
            return Err(ReputeError::InvitationAlreadyExists {
                sender: sender.clone(),
                guest: guest.clone(),
            });
        }
        if self.pending.contains_key(&(guest.clone(), sender.clone())) {
            return Err(ReputeError::ReverseInvitationExists {
                sender: sender.clone(),
                guest: guest.clone(),
            });
        }
        if meetings.has_meeting(sender, guest) {
            return Err(ReputeError::MeetingAlreadyExists {
                a: sender.clone(),
                b: guest.clone(),
            });
        }

        let invitation = Invitation::new(sender.clone(), guest.clone());
        let invitation_id = invitation.invitation_id.clone();
        self.pending
            .insert((sender.clone(), guest.clone()), invitation);

        Ok(invitation_id)
    }

    /// Cancel a pending invitation. Only the original sender may cancel, so
    /// the lookup is keyed by (sender, guest) exactly as sent.
    pub fn cancel_invitation(
        &mut self,
        sender: &UserId,
        guest: &UserId,
    ) -> ReputeResult<Invitation> {
        self.resolve(sender, guest, InvitationState::Cancelled)
    }

    /// Accept a pending invitation on behalf of `guest`. Any identity
    /// without a matching pending invitation gets `InvitationNotFound`.
    pub fn accept_invitation(
        &mut self,
        sender: &UserId,
        guest: &UserId,
    ) -> ReputeResult<Invitation> {
        self.resolve(sender, guest, InvitationState::Accepted)
    }

    fn resolve(
        &mut self,
        sender: &UserId,
        guest: &UserId,
        state: InvitationState,
    ) -> ReputeResult<Invitation> {
        let key = (sender.clone(), guest.clone());
        let Some(mut invitation) = self.pending.remove(&key) else {
            return Err(ReputeError::InvitationNotFound {
                sender: sender.clone(),
                guest: guest.clone(),
            });
        };

        invitation.resolve(state);
        self.resolved.push(invitation.clone());

        Ok(invitation)
    }

    pub fn has_pending(&self, sender: &UserId, guest: &UserId) -> bool {
        self.pending.contains_key(&(sender.clone(), guest.clone()))
    }

    pub fn pending_count(&self) -> u64 {
        self.pending.len() as u64
    }

    /// Resolved invitations in resolution order.
    pub fn resolved(&self) -> &[Invitation] {
        &self.resolved
    }
}
