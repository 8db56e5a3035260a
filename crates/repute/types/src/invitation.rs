use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvitationId(pub String);

impl InvitationId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for InvitationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a directional invitation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvitationState {
    Pending,
    Accepted,
    Cancelled,
}

/// A directional proposal from `sender` to `guest` to form a meeting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub invitation_id: InvitationId,
    pub sender: UserId,
    pub guest: UserId,
    pub state: InvitationState,
    pub sent_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Invitation {
    /// Create a new pending invitation.
    pub fn new(sender: UserId, guest: UserId) -> Self {
        Self {
            invitation_id: InvitationId::generate(),
            sender,
            guest,
            state: InvitationState::Pending,
            sent_at: Utc::now(),
            resolved_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, InvitationState::Pending)
    }

    /// Move a pending invitation into a terminal state.
    pub fn resolve(&mut self, state: InvitationState) {
        debug_assert!(self.is_pending(), "invitation resolved twice");
        debug_assert!(!matches!(state, InvitationState::Pending));

        self.state = state;
        self.resolved_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_records_terminal_state() {
        let mut invitation = Invitation::new(UserId::new("0xa11ce"), UserId::new("0xb0b"));
        assert!(invitation.is_pending());
        assert!(invitation.resolved_at.is_none());

        invitation.resolve(InvitationState::Accepted);

        assert_eq!(invitation.state, InvitationState::Accepted);
        assert!(invitation.resolved_at.is_some());
    }
}
