use crate::UserId;
use thiserror::Error;

/// Result alias used across the repute crates.
pub type ReputeResult<T> = Result<T, ReputeError>;

/// Closed set of ledger errors.
///
/// Every variant except `StatePoisoned` is a deterministic precondition
/// violation: retrying with identical arguments reproduces the same error.
/// Collaborators branch on the variant; display text is for operators only.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReputeError {
    #[error("identity {0} is already registered")]
    AlreadyRegistered(UserId),

    #[error("sender {0} is not registered")]
    SenderNotRegistered(UserId),

    #[error("guest {0} is not registered")]
    GuestNotRegistered(UserId),

    #[error("a pending invitation from {sender} to {guest} already exists")]
    InvitationAlreadyExists { sender: UserId, guest: UserId },

    #[error("{guest} has already invited {sender}; only one direction may be pending")]
    ReverseInvitationExists { sender: UserId, guest: UserId },

    #[error("no pending invitation from {sender} to {guest}")]
    InvitationNotFound { sender: UserId, guest: UserId },

    #[error("{a} and {b} have already met; the pair cannot be re-invited")]
    MeetingAlreadyExists { a: UserId, b: UserId },

    #[error("could not find a meeting between {rater} and {ratee}")]
    NoMeetingFound { rater: UserId, ratee: UserId },

    #[error("score {score} is outside the allowed range {min}..={max}")]
    InvalidScore { score: u8, min: u8, max: u8 },

    #[error("{rater} has already rated {ratee} for this meeting")]
    AlreadyRated { rater: UserId, ratee: UserId },

    #[error("user index {index} is out of range; {count} users are registered")]
    IndexOutOfRange { index: u64, count: u64 },

    #[error("invalid score policy: min {min} must be at least 1 and not above max {max}")]
    InvalidScorePolicy { min: u8, max: u8 },

    #[error("ledger state lock poisoned by a panicked writer")]
    StatePoisoned,
}
