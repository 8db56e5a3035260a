use crate::UserId;
use serde::{Deserialize, Serialize};

/// Change notifications emitted by the ledger facade.
///
/// Delivered to live subscribers in emission order and retained in the
/// facade's replayable log for late-attaching collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A new participant was admitted at ordinal `index`.
    UserRegistered { user: UserId, index: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_round_trips_through_json() {
        let event = LedgerEvent::UserRegistered {
            user: UserId::new("0xa11ce"),
            index: 3,
        };

        let encoded = serde_json::to_string(&event).unwrap();
        let decoded: LedgerEvent = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, event);
    }
}
