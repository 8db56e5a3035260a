//! Event bus for ledger change notifications.

use repute_types::LedgerEvent;
use tokio::sync::broadcast;

/// Broadcast capacity; a subscriber lagging further behind than this
/// observes a lag error rather than stalling the ledger.
const CHANNEL_CAPACITY: usize = 256;

/// Publishes ledger events to live subscribers and retains them in order.
#[derive(Debug)]
pub struct EventBus {
    log: Vec<LedgerEvent>,
    sender: broadcast::Sender<LedgerEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            log: Vec::new(),
            sender,
        }
    }

    /// Append to the log and fan out to subscribers.
    pub fn publish(&mut self, event: LedgerEvent) {
        self.log.push(event.clone());
        // A send error only means no subscriber is currently attached.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.sender.subscribe()
    }

    /// Every event published so far, in emission order.
    pub fn log(&self) -> &[LedgerEvent] {
        &self.log
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repute_types::UserId;

    #[test]
    fn published_events_are_logged_in_order() {
        let mut bus = EventBus::new();

        for index in 0..3u64 {
            bus.publish(LedgerEvent::UserRegistered {
                user: UserId::new(format!("0x{index}")),
                index,
            });
        }

        assert_eq!(bus.log().len(), 3);
        assert_eq!(
            bus.log()[1],
            LedgerEvent::UserRegistered {
                user: UserId::new("0x1"),
                index: 1,
            }
        );
    }

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let mut bus = EventBus::new();
        let mut receiver = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        let event = LedgerEvent::UserRegistered {
            user: UserId::new("0xa11ce"),
            index: 0,
        };
        bus.publish(event.clone());

        assert_eq!(receiver.recv().await.unwrap(), event);
    }
}
