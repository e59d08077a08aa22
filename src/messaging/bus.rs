use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
/// Event bus for pub/sub messaging
///
/// Lets several consumers (analytics, UI, logs) observe the same wizard.
use std::sync::Arc;

use super::events::WizardEvent;
use super::reporter::EventReporter;

/// Subscriber ID for tracking subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

/// Event subscriber
struct Subscriber {
    id: SubscriberId,
    sender: Sender<WizardEvent>,
}

/// Event bus for broadcasting events to subscribers
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
    next_id: Arc<RwLock<usize>>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events, returns a receiver and subscription ID
    pub fn subscribe(&self) -> (Receiver<WizardEvent>, SubscriberId) {
        let (tx, rx) = unbounded();

        let mut next_id = self.next_id.write();
        let id = SubscriberId(*next_id);
        *next_id += 1;
        drop(next_id);

        self.subscribers.write().push(Subscriber { id, sender: tx });

        (rx, id)
    }

    /// Unsubscribe from events
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.write().retain(|s| s.id != id);
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: WizardEvent) {
        let subscribers = self.subscribers.read();

        for subscriber in subscribers.iter() {
            // If send fails, the subscriber dropped its receiver - that's ok
            let _ = subscriber.sender.try_send(event.clone());
        }
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Clear all subscribers
    pub fn clear(&self) {
        self.subscribers.write().clear();
    }
}

impl EventReporter for EventBus {
    fn report(&self, event: WizardEvent) {
        self.publish(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::AssistantStep;

    fn entered(step: AssistantStep) -> WizardEvent {
        WizardEvent::StepEntered { step, progress: 40 }
    }

    #[test]
    fn test_event_bus_subscribe() {
        let bus = EventBus::new();
        let (_rx, _id) = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn test_event_bus_unsubscribe() {
        let bus = EventBus::new();
        let (_rx, id) = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        bus.unsubscribe(id);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_event_bus_publish() {
        let bus = EventBus::new();
        let (rx, _id) = bus.subscribe();

        bus.publish(entered(AssistantStep::RecipientPhone));

        let received = rx.try_recv().unwrap();
        assert_eq!(received, entered(AssistantStep::RecipientPhone));
    }

    #[test]
    fn test_event_bus_multiple_subscribers() {
        let bus = EventBus::new();
        let (rx1, _id1) = bus.subscribe();
        let (rx2, _id2) = bus.subscribe();

        assert_eq!(bus.subscriber_count(), 2);

        bus.report(WizardEvent::GoalReached {
            goal: "test".to_string(),
        });

        assert!(rx1.try_recv().is_ok());
        assert!(rx2.try_recv().is_ok());
    }

    #[test]
    fn test_publish_after_receiver_dropped() {
        let bus = EventBus::new();
        let (rx, _id) = bus.subscribe();
        drop(rx);

        bus.publish(entered(AssistantStep::PickupAddress));
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn test_event_bus_clear() {
        let bus = EventBus::new();
        let (_rx1, _id1) = bus.subscribe();
        let (_rx2, _id2) = bus.subscribe();

        assert_eq!(bus.subscriber_count(), 2);

        bus.clear();
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_event_bus_clone() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();

        let (_rx, _id) = bus1.subscribe();
        assert_eq!(bus1.subscriber_count(), 1);
        assert_eq!(bus2.subscriber_count(), 1); // Shared state
    }
}
