/// Messaging module for wizard event reporting
///
/// The wizard flow publishes what happened through an injected
/// [`EventReporter`]; hosts pick where events go:
///
/// ```text
/// ┌────────────┐   WizardEvent   ┌───────────────┐
/// │ WizardFlow │ ──────────────> │ EventReporter │
/// └────────────┘                 └───────────────┘
///                                   │    │    │
///                     ┌─────────────┘    │    └──────────────┐
///                     ▼                  ▼                   ▼
///               ┌──────────┐    ┌─────────────────┐   ┌──────────────┐
///               │ EventBus │    │ TracingReporter │   │ NullReporter │
///               └──────────┘    └─────────────────┘   └──────────────┘
///                     │
///                     │ Publishes
///                     ▼
///               ┌─────────────┐
///               │ Subscribers │
///               │ (analytics, │
///               │  UI, ...)   │
///               └─────────────┘
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// let bus = EventBus::new();
/// let (rx, _id) = bus.subscribe();
///
/// let mut flow = WizardFlow::resume(&nav, &data, Box::new(bus.clone()));
/// flow.advance(&data);
///
/// while let Ok(event) = rx.try_recv() {
///     match event {
///         WizardEvent::GoalReached { goal } => { /* send to analytics */ }
///         _ => {}
///     }
/// }
/// ```

pub mod events;
pub mod bus;
pub mod reporter;

// Re-export commonly used types
pub use events::{
    WizardEvent, GOAL_ADD_SENDER, GOAL_CONTACT_PHONE, GOAL_RECIPIENT_PHONE, PARAM_OFFERS,
    PARAM_OFFERS_PICKUP_GIVEN,
};
pub use bus::{EventBus, SubscriberId};
pub use reporter::{EventReporter, NullReporter, TracingReporter};
