/// Event reporting capability
///
/// The wizard never talks to analytics or the page directly; the host hands
/// it a reporter instead.
use std::sync::Arc;

use super::events::WizardEvent;

pub trait EventReporter: Send + Sync {
    fn report(&self, event: WizardEvent);
}

impl<T: EventReporter + ?Sized> EventReporter for Arc<T> {
    fn report(&self, event: WizardEvent) {
        (**self).report(event);
    }
}

/// Writes every event to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl EventReporter for TracingReporter {
    fn report(&self, event: WizardEvent) {
        match &event {
            WizardEvent::StepEntered { step, progress } => {
                tracing::info!(kind = event.name(), %step, progress = *progress, "wizard step entered");
            }
            WizardEvent::ActionRequested { step, action } => {
                tracing::info!(kind = event.name(), %step, %action, "wizard action requested");
            }
            WizardEvent::GoalReached { goal } => {
                tracing::info!(kind = event.name(), goal = goal.as_str(), "analytics goal reached");
            }
            WizardEvent::VisitParam { key, value } => {
                tracing::info!(kind = event.name(), key = key.as_str(), value = value.as_str(), "analytics visit param");
            }
        }
    }
}

/// Discards events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl EventReporter for NullReporter {
    fn report(&self, _event: WizardEvent) {}
}
