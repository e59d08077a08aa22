/// Wizard flow management
///
/// Holds the step the host shell is showing and applies sequencer results
/// to it. Data stays with the host; every call takes a fresh snapshot.
use super::navigation::NavigationContext;
use super::sequencer::{get_initial_step, get_next_step, Transition, WizardAction};
use super::state::{AuthState, WizardData};
use super::steps::AssistantStep;
use crate::messaging::{
    EventReporter, WizardEvent, GOAL_ADD_SENDER, GOAL_CONTACT_PHONE, GOAL_RECIPIENT_PHONE, PARAM_OFFERS,
    PARAM_OFFERS_PICKUP_GIVEN,
};
use crate::validation::{is_valid_code, is_valid_full_name};

/// Result of asking the flow to move on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The flow now shows this step
    Moved(AssistantStep),

    /// The host must perform the action; the step is unchanged
    ActionRequired(WizardAction),

    /// Preconditions unmet (or terminal step); the step is unchanged
    Stayed,
}

/// Wizard flow manager
pub struct WizardFlow {
    current: AssistantStep,
    reporter: Box<dyn EventReporter>,
}

impl WizardFlow {
    /// Open the wizard on the step resolved from navigation and data
    pub fn resume(
        nav: &NavigationContext,
        data: &WizardData,
        reporter: Box<dyn EventReporter>,
    ) -> Self {
        let step = get_initial_step(nav, data);
        tracing::debug!("Resuming assistant wizard at {}", step);

        let mut flow = Self {
            current: step,
            reporter,
        };
        flow.enter(step, &data.auth);
        flow
    }

    /// Get current step
    pub fn current_step(&self) -> AssistantStep {
        self.current
    }

    /// Progress percentage for the current step
    pub fn progress(&self, auth: &AuthState) -> u8 {
        self.current.progress(auth)
    }

    pub fn progress_text(&self) -> &'static str {
        self.current.progress_text()
    }

    /// Check if the order is complete
    pub fn is_completed(&self) -> bool {
        self.current.is_last()
    }

    /// Submit the current step and apply the result.
    ///
    /// On top of the sequencer, the pickup step needs the sender's first and
    /// last name. A successful submit reports the step's analytics goal.
    pub fn advance(&mut self, data: &WizardData) -> FlowOutcome {
        let from = self.current;
        if from == AssistantStep::PickupAddress
            && !is_valid_full_name(data.pickup_sender_name.as_deref().unwrap_or_default())
        {
            tracing::debug!("Staying on {}: sender name is not a full name", from);
            return FlowOutcome::Stayed;
        }

        let transition = match get_next_step(from, data) {
            Some(transition) => transition,
            None => {
                tracing::debug!("Staying on {}: preconditions not met", from);
                return FlowOutcome::Stayed;
            }
        };

        self.report_submitted(from, transition);

        match transition {
            Transition::Step(next) => {
                self.enter(next, &data.auth);
                FlowOutcome::Moved(next)
            }
            Transition::Action(action) => {
                self.reporter.report(WizardEvent::ActionRequested { step: from, action });
                FlowOutcome::ActionRequired(action)
            }
        }
    }

    /// The host verified `code` against the one sent to the contact phone.
    ///
    /// Only a four-character code on the contact phone step completes the order.
    pub fn code_verified(&mut self, code: &str, auth: &AuthState) -> FlowOutcome {
        if self.current != AssistantStep::ContactPhone {
            tracing::warn!("Ignoring code verification on step {}", self.current);
            return FlowOutcome::Stayed;
        }
        if !is_valid_code(code) {
            tracing::debug!("Ignoring verification code of length {}", code.chars().count());
            return FlowOutcome::Stayed;
        }

        self.enter(AssistantStep::OrderComplete, auth);
        FlowOutcome::Moved(AssistantStep::OrderComplete)
    }

    /// Adopt the step carried in history state after back/forward navigation.
    ///
    /// Invalid or absent values leave the flow untouched.
    pub fn sync_from_history(&mut self, nav: &NavigationContext, auth: &AuthState) -> FlowOutcome {
        match nav.history_step().and_then(AssistantStep::from_id) {
            Some(step) if step != self.current => {
                self.enter(step, auth);
                FlowOutcome::Moved(step)
            }
            _ => FlowOutcome::Stayed,
        }
    }

    /// Jump to a specific step
    pub fn go_to(&mut self, step: AssistantStep, auth: &AuthState) -> FlowOutcome {
        self.enter(step, auth);
        FlowOutcome::Moved(step)
    }

    fn enter(&mut self, step: AssistantStep, auth: &AuthState) {
        self.current = step;
        self.reporter.report(WizardEvent::StepEntered {
            step,
            progress: step.progress(auth),
        });
    }

    fn report_submitted(&self, from: AssistantStep, transition: Transition) {
        let goal = match (from, transition) {
            (AssistantStep::RecipientPhone, Transition::Action(WizardAction::NavigateToOffers)) => {
                GOAL_RECIPIENT_PHONE
            }
            (AssistantStep::PickupAddress, Transition::Step(_)) => GOAL_ADD_SENDER,
            (AssistantStep::ContactPhone, Transition::Action(WizardAction::SendCode)) => GOAL_CONTACT_PHONE,
            _ => return,
        };

        self.reporter.report(WizardEvent::GoalReached {
            goal: goal.to_string(),
        });
        if goal == GOAL_ADD_SENDER {
            self.reporter.report(WizardEvent::VisitParam {
                key: PARAM_OFFERS.to_string(),
                value: PARAM_OFFERS_PICKUP_GIVEN.to_string(),
            });
        }
    }
}

impl std::fmt::Debug for WizardFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardFlow")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
