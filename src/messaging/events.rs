/// Event types for the assistant wizard
///
/// Events represent things that have happened (past tense).
/// They are handed to whatever reporter the host injected.
use serde::Serialize;

use crate::wizard::{AssistantStep, WizardAction};

/// Recipient phone submitted
pub const GOAL_RECIPIENT_PHONE: &str = "указал_телефон_получателя";
/// Pickup address and sender submitted
pub const GOAL_ADD_SENDER: &str = "add_sender";
/// Own contact phone submitted
pub const GOAL_CONTACT_PHONE: &str = "указал_свой_телефон";

/// Visit parameter recorded together with [`GOAL_ADD_SENDER`]
pub const PARAM_OFFERS: &str = "offers";
pub const PARAM_OFFERS_PICKUP_GIVEN: &str = "указал_откуда_забрать";

/// Wizard events
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WizardEvent {
    /// The wizard now shows this step
    StepEntered { step: AssistantStep, progress: u8 },

    /// The host was asked to perform an action
    ActionRequested {
        step: AssistantStep,
        action: WizardAction,
    },

    /// An analytics goal was reached
    GoalReached { goal: String },
    /// An analytics visit parameter was recorded
    VisitParam { key: String, value: String },
}

impl WizardEvent {
    /// Short name used as a log field
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::StepEntered { .. } => "step_entered",
            WizardEvent::ActionRequested { .. } => "action_requested",
            WizardEvent::GoalReached { .. } => "goal_reached",
            WizardEvent::VisitParam { .. } => "visit_param",
        }
    }
}
