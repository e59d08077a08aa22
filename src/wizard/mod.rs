/// Assistant wizard module
///
/// Step sequencing for the recipient-invite booking assistant:
/// recipient phone → offers page → pickup address → contact phone → done.
///
/// ## Architecture
///
/// ```text
/// WizardFlow (host-facing driver, reports events)
///   ├── sequencer (pure: initial step, next transition)
///   ├── AssistantStep (enum of all steps, progress lookup)
///   ├── WizardData / AuthState (snapshot owned by the host)
///   ├── NavigationContext (URL query + history state)
///   └── OffersHandoff (payload for the offers page)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use wizard::{get_initial_step, get_next_step, Transition, WizardAction};
///
/// let step = get_initial_step(&nav, &data);
///
/// match get_next_step(step, &data) {
///     Some(Transition::Step(next)) => { /* render next */ }
///     Some(Transition::Action(WizardAction::SendCode)) => { /* call the SMS API */ }
///     Some(Transition::Action(WizardAction::NavigateToOffers)) => { /* route away */ }
///     None => { /* stay, show validation hints */ }
/// }
/// ```
///
/// ## Steps
///
/// 1. **RecipientPhone** - 40%
/// 2. **PickupAddress** - 60%
/// 3. **ContactPhone** - 80%, 90% once the code is sent
/// 4. **OrderComplete** - 100%, terminal

pub mod steps;
pub mod state;
pub mod navigation;
pub mod sequencer;
pub mod flow;
pub mod handoff;

// Re-export commonly used types
pub use steps::{get_progress, get_progress_text, is_valid_step, AssistantStep, DEFAULT_PROGRESS_TEXT};
pub use state::{AuthState, WizardData};
pub use navigation::{HistoryState, HistoryWizardData, NavigationContext};
pub use sequencer::{get_initial_step, get_next_step, next_step_for_id, Transition, WizardAction};
pub use flow::{FlowOutcome, WizardFlow};
pub use handoff::OffersHandoff;
