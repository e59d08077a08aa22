/// Step sequencing
///
/// Pure functions deciding where the assistant starts and where it goes next.
/// Nothing here holds state; every call reads its inputs and returns.
use serde::{Deserialize, Serialize};

use super::navigation::NavigationContext;
use super::state::WizardData;
use super::steps::AssistantStep;

/// Something the host must do before the flow can continue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardAction {
    /// Leave the wizard for the offers page
    NavigateToOffers,

    /// Dispatch a verification code to the contact phone
    SendCode,
}

impl WizardAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardAction::NavigateToOffers => "navigate_to_offers",
            WizardAction::SendCode => "send_code",
        }
    }
}

impl std::fmt::Display for WizardAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating the active step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Transition {
    /// Move to another wizard step
    Step(AssistantStep),

    /// Ask the host to perform an action; its outcome updates the data and
    /// the step is evaluated again
    Action(WizardAction),
}

/// Resolve the step the wizard opens on.
///
/// First match wins: a valid `step` query parameter, then a valid history
/// `currentStep`, then inference from a selected offer plus collected data,
/// then the entry step.
pub fn get_initial_step(nav: &NavigationContext, data: &WizardData) -> AssistantStep {
    if let Some(step) = nav.step_param().and_then(AssistantStep::from_id) {
        return step;
    }

    if let Some(step) = nav.history_step().and_then(AssistantStep::from_id) {
        return step;
    }

    if nav.selected_offer().is_some() && data.has_recipient_phone() {
        if data.has_pickup_details() {
            return AssistantStep::ContactPhone;
        }
        return AssistantStep::PickupAddress;
    }

    AssistantStep::RecipientPhone
}

/// Evaluate the active step against the collected data.
///
/// `None` means stay on the current step.
pub fn get_next_step(current: AssistantStep, data: &WizardData) -> Option<Transition> {
    match current {
        AssistantStep::RecipientPhone => data
            .has_recipient_phone()
            .then_some(Transition::Action(WizardAction::NavigateToOffers)),

        AssistantStep::PickupAddress => data
            .has_pickup_details()
            .then_some(Transition::Step(AssistantStep::ContactPhone)),

        AssistantStep::ContactPhone => {
            if data.auth.code_sent {
                Some(Transition::Step(AssistantStep::OrderComplete))
            } else if data.has_contact_phone() {
                Some(Transition::Action(WizardAction::SendCode))
            } else {
                None
            }
        }

        AssistantStep::OrderComplete => None,
    }
}

/// `get_next_step` for a raw step identifier; unknown identifiers stay put
pub fn next_step_for_id(current: &str, data: &WizardData) -> Option<Transition> {
    AssistantStep::from_id(current).and_then(|step| get_next_step(step, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::navigation::{HistoryState, HistoryWizardData};
    use crate::wizard::state::AuthState;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn nav(query: &[(&str, &str)], state: HistoryState) -> NavigationContext {
        let query: BTreeMap<String, String> = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        NavigationContext::new(query, state)
    }

    fn with_offer() -> HistoryState {
        HistoryState {
            selected_offer: Some(json!({"company": "cdek", "price": 450})),
            ..Default::default()
        }
    }

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_initial_step_defaults_to_entry() {
        let data = WizardData {
            recipient_phone: None,
            ..Default::default()
        };
        assert_eq!(
            get_initial_step(&nav(&[], HistoryState::default()), &data),
            AssistantStep::RecipientPhone
        );
    }

    #[test]
    fn test_query_step_overrides_everything() {
        let state = HistoryState {
            current_step: text("contactPhone"),
            ..with_offer()
        };
        let data = WizardData {
            recipient_phone: text("+79001234567"),
            ..Default::default()
        };

        assert_eq!(
            get_initial_step(&nav(&[("step", "pickupAddress")], state), &data),
            AssistantStep::PickupAddress
        );
        assert_eq!(
            get_initial_step(&nav(&[("step", "pickupAddress")], HistoryState::default()), &WizardData::default()),
            AssistantStep::PickupAddress
        );
    }

    #[test]
    fn test_invalid_query_step_falls_through_to_history() {
        let state = HistoryState {
            current_step: text("orderComplete"),
            ..Default::default()
        };
        assert_eq!(
            get_initial_step(&nav(&[("step", "payment")], state), &WizardData::default()),
            AssistantStep::OrderComplete
        );
    }

    #[test]
    fn test_history_step_beats_offer_inference() {
        let state = HistoryState {
            current_step: text("recipientPhone"),
            ..with_offer()
        };
        let data = WizardData {
            recipient_phone: text("+79001234567"),
            pickup_address: text("Addr 1"),
            pickup_sender_name: text("Ivan"),
            ..Default::default()
        };
        assert_eq!(
            get_initial_step(&nav(&[], state), &data),
            AssistantStep::RecipientPhone
        );
    }

    #[test]
    fn test_invalid_history_step_is_ignored() {
        let state = HistoryState {
            current_step: text("selectPvz"),
            ..Default::default()
        };
        assert_eq!(
            get_initial_step(&nav(&[], state), &WizardData::default()),
            AssistantStep::RecipientPhone
        );
    }

    #[test]
    fn test_offer_inference() {
        let mut data = WizardData {
            recipient_phone: text("+79001234567"),
            ..Default::default()
        };
        assert_eq!(
            get_initial_step(&nav(&[], with_offer()), &data),
            AssistantStep::PickupAddress
        );

        data.pickup_address = text("Addr 1");
        assert_eq!(
            get_initial_step(&nav(&[], with_offer()), &data),
            AssistantStep::PickupAddress
        );

        data.pickup_sender_name = text("Ivan");
        assert_eq!(
            get_initial_step(&nav(&[], with_offer()), &data),
            AssistantStep::ContactPhone
        );
    }

    #[test]
    fn test_offer_inference_from_nested_wizard_data() {
        let state = HistoryState {
            wizard_data: Some(HistoryWizardData {
                selected_offer: Some(json!({"id": 3})),
                ..Default::default()
            }),
            ..Default::default()
        };
        let data = WizardData {
            recipient_phone: text("+79001234567"),
            ..Default::default()
        };
        assert_eq!(
            get_initial_step(&nav(&[], state), &data),
            AssistantStep::PickupAddress
        );
    }

    #[test]
    fn test_falsy_offer_does_not_trigger_inference() {
        let data = WizardData {
            recipient_phone: text("+79001234567"),
            ..Default::default()
        };
        for falsy in [json!(false), json!(""), json!(0)] {
            let state = HistoryState {
                selected_offer: Some(falsy),
                ..Default::default()
            };
            assert_eq!(
                get_initial_step(&nav(&[], state), &data),
                AssistantStep::RecipientPhone
            );
        }
    }

    #[test]
    fn test_offer_without_recipient_phone_is_entry() {
        assert_eq!(
            get_initial_step(&nav(&[], with_offer()), &WizardData::default()),
            AssistantStep::RecipientPhone
        );
    }

    #[test]
    fn test_recipient_phone_transitions() {
        let data = WizardData {
            recipient_phone: text("+79001234567"),
            ..Default::default()
        };
        assert_eq!(
            get_next_step(AssistantStep::RecipientPhone, &data),
            Some(Transition::Action(WizardAction::NavigateToOffers))
        );
        assert_eq!(get_next_step(AssistantStep::RecipientPhone, &WizardData::default()), None);
    }

    #[test]
    fn test_pickup_address_transitions() {
        let data = WizardData {
            pickup_address: text("Addr 1"),
            pickup_sender_name: text("Ivan"),
            ..Default::default()
        };
        assert_eq!(
            get_next_step(AssistantStep::PickupAddress, &data),
            Some(Transition::Step(AssistantStep::ContactPhone))
        );

        let missing_name = WizardData {
            pickup_address: text("Addr 1"),
            ..Default::default()
        };
        assert_eq!(get_next_step(AssistantStep::PickupAddress, &missing_name), None);
    }

    #[test]
    fn test_contact_phone_transitions() {
        let mut data = WizardData {
            contact_phone: text("+7900"),
            auth: AuthState { code_sent: false },
            ..Default::default()
        };
        assert_eq!(
            get_next_step(AssistantStep::ContactPhone, &data),
            Some(Transition::Action(WizardAction::SendCode))
        );

        data.auth.code_sent = true;
        assert_eq!(
            get_next_step(AssistantStep::ContactPhone, &data),
            Some(Transition::Step(AssistantStep::OrderComplete))
        );

        // a sent code is enough even if the phone field was cleared
        data.contact_phone = None;
        assert_eq!(
            get_next_step(AssistantStep::ContactPhone, &data),
            Some(Transition::Step(AssistantStep::OrderComplete))
        );

        assert_eq!(get_next_step(AssistantStep::ContactPhone, &WizardData::default()), None);
    }

    #[test]
    fn test_order_complete_is_terminal() {
        let full = WizardData {
            recipient_phone: text("+79001234567"),
            pickup_address: text("Addr 1"),
            pickup_sender_name: text("Ivan"),
            contact_phone: text("+7900"),
            selected_offer: Some(json!({"id": 1})),
            auth: AuthState { code_sent: true },
            ..Default::default()
        };
        assert_eq!(get_next_step(AssistantStep::OrderComplete, &full), None);
        assert_eq!(get_next_step(AssistantStep::OrderComplete, &WizardData::default()), None);
    }

    #[test]
    fn test_next_step_is_idempotent() {
        let data = WizardData {
            contact_phone: text("+7900"),
            ..Default::default()
        };
        let first = get_next_step(AssistantStep::ContactPhone, &data);
        let second = get_next_step(AssistantStep::ContactPhone, &data);
        assert_eq!(first, second);
    }

    #[test]
    fn test_next_step_for_unknown_id() {
        let data = WizardData {
            recipient_phone: text("+79001234567"),
            ..Default::default()
        };
        assert_eq!(next_step_for_id("offers", &data), None);
        assert_eq!(
            next_step_for_id("recipientPhone", &data),
            Some(Transition::Action(WizardAction::NavigateToOffers))
        );
    }

    #[test]
    fn test_transition_serialization() {
        let step = serde_json::to_value(Transition::Step(AssistantStep::ContactPhone)).unwrap();
        assert_eq!(step, json!({"type": "step", "value": "contactPhone"}));

        let action = serde_json::to_value(Transition::Action(WizardAction::SendCode)).unwrap();
        assert_eq!(action, json!({"type": "action", "value": "send_code"}));
    }
}
