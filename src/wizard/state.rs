/// Wizard data snapshot
///
/// Everything the host shell has collected so far. The sequencer only reads it.
use serde::{Deserialize, Serialize};

/// Phone verification state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// A verification code has been dispatched to the contact phone
    #[serde(default)]
    pub code_sent: bool,
}

/// Collected wizard data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardData {
    pub from_city: Option<String>,
    pub to_city: Option<String>,
    pub recipient_phone: Option<String>,
    pub pickup_address: Option<String>,
    pub pickup_sender_name: Option<String>,
    pub contact_phone: Option<String>,

    /// Offer picked on the offers page; opaque to the wizard
    pub selected_offer: Option<serde_json::Value>,

    pub auth: AuthState,
}

/// A field counts as filled only when present and non-empty
pub(crate) fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Loose JSON check: `null`, `false`, `0` and `""` count as nothing
pub(crate) fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

impl WizardData {
    pub fn has_recipient_phone(&self) -> bool {
        is_set(&self.recipient_phone)
    }

    /// Both pickup address and sender name are filled
    pub fn has_pickup_details(&self) -> bool {
        is_set(&self.pickup_address) && is_set(&self.pickup_sender_name)
    }

    pub fn has_contact_phone(&self) -> bool {
        is_set(&self.contact_phone)
    }
}
