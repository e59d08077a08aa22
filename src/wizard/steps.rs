/// Assistant wizard step definitions
///
/// Defines the four steps of the recipient-invite assistant flow and the
/// per-step progress lookup.
use serde::{Deserialize, Serialize};

use super::state::AuthState;

/// Progress label shown while the carriers are being matched
const TEXT_MATCHING: &str = "Уже подбираем транспортные компании...";

/// Progress label for anything not explicitly listed
pub const DEFAULT_PROGRESS_TEXT: &str = "Осталось еще чуть-чуть...";

/// Assistant wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssistantStep {
    /// Recipient phone - who receives the parcel (entry step)
    RecipientPhone,

    /// Pickup address - where the courier collects the parcel and from whom
    PickupAddress,

    /// Contact phone - phone verification by code
    ContactPhone,

    /// Order complete - terminal step
    OrderComplete,
}

impl AssistantStep {
    /// All steps in flow order
    pub const ALL: [AssistantStep; 4] = [
        AssistantStep::RecipientPhone,
        AssistantStep::PickupAddress,
        AssistantStep::ContactPhone,
        AssistantStep::OrderComplete,
    ];

    /// Wire identifier used in URLs and history state
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistantStep::RecipientPhone => "recipientPhone",
            AssistantStep::PickupAddress => "pickupAddress",
            AssistantStep::ContactPhone => "contactPhone",
            AssistantStep::OrderComplete => "orderComplete",
        }
    }

    /// Parse a wire identifier. Anything outside the four identifiers is `None`.
    pub fn from_id(id: &str) -> Option<AssistantStep> {
        Self::ALL.into_iter().find(|step| step.as_str() == id)
    }

    /// Get step title
    pub fn title(&self) -> &'static str {
        match self {
            AssistantStep::RecipientPhone => "Телефон получателя",
            AssistantStep::PickupAddress => "Адрес забора",
            AssistantStep::ContactPhone => "Контактный телефон",
            AssistantStep::OrderComplete => "Заказ оформлен",
        }
    }

    /// Progress percentage for this step
    pub fn progress(&self, auth: &AuthState) -> u8 {
        match self {
            AssistantStep::OrderComplete => 100,
            AssistantStep::ContactPhone if auth.code_sent => 90,
            AssistantStep::ContactPhone => 80,
            AssistantStep::PickupAddress => 60,
            AssistantStep::RecipientPhone => 40,
        }
    }

    /// Status line shown next to the progress bar
    pub fn progress_text(&self) -> &'static str {
        match self {
            AssistantStep::OrderComplete => "Готово!",
            AssistantStep::ContactPhone | AssistantStep::PickupAddress => TEXT_MATCHING,
            AssistantStep::RecipientPhone => DEFAULT_PROGRESS_TEXT,
        }
    }

    /// Check if this is the entry step
    pub fn is_first(&self) -> bool {
        matches!(self, AssistantStep::RecipientPhone)
    }

    /// Check if this is the terminal step
    pub fn is_last(&self) -> bool {
        matches!(self, AssistantStep::OrderComplete)
    }
}

impl Default for AssistantStep {
    fn default() -> Self {
        AssistantStep::RecipientPhone
    }
}

impl std::fmt::Display for AssistantStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssistantStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| format!("unknown wizard step: {s}"))
    }
}

/// Check whether a raw identifier names one of the assistant steps
pub fn is_valid_step(step: &str) -> bool {
    AssistantStep::from_id(step).is_some()
}

/// Progress for a raw step identifier; unknown identifiers yield 0
pub fn get_progress(current_step: &str, auth: &AuthState) -> u8 {
    AssistantStep::from_id(current_step)
        .map(|step| step.progress(auth))
        .unwrap_or(0)
}

/// Progress label for a raw step identifier
pub fn get_progress_text(current_step: &str) -> &'static str {
    AssistantStep::from_id(current_step)
        .map(|step| step.progress_text())
        .unwrap_or(DEFAULT_PROGRESS_TEXT)
}
