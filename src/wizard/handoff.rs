/// Offers hand-off payload
///
/// When the recipient phone is collected the wizard hands the user over to
/// the offers page, carrying what it knows in the `data` query parameter:
/// JSON, base64 over its UTF-8 bytes, then URL-component encoded.
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::navigation::NavigationContext;
use super::state::WizardData;
use crate::error::HandoffError;

/// Route of the offers page
pub const OFFERS_PATH: &str = "/offers";

/// Role the assistant flow always books as
pub const SENDER_ROLE: &str = "sender";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffersHandoff {
    #[serde(default)]
    pub from_city: Option<String>,
    #[serde(default)]
    pub to_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_phone: Option<String>,
    #[serde(default)]
    pub selected_role: Option<String>,
    #[serde(default)]
    pub invite_recipient: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_courier_pickup: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_courier_delivery: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_offer: Option<Value>,
}

impl OffersHandoff {
    /// Payload for leaving the recipient-phone step.
    ///
    /// Courier filters chosen earlier on the offers page are carried over
    /// from history state so the page reopens with them applied.
    pub fn for_recipient(data: &WizardData, nav: &NavigationContext) -> Self {
        let filters = nav.state.wizard_data.as_ref();
        Self {
            from_city: data.from_city.clone(),
            to_city: data.to_city.clone(),
            recipient_phone: data.recipient_phone.clone(),
            selected_role: Some(SENDER_ROLE.to_string()),
            invite_recipient: true,
            filter_courier_pickup: filters.and_then(|f| f.filter_courier_pickup),
            filter_courier_delivery: filters.and_then(|f| f.filter_courier_delivery),
            selected_offer: None,
        }
    }

    /// Encode as a URL-safe `data` parameter value
    pub fn encode(&self) -> Result<String, HandoffError> {
        let json = serde_json::to_string(self)?;
        let b64 = STANDARD.encode(json.as_bytes());
        Ok(urlencoding::encode(&b64).into_owned())
    }

    /// Decode a `data` parameter value, raw or already URL-decoded
    pub fn decode(param: &str) -> Result<Self, HandoffError> {
        let unescaped = urlencoding::decode(param.trim()).map_err(HandoffError::UrlComponent)?;
        // a '+' that reached us unescaped has been turned into a space by form decoding
        let b64 = unescaped.replace(' ', "+");
        let bytes = STANDARD.decode(b64.as_bytes())?;
        let json = String::from_utf8(bytes).map_err(HandoffError::Utf8)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Fill fields the host has not collected yet from a received payload
    pub fn fill_missing(&self, data: &mut WizardData) {
        fn fill<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
            if slot.is_none() {
                slot.clone_from(value);
            }
        }

        fill(&mut data.from_city, &self.from_city);
        fill(&mut data.to_city, &self.to_city);
        fill(&mut data.recipient_phone, &self.recipient_phone);
        fill(&mut data.selected_offer, &self.selected_offer);
    }

    /// Offers page URL carrying this payload
    pub fn offers_url(&self) -> Result<String, HandoffError> {
        Ok(format!("{}?data={}", OFFERS_PATH, self.encode()?))
    }
}
