/// Navigation context
///
/// Read-only view over the URL query string and the browser history state
/// the host shell was opened with.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::handoff::OffersHandoff;
use super::state::is_truthy;

/// Nested wizard data carried in history state by the offers page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryWizardData {
    pub selected_offer: Option<Value>,
    pub filter_courier_pickup: Option<bool>,
    pub filter_courier_delivery: Option<bool>,
}

/// History state object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryState {
    pub current_step: Option<String>,
    pub selected_offer: Option<Value>,
    pub wizard_data: Option<HistoryWizardData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationContext {
    /// Query parameters; the first occurrence of a key wins
    pub query: BTreeMap<String, String>,
    pub state: HistoryState,
}

impl NavigationContext {
    pub fn new(query: BTreeMap<String, String>, state: HistoryState) -> Self {
        Self { query, state }
    }

    /// Build a context from a URL or a path with query string.
    ///
    /// Accepts `https://host/wizard?step=x`, `/wizard?step=x#frag` or a bare
    /// `?step=x`.
    pub fn from_location(location: &str, state: HistoryState) -> Self {
        let without_fragment = location.split('#').next().unwrap_or_default();
        let mut query = BTreeMap::new();

        if let Some((_, raw_query)) = without_fragment.split_once('?') {
            for (key, value) in url::form_urlencoded::parse(raw_query.as_bytes()) {
                query.entry(key.into_owned()).or_insert_with(|| value.into_owned());
            }
        }

        Self { query, state }
    }

    /// Raw `step` query parameter
    pub fn step_param(&self) -> Option<&str> {
        self.query.get("step").map(String::as_str)
    }

    /// Raw `currentStep` from history state
    pub fn history_step(&self) -> Option<&str> {
        self.state.current_step.as_deref()
    }

    /// Offer from history state, falling back to the nested wizard data.
    ///
    /// `null`, `false`, `0` and `""` count as no offer at either level.
    pub fn selected_offer(&self) -> Option<&Value> {
        let direct = self.state.selected_offer.as_ref().filter(|v| is_truthy(v));
        direct.or_else(|| {
            self.state
                .wizard_data
                .as_ref()
                .and_then(|data| data.selected_offer.as_ref())
                .filter(|v| is_truthy(v))
        })
    }

    /// Hand-off payload from the `data` query parameter.
    ///
    /// A payload that fails to decode is logged and treated as absent.
    pub fn handoff(&self) -> Option<OffersHandoff> {
        let encoded = self.query.get("data")?;
        match OffersHandoff::decode(encoded) {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::warn!("Ignoring undecodable wizard data in URL: {}", e);
                None
            }
        }
    }
}
