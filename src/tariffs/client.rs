use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::query::TariffQuery;
use crate::error::{TariffError, TARIFF_LOAD_FAILED};

/// Tariff list endpoint, relative to the backend base URL
pub const TARIFFS_PATH: &str = "/api/tariffs/get-tariffs/";

/// Carrier tariff as listed by the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    /// Passed through to the option value as sent; numbers and strings both occur
    #[serde(deserialize_with = "code_from_json")]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

/// Render a tariff code the way it would be written into the option value
fn code_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(code) => code,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl Tariff {
    /// Option label shown in the select field
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

/// Successful response body
#[derive(Debug, Deserialize)]
struct TariffResponse {
    #[serde(default)]
    tariffs: Vec<Tariff>,
}

/// Error response body
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Blocking client for the tariff endpoint
#[derive(Clone)]
pub struct TariffClient {
    base_url: String,
    agent: ureq::Agent,
}

impl TariffClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(&format!("parcel-wizard/{}", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    /// Full endpoint URL
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TARIFFS_PATH)
    }

    /// Fetch tariffs for a route
    ///
    /// An empty list is a valid answer. Failure bodies of the form
    /// `{"error": "..."}` surface their message in `TariffError::Api`.
    pub fn fetch(&self, query: &TariffQuery) -> Result<Vec<Tariff>, TariffError> {
        let url = self.endpoint();
        tracing::info!(
            "[tariffs] Loading tariffs {} -> {} ({} kg)",
            query.from_city,
            query.to_city,
            query.weight
        );

        let mut request = self.agent.get(&url);
        for (key, value) in query.query_pairs() {
            request = request.query(key, &value);
        }

        let response = match request.call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, resp)) => {
                let message = resp
                    .into_json::<ErrorResponse>()
                    .ok()
                    .and_then(|body| body.error)
                    .filter(|msg| !msg.is_empty())
                    .unwrap_or_else(|| TARIFF_LOAD_FAILED.to_string());
                tracing::error!("[tariffs] Endpoint returned {}: {}", status, message);
                return Err(TariffError::Api { status, message });
            }
            Err(ureq::Error::Transport(transport)) => {
                tracing::error!("[tariffs] Network error: {}", transport);
                return Err(TariffError::Network {
                    url,
                    source: Box::new(transport),
                });
            }
        };

        let body: TariffResponse = response
            .into_json()
            .map_err(TariffError::InvalidResponse)?;

        tracing::info!("[tariffs] Loaded {} tariffs", body.tariffs.len());
        Ok(body.tariffs)
    }
}

impl std::fmt::Debug for TariffClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TariffClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = TariffClient::new("http://localhost:8000/", Duration::from_secs(5));
        assert_eq!(client.endpoint(), "http://localhost:8000/api/tariffs/get-tariffs/");
    }

    #[test]
    fn test_tariff_label() {
        let tariff = Tariff {
            code: "136".to_string(),
            name: "Посылка склад-склад".to_string(),
        };
        assert_eq!(tariff.label(), "136 - Посылка склад-склад");
    }

    #[test]
    fn test_tariff_codes_accept_numbers_and_strings() {
        let body: TariffResponse = serde_json::from_str(
            r#"{"tariffs":[{"code":136,"name":"Склад-склад"},{"code":"137","name":"Склад-дверь"},{"code":null,"name":"Без кода"}]}"#,
        )
        .unwrap();
        let codes: Vec<&str> = body.tariffs.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, vec!["136", "137", ""]);
        assert_eq!(body.tariffs[1].label(), "137 - Склад-дверь");
    }

    #[test]
    fn test_response_without_tariffs_is_empty() {
        let body: TariffResponse = serde_json::from_str("{}").unwrap();
        assert!(body.tariffs.is_empty());
    }
}
