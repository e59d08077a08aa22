use thiserror::Error;

/// Library errors using thiserror for structured error handling.
///
/// The wizard sequencer itself never fails; these cover the peripheral
/// pieces (hand-off payload, tariff lookup, configuration). The binary
/// chains them with anyhow.

/// Fallback message when the tariff endpoint gives no usable error text
pub const TARIFF_LOAD_FAILED: &str = "Ошибка загрузки тарифов";

#[derive(Error, Debug)]
pub enum HandoffError {
    #[error("Hand-off payload is not a valid URL component")]
    UrlComponent(#[source] std::string::FromUtf8Error),

    #[error("Hand-off payload is not valid base64")]
    Base64(#[from] base64::DecodeError),

    #[error("Hand-off payload is not valid UTF-8")]
    Utf8(#[source] std::string::FromUtf8Error),

    #[error("Hand-off payload is not valid JSON")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TariffError {
    /// Form input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    #[error("Failed to reach tariff endpoint {url}")]
    Network {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    #[error("Tariff endpoint returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse tariff response")]
    InvalidResponse(#[source] std::io::Error),
}

impl TariffError {
    /// Text suitable for showing to the admin user
    pub fn user_message(&self) -> &str {
        match self {
            TariffError::Validation(message) | TariffError::Api { message, .. } => message,
            TariffError::Network { .. } | TariffError::InvalidResponse(_) => TARIFF_LOAD_FAILED,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the platform config directory")]
    NoConfigDir,
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;
