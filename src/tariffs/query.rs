/// Tariff lookup requests
///
/// Built from the transport company admin form. Validation mirrors what the
/// admin page checks before it sends anything.
use regex::Regex;

use crate::error::TariffError;

/// Integration type the tariff endpoint understands
pub const CDEK_API_TYPE: &str = "cdek";

const MSG_WRONG_API_TYPE: &str = "Выберите тип интеграции \"CDEK API\"";
const MSG_MISSING_CREDENTIALS: &str = "Заполните API Account и API Secure Password";
const MSG_MISSING_ROUTE: &str = "Заполните все поля для загрузки тарифов (города и вес)";

/// Where the endpoint takes carrier credentials from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TariffSource {
    /// A saved transport company; the server uses its stored credentials
    Company(u64),

    /// Credentials typed into an unsaved form
    Credentials {
        account: String,
        secure_password: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffQuery {
    pub source: TariffSource,
    pub from_city: String,
    pub to_city: String,
    /// Weight as typed, passed through untouched
    pub weight: String,
}

impl TariffQuery {
    /// Query parameters in the order the endpoint documents them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = match &self.source {
            TariffSource::Company(id) => vec![("transport_company_id", id.to_string())],
            TariffSource::Credentials {
                account,
                secure_password,
            } => vec![
                ("api_account", account.clone()),
                ("api_secure_password", secure_password.clone()),
            ],
        };
        pairs.push(("from_city", self.from_city.clone()));
        pairs.push(("to_city", self.to_city.clone()));
        pairs.push(("weight", self.weight.clone()));
        pairs
    }

    pub fn company_id(&self) -> Option<u64> {
        match self.source {
            TariffSource::Company(id) => Some(id),
            TariffSource::Credentials { .. } => None,
        }
    }
}

/// Values of the transport company admin form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TariffForm {
    pub company_id: Option<u64>,
    pub api_type: String,
    pub api_account: String,
    pub api_secure_password: String,
    pub test_from_city: String,
    pub test_to_city: String,
    pub test_weight: String,
}

impl TariffForm {
    /// Validate the form and build a request.
    ///
    /// Credentials are required even for a saved company, as on the admin page.
    pub fn to_query(&self) -> Result<TariffQuery, TariffError> {
        if self.api_type != CDEK_API_TYPE {
            return Err(TariffError::Validation(MSG_WRONG_API_TYPE.to_string()));
        }

        if self.api_account.is_empty() || self.api_secure_password.is_empty() {
            return Err(TariffError::Validation(MSG_MISSING_CREDENTIALS.to_string()));
        }

        if self.test_from_city.is_empty() || self.test_to_city.is_empty() || self.test_weight.is_empty() {
            return Err(TariffError::Validation(MSG_MISSING_ROUTE.to_string()));
        }

        let source = match self.company_id {
            Some(id) => TariffSource::Company(id),
            None => TariffSource::Credentials {
                account: self.api_account.clone(),
                secure_password: self.api_secure_password.clone(),
            },
        };

        Ok(TariffQuery {
            source,
            from_city: self.test_from_city.clone(),
            to_city: self.test_to_city.clone(),
            weight: self.test_weight.clone(),
        })
    }
}

/// Company id from an admin change-page path; add pages have none
pub fn company_id_from_path(path: &str) -> Option<u64> {
    let re = Regex::new(r"/admin/tariffs/transportcompany/(\d+)/").ok()?;
    re.captures(path)?.get(1)?.as_str().parse().ok()
}
