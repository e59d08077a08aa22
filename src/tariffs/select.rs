/// Tariff select field model
///
/// What the admin `default_tariff_code` select shows while tariffs load,
/// after they arrive, and when loading fails.
use regex::Regex;

use super::client::Tariff;
use crate::error::TariffError;

pub const LOADING_LABEL: &str = "Загрузка...";
pub const PLACEHOLDER_LABEL: &str = "---------";
pub const NOT_FOUND_LABEL: &str = "Тарифы не найдены";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value; empty for placeholder options
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TariffSelect {
    pub options: Vec<SelectOption>,
    pub disabled: bool,
}

impl TariffSelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the field while a request is in flight
    pub fn begin_loading(&mut self) {
        self.options = vec![SelectOption::placeholder(LOADING_LABEL)];
        self.disabled = true;
    }

    /// Show the outcome of a lookup; the field is usable again afterwards
    pub fn apply(&mut self, result: &Result<Vec<Tariff>, TariffError>) {
        self.options = match result {
            Ok(tariffs) if tariffs.is_empty() => vec![SelectOption::placeholder(NOT_FOUND_LABEL)],
            Ok(tariffs) => std::iter::once(SelectOption::placeholder(PLACEHOLDER_LABEL))
                .chain(tariffs.iter().map(|t| SelectOption {
                    value: t.code.clone(),
                    label: t.label(),
                }))
                .collect(),
            Err(e) => vec![SelectOption::placeholder(e.user_message())],
        };
        self.disabled = false;
    }

    /// Options that carry a tariff code
    pub fn tariff_options(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter().filter(|o| !o.value.is_empty())
    }
}

/// Tariff name from a `"<code> - <name>"` option label.
///
/// Used to fill `default_tariff_name` when a code is picked; placeholder
/// labels yield `None`.
pub fn tariff_name_for_label(label: &str) -> Option<String> {
    if label.is_empty() || label == PLACEHOLDER_LABEL {
        return None;
    }

    let re = Regex::new(r"^\d+\s*-\s*(.+)$").ok()?;
    let caps = re.captures(label)?;
    Some(caps.get(1)?.as_str().to_string())
}
