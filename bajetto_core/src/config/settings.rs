use crate::config::{FromProps, prop_or};
use crate::errors::ConfigError;
use crate::format::CurrencyOptions;
use getset::{Getters, Setters};
use std::collections::HashMap;

/// Display defaults chosen by the user: currency and number locale.
#[derive(Clone, Debug, PartialEq, Eq, Getters, Setters)]
#[getset(get = "pub", set = "pub")]
pub struct FormatSettings {
    currency_symbol: String,
    currency_code: String,
    locale: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            locale: "en-US".to_string(),
        }
    }
}

impl FormatSettings {
    /// Currency options seeded with this symbol and locale.
    pub fn currency_options(&self) -> CurrencyOptions {
        CurrencyOptions {
            symbol: self.currency_symbol.clone(),
            locale: self.locale.clone(),
            ..CurrencyOptions::default()
        }
    }
}

impl FromProps for FormatSettings {
    fn from_props(props: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let d = Self::default();
        let settings = Self {
            currency_symbol: prop_or(props, "currency.symbol", d.currency_symbol)?,
            currency_code: prop_or(props, "currency.code", d.currency_code)?,
            locale: prop_or(props, "locale", d.locale)?,
        };
        if settings.currency_code.len() != 3
            || !settings.currency_code.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ConfigError::ValidationFailed {
                name: "currency.code".to_string(),
                message: format!(
                    "Currency code '{}' must be three upper-case letters",
                    settings.currency_code
                ),
            });
        }
        Ok(settings)
    }
}
