//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TABLEBOOK_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use std::env;
use tablebook_core::Money;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the banner and the report header
    pub restaurant_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Interactive prompt text
    pub prompt: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            restaurant_name: "Tablebook Restaurant".to_string(),
            currency_symbol: "£".to_string(),
            prompt: "tablebook> ".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables over defaults.
    ///
    /// ## Environment Variables
    /// - `TABLEBOOK_RESTAURANT_NAME`: Override restaurant name
    /// - `TABLEBOOK_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TABLEBOOK_PROMPT`: Override the interactive prompt
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("TABLEBOOK_RESTAURANT_NAME") {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "TABLEBOOK_RESTAURANT_NAME".to_string(),
                ));
            }
            config.restaurant_name = name.to_string();
        }

        if let Some(symbol) = lookup("TABLEBOOK_CURRENCY_SYMBOL") {
            let symbol = symbol.trim();
            if symbol.is_empty() || symbol.chars().any(|c| c.is_ascii_digit()) {
                return Err(ConfigError::InvalidValue(
                    "TABLEBOOK_CURRENCY_SYMBOL".to_string(),
                ));
            }
            config.currency_symbol = symbol.to_string();
        }

        if let Some(prompt) = lookup("TABLEBOOK_PROMPT") {
            config.prompt = prompt;
        }

        Ok(config)
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use tablebook_console::state::ConfigState;
    /// use tablebook_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "£12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.major().abs(),
            amount.minor()
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ConfigState::from_lookup(|_| None).unwrap();
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("TABLEBOOK_RESTAURANT_NAME", "The Village Kitchen"),
            ("TABLEBOOK_CURRENCY_SYMBOL", "€"),
        ]))
        .unwrap();

        assert_eq!(config.restaurant_name, "The Village Kitchen");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.prompt, "tablebook> ");
    }

    #[test]
    fn test_invalid_symbol_rejected() {
        let err = ConfigState::from_lookup(lookup_from(&[("TABLEBOOK_CURRENCY_SYMBOL", "  ")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TABLEBOOK_CURRENCY_SYMBOL");
    }

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(10597)), "£105.97");
        assert_eq!(config.format_currency(Money::from_cents(100)), "£1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "£0.01");
        assert_eq!(config.format_currency(Money::zero()), "£0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-£12.34");
    }
}
