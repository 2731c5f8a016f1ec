//! Client configuration and persisted user preferences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ApiResult;
use crate::money::Currency;

/// Earliest year the month picker offers.
pub const MIN_YEAR: i32 = 2025;

pub const THEME_KEY: &str = "theme";
pub const CURRENCY_KEY: &str = "currency";
pub const API_BASE_KEY: &str = "api_base";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Key/value storage for preferences (browser local storage in the app).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub currency: Currency,
}

impl Preferences {
    /// Read saved preferences; missing or unrecognised values fall back to
    /// the defaults.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let theme = store
            .get(THEME_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let currency = store
            .get(CURRENCY_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self { theme, currency }
    }

    pub fn save(&self, store: &impl PreferenceStore) {
        store.set(THEME_KEY, self.theme.as_str());
        store.set(CURRENCY_KEY, self.currency.code());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: Url,
    pub min_year: i32,
}

impl ClientConfig {
    /// Talk to the backend that served the page unless an `api_base`
    /// preference points elsewhere.
    pub fn resolve(origin: &str, store: &impl PreferenceStore) -> ApiResult<Self> {
        let base = store
            .get(API_BASE_KEY)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| origin.to_string());
        Ok(Self {
            api_base: Url::parse(base.trim())?,
            min_year: MIN_YEAR,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_defaults_when_store_empty() {
        let prefs = Preferences::load(&MemoryStore::default());
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.currency, Currency::USD);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::default();
        Preferences {
            theme: Theme::Dark,
            currency: Currency::EUR,
        }
        .save(&store);
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.currency, Currency::EUR);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "solarized");
        store.set(CURRENCY_KEY, "DOGE");
        assert_eq!(Preferences::load(&store), Preferences::default());
    }

    #[test]
    fn test_api_base_override() {
        let store = MemoryStore::default();
        let config = ClientConfig::resolve("http://localhost:8080", &store).unwrap();
        assert_eq!(config.api_base.as_str(), "http://localhost:8080/");
        assert_eq!(config.min_year, MIN_YEAR);

        store.set(API_BASE_KEY, "https://budget.example.com");
        let config = ClientConfig::resolve("http://localhost:8080", &store).unwrap();
        assert_eq!(config.api_base.host_str(), Some("budget.example.com"));
    }

    #[test]
    fn test_bad_origin_is_an_error() {
        assert!(ClientConfig::resolve("not a url", &MemoryStore::default()).is_err());
    }
}
