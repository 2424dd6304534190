use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::error::Result;
use crate::locale::Locale;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("default_amount must be a positive number, got {0:?}")]
    InvalidDefaultAmount(String),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub const LOCALE_ENV: &str = "PAWGUARDIANS_LOCALE";

/// Page settings, read from TOML. Every field is optional.
///
/// ```toml
/// locale = "en"
/// default_amount = "10"
/// simulated_delay_ms = 2000
/// log_filter = "pawguardians=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub locale: Locale,
    pub default_amount: String,
    pub simulated_delay_ms: u64,
    pub log_filter: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Tr,
            default_amount: "10".to_string(),
            simulated_delay_ms: 2000,
            log_filter: "info".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, ConfigError> {
        let config: PageConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if given, otherwise starts from defaults, then applies
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "loading page config");
                let text = std::fs::read_to_string(path).map_err(ConfigError::from)?;
                Self::from_toml_str(&text)?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> std::result::Result<(), ConfigError> {
        if let Some(locale) = lookup(LOCALE_ENV) {
            self.locale = locale.parse()?;
        }
        Ok(())
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        match self.default_amount.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(()),
            _ => Err(ConfigError::InvalidDefaultAmount(self.default_amount.clone())),
        }
    }
}
