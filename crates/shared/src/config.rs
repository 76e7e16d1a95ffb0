//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report generation configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report generation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// ISO 4217 currency code stamped on every statement.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Treat an entirely absent revenue category as an error instead of zero.
    #[serde(default)]
    pub strict: bool,
    /// Category assigned to unmapped account labels; `None` skips the row
    /// and records a warning instead.
    #[serde(default)]
    pub fallback_category: Option<String>,
    /// Account label patterns identifying cash accounts.
    #[serde(default = "default_cash_accounts")]
    pub cash_accounts: Vec<String>,
    /// Path to a JSON file with account classification rules; the built-in
    /// ruleset is used when absent.
    #[serde(default)]
    pub rules_file: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_cash_accounts() -> Vec<String> {
    vec!["cash".to_string()]
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            strict: false,
            fallback_category: None,
            cash_accounts: default_cash_accounts(),
            rules_file: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINSTAT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.currency, "USD");
        assert!(!config.strict);
        assert!(config.fallback_category.is_none());
        assert_eq!(config.cash_accounts, vec!["cash".to_string()]);
        assert!(config.rules_file.is_none());
    }

    #[test]
    fn test_app_config_default_has_report_section() {
        let config = AppConfig::default();
        assert_eq!(config.report.currency, "USD");
    }
}
