//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ledger derivation settings.
    #[serde(default)]
    pub ledger: LedgerSettings,
    /// Derived-books cache settings.
    #[serde(default)]
    pub cache: CacheSettings,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Ledger derivation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerSettings {
    /// Year used to date synthetic opening-balance postings.
    ///
    /// `None` means the current calendar year.
    #[serde(default)]
    pub fiscal_year: Option<i32>,
    /// Extra account-name substrings that mark an account as cash-like.
    #[serde(default)]
    pub extra_cash_keywords: Vec<String>,
    /// Extra account types that mark an account as cash-like.
    #[serde(default)]
    pub extra_cash_types: Vec<String>,
}

/// Derived-books cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Maximum number of derived snapshots kept.
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,
    /// Time-to-live for a cached snapshot, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

fn default_cache_capacity() -> u64 {
    16
}

fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "ledgerly=info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `LEDGERLY__*` variables
    /// (`LEDGERLY__LEDGER__FISCAL_YEAR=2024`). List settings accept
    /// comma-separated values.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("LEDGERLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("ledger.extra_cash_keywords")
                    .with_list_parse_key("ledger.extra_cash_types"),
            )
            .build()?;

        config.try_deserialize()
    }
}
