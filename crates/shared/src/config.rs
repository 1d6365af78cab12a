//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;
use crate::types::Principal;

/// Environment variable prefix, e.g. `BUDGETARY__LEDGER__AUTHORITY`.
const ENV_PREFIX: &str = "BUDGETARY";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Budget ledger configuration.
    pub ledger: LedgerConfig,
}

/// Budget ledger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// The only principal allowed to set or update budgets.
    pub authority: Principal,
    /// Budgets present when the ledger is created.
    #[serde(default)]
    pub initial_budgets: Vec<InitialBudget>,
}

impl LedgerConfig {
    /// Creates a ledger configuration with no initial budgets.
    #[must_use]
    pub fn new(authority: impl Into<Principal>) -> Self {
        Self {
            authority: authority.into(),
            initial_budgets: Vec::new(),
        }
    }
}

/// A budget seeded into the ledger at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InitialBudget {
    /// Department name.
    pub department: String,
    /// Fiscal year.
    pub fiscal_year: i32,
    /// Budgeted amount in currency units.
    pub amount: i64,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default.toml`, `config/{RUN_MODE}.toml`, then `BUDGETARY__*`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or missing required keys.
    pub fn from_toml(source: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
