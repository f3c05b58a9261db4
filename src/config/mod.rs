use chrono::NaiveDate;
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fmt::Write,
    fs,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;

const DEFAULT_DIR_NAME: &str = ".finances";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "FINANCES_HOME";

/// Presentation settings applied when rendering reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_decimal_places")]
    pub decimal_places: u8,
    #[serde(default = "Config::default_date_format")]
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            decimal_places: Self::default_decimal_places(),
            date_format: Self::default_date_format(),
        }
    }
}

impl Config {
    fn default_currency_symbol() -> String {
        "R$".into()
    }

    fn default_decimal_places() -> u8 {
        2
    }

    fn default_date_format() -> String {
        "%d/%m/%Y".into()
    }

    /// Reads a JSON config file, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Loads the config from `default_path()`.
    pub fn from_env() -> Result<Self, LedgerError> {
        Self::load(&Self::default_path())
    }

    /// Returns `$FINANCES_HOME/config.json`, defaulting the directory to `~/.finances`.
    pub fn default_path() -> PathBuf {
        let base = match env::var_os(HOME_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_DIR_NAME),
        };
        base.join(CONFIG_FILE)
    }

    /// Formats a monetary amount as `"{symbol} {value}"` with the configured precision.
    pub fn format_amount(&self, amount: f64) -> String {
        format!(
            "{} {:.*}",
            self.currency_symbol, self.decimal_places as usize, amount
        )
    }

    /// Formats `date` with the configured strftime pattern. A pattern that
    /// cannot render a bare date falls back to `dd/mm/yyyy`.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut rendered = String::new();
        if write!(rendered, "{}", date.format(&self.date_format)).is_ok() {
            return rendered;
        }
        tracing::warn!(format = %self.date_format, "invalid date format, using default");
        date.format(&Self::default_date_format()).to_string()
    }
}
