//! Configuration for the front desk.
//!
//! Values come from (highest precedence first) `FRONTDESK_` environment
//! variables, the TOML file at `<config dir>/frontdesk/config.toml`, and the
//! defaults below.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::repository::FileLedgerRepository;
use crate::usecase::stats::{DEFAULT_HISTORY_DAYS, DEFAULT_TOP_ROOMS};

const CONFIG_DIR_NAME: &str = "frontdesk";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub report: ReportConfig,
    pub stats: StatsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `ledger.json`. Defaults to `~/.frontdesk`.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Printed at the top of the daily report.
    pub hotel_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Length of the trailing occupancy chart, in days.
    pub history_days: u32,
    /// Number of rooms in the most-booked chart.
    pub top_rooms: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            hotel_name: "HOTEL".to_string(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            history_days: DEFAULT_HISTORY_DAYS,
            top_rooms: DEFAULT_TOP_ROOMS,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result fails
    /// validation.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(file) = config_path.or_else(Self::default_config_path) {
            figment = figment.merge(Toml::file(file));
        }
        let config: Config = figment
            .merge(Env::prefixed("FRONTDESK_").split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// # Errors
    ///
    /// Returns `ConfigValidation` when a value is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.stats.history_days == 0 {
            return Err(Error::ConfigValidation {
                message: "stats.history_days must be at least 1".to_string(),
            });
        }
        if self.stats.top_rooms == 0 {
            return Err(Error::ConfigValidation {
                message: "stats.top_rooms must be at least 1".to_string(),
            });
        }
        if self.report.hotel_name.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "report.hotel_name must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Resolved data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => FileLedgerRepository::default_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.stats.history_days, 7);
        assert_eq!(config.stats.top_rooms, 5);
        assert_eq!(config.report.hotel_name, "HOTEL");
        assert!(config.storage.data_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[storage]\ndata_dir = \"/srv/desk\"\n\n[report]\nhotel_name = \"HOTEL CAUCA\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/srv/desk")));
        assert_eq!(config.report.hotel_name, "HOTEL CAUCA");
        assert_eq!(config.stats.history_days, 7);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.stats, StatsConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_days() {
        let mut config = Config::default();
        config.stats.history_days = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[stats]\nhistory_days = \"many\"\n").unwrap();
        assert!(matches!(
            Config::load_from(Some(path)),
            Err(Error::ConfigLoad(_))
        ));
    }
}
