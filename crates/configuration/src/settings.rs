use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the journal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: Storage,
    pub analytics: Analytics,
    pub logging: Logging,
}

/// Where the journal's JSON documents live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Storage {
    /// Root directory of the journal's generated data.
    pub data_dir: PathBuf,
    /// The trades index, relative to `data_dir`.
    pub trades_index: PathBuf,
    /// Starting balance, deposits and withdrawals, relative to `data_dir`.
    pub account_config: PathBuf,
    /// Where the computed analytics are written, relative to `data_dir`.
    pub analytics_output: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("index.directory"),
            trades_index: PathBuf::from("trades-index.json"),
            account_config: PathBuf::from("account-config.json"),
            analytics_output: PathBuf::from("assets/charts/analytics-data.json"),
        }
    }
}

/// Parameters for the analytics engine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Analytics {
    /// Subtracted from the mean per-trade percent return in the Sharpe ratio.
    pub risk_free_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// Default filter directive, used when `RUST_LOG` is not set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file here.
    pub directory: Option<PathBuf>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
