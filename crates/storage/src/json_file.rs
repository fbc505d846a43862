use crate::error::StoreError;
use crate::store::{JournalStore, TradesIndex};
use analytics::AnalyticsReport;
use core_types::AccountConfig;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A `JournalStore` backed by the JSON documents under a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    trades_index: PathBuf,
    account_config: PathBuf,
    analytics_output: PathBuf,
}

impl JsonFileStore {
    /// A store using the standard document names under `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_paths(
            data_dir,
            "trades-index.json",
            "account-config.json",
            "assets/charts/analytics-data.json",
        )
    }

    /// A store with explicit document paths. Relative paths are resolved
    /// against `data_dir`; absolute ones are used as-is.
    pub fn with_paths(
        data_dir: impl AsRef<Path>,
        trades_index: impl AsRef<Path>,
        account_config: impl AsRef<Path>,
        analytics_output: impl AsRef<Path>,
    ) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            trades_index: data_dir.join(trades_index),
            account_config: data_dir.join(account_config),
            analytics_output: data_dir.join(analytics_output),
        }
    }

    pub fn analytics_output(&self) -> &Path {
        &self.analytics_output
    }

    /// Reads back the last stored report.
    pub fn load_analytics(&self) -> Result<AnalyticsReport, StoreError> {
        let path = &self.analytics_output;
        let text = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
        serde_json::from_str(&text).map_err(|source| json_error(path, source))
    }
}

impl JournalStore for JsonFileStore {
    fn load_trades_index(&self) -> Result<TradesIndex, StoreError> {
        let path = &self.trades_index;
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::TradesIndexNotFound(path.clone()));
            }
            Err(source) => return Err(io_error(path, source)),
        };

        let index = TradesIndex::from_json(&text).map_err(|source| json_error(path, source))?;
        tracing::debug!(path = %path.display(), trades = index.trades.len(), "Loaded trades index.");
        Ok(index)
    }

    fn load_account_config(&self) -> Result<AccountConfig, StoreError> {
        let path = &self.account_config;
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Account config not found, using defaults.");
                return Ok(AccountConfig::default());
            }
            Err(source) => return Err(io_error(path, source)),
        };

        let account: AccountConfig =
            serde_json::from_str(&text).map_err(|source| json_error(path, source))?;
        if let Err(e) = account.validate() {
            tracing::warn!(path = %path.display(), error = %e, "Account config contains suspicious values.");
        }
        Ok(account)
    }

    fn save_analytics(&self, report: &AnalyticsReport) -> Result<(), StoreError> {
        let path = &self.analytics_output;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
        }

        let json = serde_json::to_string_pretty(report).map_err(|source| json_error(path, source))?;

        // Write beside the target and rename, so readers never see a partial file.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(|source| io_error(&staging, source))?;
        fs::rename(&staging, path).map_err(|source| io_error(path, source))?;

        tracing::info!(path = %path.display(), "Analytics written.");
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io { path: path.to_path_buf(), source }
}

fn json_error(path: &Path, source: serde_json::Error) -> StoreError {
    StoreError::Json { path: path.to_path_buf(), source }
}
