//! Run configuration, built once at the entry point and passed down.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::League;

/// Desktop browser string sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/56.0.2924.87 Safari/537.36";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where persisted files live and how requests are made.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Use `data_dir` when given, otherwise the platform default.
    pub fn resolve(data_dir: Option<PathBuf>) -> Self {
        Self::new(data_dir.unwrap_or_else(default_data_dir))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path: {data_dir}/httpcache/{LEAGUE}.txt
    pub fn fetch_log_path(&self, league: League) -> PathBuf {
        self.data_dir
            .join("httpcache")
            .join(format!("{}.txt", league.code()))
    }

    /// Path: {data_dir}/httpcache/current.htm, the last fetched payload
    pub fn debug_snapshot_path(&self) -> PathBuf {
        self.data_dir.join("httpcache").join("current.htm")
    }

    /// Path: {data_dir}/db/{LEAGUE}.json
    pub fn season_db_path(&self, league: League) -> PathBuf {
        self.data_dir
            .join("db")
            .join(format!("{}.json", league.code()))
    }
}

/// Path: ~/.config/powerrankings (or the platform's config directory)
pub fn default_data_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .map(|home| home.join(".config"))
            .unwrap_or_else(|| PathBuf::from("."))
    });
    base.join("powerrankings")
}
