use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::report::MIN_COLUMNS;
use crate::stats::ranking::DEFAULT_TOP_N;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the instance, e.g. `https://mastodon.social`.
    pub instance: String,
    pub access_token: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            instance: String::new(),
            access_token: String::new(),
            timeout_ms: 10_000,
            user_agent: format!("tootstats/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub page_size: usize,
    pub page_delay_ms: u64,
    pub max_pages: usize,
    /// Thread lookups kept in flight at once. 1 means strictly sequential.
    pub thread_concurrency: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: 40,
            page_delay_ms: 1000,
            max_pages: 10_000,
            thread_concurrency: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub top: usize,
    /// Only account for this many recent originals; 0 means all of them.
    pub recent: usize,
    pub columns: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP_N,
            recent: 0,
            columns: 80,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub fetch: FetchConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, PathBuf)> {
        let config_path = path.unwrap_or_else(default_config_path);
        let mut config = Self::read(&config_path)?;
        config.apply_env_overrides();
        Ok((config, config_path))
    }

    /// Read a config file; a missing file yields the defaults.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.instance.trim().is_empty() {
            return Err(AppError::config(
                "no instance configured (set server.instance or TOOTSTATS_INSTANCE)",
            ));
        }
        if self.server.access_token.trim().is_empty() {
            return Err(AppError::config(
                "no access token configured (set server.access_token or TOOTSTATS_ACCESS_TOKEN)",
            ));
        }
        if self.fetch.page_size == 0 {
            return Err(AppError::config("fetch.page_size must be at least 1"));
        }
        if self.fetch.max_pages == 0 {
            return Err(AppError::config("fetch.max_pages must be at least 1"));
        }
        if self.report.columns < MIN_COLUMNS {
            return Err(AppError::config(format!(
                "report.columns must be at least {}",
                MIN_COLUMNS
            )));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(instance) = env::var("TOOTSTATS_INSTANCE") {
            if !instance.trim().is_empty() {
                self.server.instance = instance;
            }
        }
        if let Ok(token) = env::var("TOOTSTATS_ACCESS_TOKEN") {
            if !token.trim().is_empty() {
                self.server.access_token = token;
            }
        }
        if let Ok(delay) = env::var("TOOTSTATS_PAGE_DELAY_MS") {
            if let Ok(value) = delay.parse::<u64>() {
                self.fetch.page_delay_ms = value;
            }
        }
        if let Ok(concurrency) = env::var("TOOTSTATS_THREAD_CONCURRENCY") {
            if let Ok(value) = concurrency.parse::<usize>() {
                self.fetch.thread_concurrency = value.max(1);
            }
        }
        self.server.access_token = decode_token(std::mem::take(&mut self.server.access_token));
    }
}

fn default_config_path() -> PathBuf {
    env::var("TOOTSTATS_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tootstats.toml"))
}

fn decode_token(value: String) -> String {
    if value.contains('%') {
        match urlencoding::decode(&value) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => value,
        }
    } else {
        value
    }
}
