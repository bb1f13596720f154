use std::time::Duration;

use crate::errors::{AppError, AppResult};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: Option<String>,
    timeout_raw: Option<String>,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> Self {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_vars(
            std::env::var("FEEDLOADER_URL").ok(),
            std::env::var("FEEDLOADER_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(feed_url: Option<String>, timeout_raw: Option<String>) -> Self {
        Self {
            feed_url: feed_url.filter(|u| !u.trim().is_empty()),
            timeout_raw,
        }
    }

    /// Configured timeout. A malformed value is only an error once read.
    pub fn timeout(&self) -> AppResult<Duration> {
        let secs = match &self.timeout_raw {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => parse_timeout(raw)?,
        };
        Ok(Duration::from_secs(secs))
    }
}

pub fn parse_timeout(raw: &str) -> AppResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AppError::Config(format!(
            "FEEDLOADER_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
            raw
        ))),
    }
}
