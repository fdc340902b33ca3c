use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_STATUS_POLL_MS: u64 = 2000;
pub const DEFAULT_GAME_OVER_POLL_MS: u64 = 2000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// How often each poller fetches while the session console is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub status: Duration,
    pub game_over: Duration,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            status: Duration::from_millis(DEFAULT_STATUS_POLL_MS),
            game_over: Duration::from_millis(DEFAULT_GAME_OVER_POLL_MS),
        }
    }
}

/// Where the game service lives and how the coordinator talks to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub polling: PollIntervals,
}

impl ServiceConfig {
    /// Read `HUNT_*` environment variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            base_url: env::var("HUNT_SERVICE_URL")
                .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string()),
            request_timeout: millis("HUNT_REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?,
            polling: PollIntervals {
                status: millis("HUNT_STATUS_POLL_MS", DEFAULT_STATUS_POLL_MS)?,
                game_over: millis("HUNT_GAME_OVER_POLL_MS", DEFAULT_GAME_OVER_POLL_MS)?,
            },
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Positive millisecond duration from the environment.
fn millis(name: &str, default: u64) -> Result<Duration, AppError> {
    let value = match env::var(name) {
        Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
            AppError::config(format!("{name} must be a whole number of milliseconds, got '{raw}'"))
        })?,
        Err(_) => default,
    };
    if value == 0 {
        return Err(AppError::config(format!("{name} must be greater than zero")));
    }
    Ok(Duration::from_millis(value))
}
