//! Client configuration.
//!
//! The base URL and retry knobs are carried in an explicit [`ClientConfig`]
//! value injected into the client at construction, so tests can point the
//! client anywhere without touching process-global state.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::AppError;

/// Known public deployment of the analysis backend.
pub const DEFAULT_API_URL: &str = "https://plagiarism-ai-detector-backend.onrender.com/api";

/// Environment variable overriding the service base URL.
pub const API_URL_ENV: &str = "ANALYSIS_API_URL";

// The backend runs on a free tier with a slow cold start, so the per-attempt
// timeout is generous and transient failures are retried after a short pause.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);
const RETRY_DELAY: Duration = Duration::from_millis(2000);
const MAX_ATTEMPTS: u32 = 3;

/// Connection and retry settings for [`crate::client::AnalysisClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the analysis service, including any path prefix.
    pub base_url: Url,
    /// Timeout applied to each individual request attempt.
    pub request_timeout: Duration,
    /// Fixed pause between retry attempts.
    pub retry_delay: Duration,
    /// Total attempts per logical request, including the first.
    pub max_attempts: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            request_timeout: REQUEST_TIMEOUT,
            retry_delay: RETRY_DELAY,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from the environment, falling back to the
    /// public deployment when `ANALYSIS_API_URL` is unset.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Ok(raw) = env::var(API_URL_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.base_url = Url::parse(trimmed).map_err(|e| {
                    AppError::Config(format!("invalid {}: {}", API_URL_ENV, e))
                })?;
            }
        }
        Ok(config)
    }

    /// Configuration pointing at an explicit base URL (tests, local backends).
    #[allow(dead_code)]
    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            ..Self::default()
        })
    }

    /// Absolute URL for a service operation.
    ///
    /// `Url::join` would swallow the `/api` prefix for relative paths, so the
    /// endpoint is assembled textually.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
