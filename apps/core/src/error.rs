use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// The retry policy in `client` only ever re-attempts `Transport` errors;
/// everything else is terminal and surfaced to the caller as-is.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-detected pre-flight rejection. Never sent over the network.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Connection refused, timeout, or no response received. Retryable.
    #[error("Network error: {0}")]
    Transport(String),

    /// Transient failures persisted through every allowed attempt.
    #[error("Analysis service unavailable after {attempts} attempts: {last_error}")]
    ServiceUnavailable { attempts: u32, last_error: String },

    /// The service responded with a non-success status. Retrying a
    /// deterministic rejection wastes time, so this is never re-attempted.
    #[error("Analysis service error (status {status}): {message}")]
    Service { status: u16, message: String },

    /// A response arrived but could not be decoded into the expected shape.
    #[error("Unexpected response from analysis service: {0}")]
    UnexpectedResponse(String),

    /// Configuration-related errors (e.g., a malformed base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether the retry policy may re-attempt after this error.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::UnexpectedResponse(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::Service {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            // No response was received: connection refused, DNS failure,
            // or the per-attempt timeout elapsed.
            AppError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::UnexpectedResponse(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let reasons: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors.iter().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
            })
            .collect();
        AppError::Validation(reasons.join("; "))
    }
}
