//! HTTP client for the remote analysis service.
//!
//! Every scoring operation (similarity, AI detection, stored reports) lives
//! behind this client. It shapes requests as JSON or multipart, applies the
//! pre-flight validation the service expects, and wraps each logical request
//! in a bounded retry loop: connection and timeout failures are re-attempted
//! after a fixed pause, while a received error response is surfaced
//! immediately.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use validator::Validate;

use crate::config::ClientConfig;
use crate::error::AppError;
use crate::models::{
    AiDetectionRequest, AiDetectionResult, ReportList, ServiceErrorBody, SimilarityRequest,
    SimilarityScores,
};

// --- Validation thresholds ---
// The service needs a minimum amount of text for a reliable verdict.
pub const MIN_WORDS: usize = 50;
pub const MIN_CHARACTERS: usize = 100;

/// Extensions the service knows how to extract text from.
const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "pdf", "docx", "doc", "csv", "xlsx"];

/// Pluggable delay between retry attempts, so tests can observe waits
/// without wall-clock sleeping.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Default [`Sleeper`] backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Client for the external text-analysis service.
///
/// Each operation is independent; calls may run concurrently without
/// coordination. Connection pooling is delegated to the underlying
/// `reqwest` client.
pub struct AnalysisClient {
    http: Client,
    config: ClientConfig,
    sleeper: Arc<dyn Sleeper>,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config,
            sleeper: Arc::new(TokioSleeper),
        })
    }

    /// Replace the retry-delay sleeper. Tests use this to record delays
    /// instead of waiting them out.
    #[allow(dead_code)]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Compare two texts via `POST /analyze-similarity`.
    ///
    /// Fails with a validation error if either trimmed text is empty.
    /// Returned scores are 0.0–1.0 fractions.
    pub async fn analyze_similarity(
        &self,
        text1: &str,
        text2: &str,
    ) -> Result<SimilarityScores, AppError> {
        let request = SimilarityRequest {
            text1: text1.trim().to_string(),
            text2: text2.trim().to_string(),
        };
        request.validate()?;

        let url = self.config.endpoint("analyze-similarity");
        self.execute_with_retry("analyze-similarity", || {
            self.request_json(self.http.post(&url).json(&request))
        })
        .await
    }

    /// Submit raw text to `POST /detect-ai`.
    ///
    /// Text below the configured minimums is rejected before any network
    /// traffic, with a message citing the measured and required counts.
    pub async fn detect_ai_text(&self, text: &str) -> Result<AiDetectionResult, AppError> {
        validate_detection_text(text)?;

        let request = AiDetectionRequest {
            text: text.to_string(),
        };
        let url = self.config.endpoint("detect-ai");
        self.execute_with_retry("detect-ai", || {
            self.request_json(self.http.post(&url).json(&request))
        })
        .await
    }

    /// Upload a file to `POST /detect-ai` as multipart form data.
    ///
    /// The content is passed through untouched in a single `file` field
    /// carrying the original filename; length validation happens on the
    /// service side after text extraction.
    pub async fn detect_ai_file(
        &self,
        filename: &str,
        content: &[u8],
    ) -> Result<AiDetectionResult, AppError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::Validation(format!(
                "Unsupported file type \".{}\". Supported types: .txt, .pdf, .docx, .doc, .csv, .xlsx",
                extension
            )));
        }

        // Sniff the MIME type from content; text files carry no magic bytes,
        // so fall back to text/plain.
        let mime = infer::get(content)
            .map(|kind| kind.mime_type())
            .unwrap_or("text/plain");
        info!("Uploading {} ({} bytes, {})", filename, content.len(), mime);

        let url = self.config.endpoint("detect-ai");
        self.execute_with_retry("detect-ai", || {
            self.send_file(&url, filename, content, mime)
        })
        .await
    }

    /// Fetch prior report summaries via `GET /reports`.
    pub async fn fetch_reports(&self) -> Result<ReportList, AppError> {
        let url = self.config.endpoint("reports");
        self.execute_with_retry("reports", || self.request_json(self.http.get(&url)))
            .await
    }

    /// One multipart upload attempt. The form is rebuilt per attempt since
    /// multipart bodies cannot be cloned.
    async fn send_file(
        &self,
        url: &str,
        filename: &str,
        content: &[u8],
        mime: &str,
    ) -> Result<AiDetectionResult, AppError> {
        let part = multipart::Part::bytes(content.to_vec())
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| AppError::Validation(format!("invalid MIME type {}: {}", mime, e)))?;
        let form = multipart::Form::new().part("file", part);
        self.request_json(self.http.post(url).multipart(form)).await
    }

    /// Perform a single request attempt and decode the JSON body.
    ///
    /// A non-success status becomes a terminal `Service` error carrying the
    /// service's own message when the body parses as a structured error.
    async fn request_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AppError> {
        let response = request.send().await.map_err(AppError::from)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ServiceErrorBody>(&body)
                .ok()
                .and_then(ServiceErrorBody::into_message)
                .unwrap_or_else(|| "An error occurred during analysis".to_string());
            return Err(AppError::Service {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::UnexpectedResponse(e.to_string()))
    }

    /// Run `attempt` under the retry policy: up to `max_attempts` tries,
    /// pausing `retry_delay` between transient failures. Each failed attempt
    /// is logged with its number and cause; logging never alters control
    /// flow. Terminal errors propagate immediately.
    pub(crate) async fn execute_with_retry<T, F, Fut>(
        &self,
        operation: &str,
        mut attempt: F,
    ) -> Result<T, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let max_attempts = self.config.max_attempts;
        let mut attempt_no: u32 = 1;

        loop {
            match attempt().await {
                Ok(value) => {
                    if attempt_no > 1 {
                        info!("{} succeeded on attempt {}", operation, attempt_no);
                    }
                    return Ok(value);
                }
                Err(err) if err.is_transient() && attempt_no < max_attempts => {
                    warn!(
                        "{} attempt {}/{} failed: {}; retrying in {:?}",
                        operation, attempt_no, max_attempts, err, self.config.retry_delay
                    );
                    self.sleeper.sleep(self.config.retry_delay).await;
                    attempt_no += 1;
                }
                Err(AppError::Transport(cause)) => {
                    warn!(
                        "{} failed after {} attempts: {}",
                        operation, attempt_no, cause
                    );
                    return Err(AppError::ServiceUnavailable {
                        attempts: attempt_no,
                        last_error: cause,
                    });
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Pre-flight length validation for direct text submissions.
///
/// Both minimums must independently hold; either one failing blocks the
/// call. The character check runs first, matching the service's wording.
pub(crate) fn validate_detection_text(text: &str) -> Result<(), AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "Please provide text to analyze".to_string(),
        ));
    }

    let char_count = trimmed.chars().count();
    let word_count = trimmed.split_whitespace().count();

    if char_count < MIN_CHARACTERS {
        return Err(AppError::Validation(format!(
            "Text is too short. Please provide at least {} characters for accurate detection (current: {} characters)",
            MIN_CHARACTERS, char_count
        )));
    }

    if word_count < MIN_WORDS {
        return Err(AppError::Validation(format!(
            "Text is too short. Please provide at least {} words for accurate detection (current: {} words)",
            MIN_WORDS, word_count
        )));
    }

    Ok(())
}
