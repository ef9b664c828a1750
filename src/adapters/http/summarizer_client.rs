//! HTTP adapter for the summarization backend.
//!
//! Uploads the selected file as multipart form data to `POST {base_url}/summarize`
//! and validates the JSON answer against `SummaryResponse` at the boundary.

use crate::domain::{DomainError, SelectedFile, SummaryResponse};
use crate::ports::SummarizerPort;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Multipart field the backend reads the upload from.
pub const FILE_FIELD: &str = "file";

/// Max chars of a backend body quoted in errors and logs.
const BODY_PREVIEW_CHARS: usize = 200;

/// reqwest-based summarizer.
///
/// The endpoint is built once from configuration; nothing about the deployment is hard-coded.
pub struct HttpSummarizer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSummarizer {
    /// Create a new HTTP summarizer.
    ///
    /// # Arguments
    /// * `base_url` - Backend origin (e.g., "http://localhost:5000")
    /// * `summarize_path` - Route on that origin (e.g., "/summarize")
    /// * `timeout` - Whole-request timeout; transcription of long meetings takes minutes
    pub fn new(
        base_url: &str,
        summarize_path: &str,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let endpoint = endpoint_url(base_url, summarize_path)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(file: &SelectedFile) -> Result<Form, DomainError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| {
                DomainError::Validation(format!("Invalid MIME type '{}': {}", file.mime_type, e))
            })?;
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

/// Join base URL and path, accepting only absolute http(s) URLs.
pub fn endpoint_url(base_url: &str, path: &str) -> Result<String, DomainError> {
    let joined = format!(
        "{}/{}",
        base_url.trim().trim_end_matches('/'),
        path.trim().trim_start_matches('/')
    );
    let url = reqwest::Url::parse(&joined)
        .map_err(|e| DomainError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(DomainError::Config(format!(
            "Unsupported URL scheme '{}' in '{}'",
            other, base_url
        ))),
    }
}

/// Error body some backends send with non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Best-effort description of a failed response body. Never fails.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().chars().take(BODY_PREVIEW_CHARS).collect(),
    }
}

/// Validate a 2xx body against the response schema.
pub fn decode_response(body: &[u8]) -> Result<SummaryResponse, DomainError> {
    serde_json::from_slice(body).map_err(|e| {
        let preview: String = String::from_utf8_lossy(body)
            .chars()
            .take(BODY_PREVIEW_CHARS)
            .collect();
        warn!(error = %e, body = %preview, "summary response failed schema validation");
        DomainError::MalformedResponse(e.to_string())
    })
}

#[async_trait::async_trait]
impl SummarizerPort for HttpSummarizer {
    async fn summarize(&self, file: &SelectedFile) -> Result<SummaryResponse, DomainError> {
        info!(
            endpoint = %self.endpoint,
            file = %file.file_name,
            size_bytes = file.bytes.len(),
            "uploading audio to summarization backend"
        );

        let form = Self::build_form(file)?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "summarization request failed");
                DomainError::network(format!("HTTP request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = error_detail(&text);
            warn!(status = %status, detail = %detail, "summarization backend returned error");
            return Err(DomainError::transport_status(
                status.as_u16(),
                format!("HTTP {}: {}", status, detail),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::network(format!("Failed to read response body: {}", e)))?;
        debug!(body_len = body.len(), "received summarization response");

        decode_response(&body)
    }
}
