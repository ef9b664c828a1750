//! Mock summarizer for running the client without a backend.
//!
//! Returns a canned response after a simulated processing delay.

use crate::domain::{DomainError, SelectedFile, SummaryResponse};
use crate::ports::SummarizerPort;
use std::time::Duration;
use tracing::info;

/// Offline backend. Enabled with `MEETING_SUMMARIZER_MOCK=true` or `--mock`.
pub struct MockSummarizer {
    /// Simulated processing delay in milliseconds.
    delay_ms: u64,
}

impl MockSummarizer {
    /// Create a new mock with default delay (1500ms).
    pub fn new() -> Self {
        Self { delay_ms: 1500 }
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SummarizerPort for MockSummarizer {
    async fn summarize(&self, file: &SelectedFile) -> Result<SummaryResponse, DomainError> {
        info!(
            file = %file.file_name,
            size_bytes = file.bytes.len(),
            "[MOCK] Simulating summarization"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(SummaryResponse {
            summary: format!(
                "[MOCK] Simulated summary of '{}' ({} bytes). A real backend would \
                 return the key decisions and main discussion points here.",
                file.file_name,
                file.bytes.len()
            ),
            transcript: "[MOCK] Speaker 1: Let's get started.\n\
                         [MOCK] Speaker 2: The report is almost done."
                .to_string(),
            action_items: "- [MOCK] Point MEETING_SUMMARIZER_BASE_URL at a real backend\n\
                           - [MOCK] Disable mock mode for production"
                .to_string(),
            meeting_id: None,
        })
    }
}
