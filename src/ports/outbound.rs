//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, SelectedFile, SummaryResponse};

/// Summarization backend. Accepts one audio upload, returns summary, transcript and action items.
#[async_trait::async_trait]
pub trait SummarizerPort: Send + Sync {
    /// Upload `file` and wait for the backend's answer.
    ///
    /// # Errors
    /// * `Transport` - non-2xx status or the request never completed
    /// * `MalformedResponse` - 2xx body that is not a valid `SummaryResponse`
    async fn summarize(&self, file: &SelectedFile) -> Result<SummaryResponse, DomainError>;
}
