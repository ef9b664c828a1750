//! Summarization backend adapters. Implement SummarizerPort.
//!
//! Provides the reqwest multipart client and a mock for offline use.

pub mod mock_summarizer;
pub mod summarizer_client;

pub use mock_summarizer::MockSummarizer;
pub use summarizer_client::{HttpSummarizer, endpoint_url};
