//! Display state of the upload-and-render client.

use serde::Serialize;

use super::entities::{FileInfo, MeetingSummary};

/// Where the client is in its lifecycle. Derived from the flags, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Everything a front-end needs to draw the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub selected: Option<FileInfo>,
    pub loading: bool,
    /// User-facing message of the last failure.
    pub error: Option<String>,
    pub result: Option<MeetingSummary>,
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.result.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    pub fn summary(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.summary.as_str())
    }

    pub fn transcript(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.transcript.as_str())
    }

    pub fn action_items(&self) -> &[String] {
        self.result
            .as_ref()
            .map(|r| r.action_items.as_slice())
            .unwrap_or_default()
    }
}
