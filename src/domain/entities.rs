//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here; adapters map into these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::action_items::parse_action_items;

/// Audio file chosen by the user. Opaque bytes plus what the backend needs to name the part.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn info(&self) -> FileInfo {
        FileInfo {
            file_name: self.file_name.clone(),
            mime_type: self.mime_type.clone(),
            size_bytes: self.bytes.len(),
        }
    }
}

// Bytes can be hundreds of MB; keep Debug output to the metadata.
impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.bytes.len())
            .finish()
    }
}

/// Display metadata of the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: usize,
}

/// Body of a successful `POST /summarize`.
///
/// All three text fields are required; a body missing any of them is a malformed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub transcript: String,
    /// Newline-delimited text; item lines start with `-`.
    pub action_items: String,
    /// Row id assigned by backends that store meetings. Optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<i64>,
}

/// Monotonically increasing id of a submission. Used to discard stale results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the UI renders after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingSummary {
    pub request_id: RequestId,
    pub file_name: String,
    pub summary: String,
    pub transcript: String,
    pub action_items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<i64>,
    pub received_at: DateTime<Utc>,
}

impl MeetingSummary {
    /// Build from a validated backend response. Summary and transcript are kept verbatim.
    pub fn from_response(
        request_id: RequestId,
        file_name: impl Into<String>,
        response: SummaryResponse,
    ) -> Self {
        let action_items = parse_action_items(&response.action_items);
        Self {
            request_id,
            file_name: file_name.into(),
            summary: response.summary,
            transcript: response.transcript,
            action_items,
            meeting_id: response.meeting_id,
            received_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_requires_all_text_fields() {
        let missing = r#"{"summary": "s", "transcript": "t"}"#;
        assert!(serde_json::from_str::<SummaryResponse>(missing).is_err());

        let wrong_type = r#"{"summary": "s", "transcript": "t", "action_items": ["- a"]}"#;
        assert!(serde_json::from_str::<SummaryResponse>(wrong_type).is_err());
    }

    #[test]
    fn test_response_accepts_meeting_id_and_extra_fields() {
        let body = r#"{
            "summary": "s",
            "transcript": "t",
            "action_items": "- a",
            "meeting_id": 7,
            "model": "whatever"
        }"#;
        let parsed: SummaryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.meeting_id, Some(7));
        assert_eq!(parsed.action_items, "- a");
    }

    #[test]
    fn test_meeting_summary_keeps_text_verbatim() {
        let response = SummaryResponse {
            summary: "  Budget approved.\n".to_string(),
            transcript: "Alice: hi\nBob: hello".to_string(),
            action_items: "- Send notes\nMisc\n- Book room".to_string(),
            meeting_id: None,
        };

        let result = MeetingSummary::from_response(RequestId(3), "standup.mp3", response);

        assert_eq!(result.summary, "  Budget approved.\n");
        assert_eq!(result.transcript, "Alice: hi\nBob: hello");
        assert_eq!(result.action_items, vec!["Send notes", "Book room"]);
        assert_eq!(result.request_id, RequestId(3));
    }

    #[test]
    fn test_selected_file_debug_omits_bytes() {
        let file = SelectedFile::new("a.mp3", "audio/mpeg", vec![1, 2, 3]);
        let debug = format!("{:?}", file);
        assert!(debug.contains("size_bytes: 3"));
        assert!(!debug.contains("[1, 2, 3]"));
    }
}
