//! Turns a meeting summary or the view state into printable text.

use crate::domain::{DomainError, MeetingSummary, Phase, ViewState};

/// Markdown-ish report: summary, action items (when any), full transcript.
pub fn render_text(result: &MeetingSummary) -> String {
    let mut out = String::new();

    out.push_str("## Meeting Summary\n\n");
    out.push_str(&result.summary);
    out.push_str("\n\n");

    if !result.action_items.is_empty() {
        out.push_str("## Action Items\n\n");
        for item in &result.action_items {
            out.push_str(&format!("- {}\n", item));
        }
        out.push('\n');
    }

    out.push_str("## Full Transcript\n\n");
    out.push_str(&result.transcript);
    out.push('\n');

    let mut footer = format!(
        "\n---\n*{} | received {}",
        result.file_name,
        result.received_at.format("%Y-%m-%d %H:%M UTC")
    );
    if let Some(id) = result.meeting_id {
        footer.push_str(&format!(" | meeting #{}", id));
    }
    footer.push_str("*\n");
    out.push_str(&footer);

    out
}

pub fn render_json(result: &MeetingSummary) -> Result<String, DomainError> {
    serde_json::to_string_pretty(result)
        .map_err(|e| DomainError::Ui(format!("Failed to serialize summary: {}", e)))
}

/// One-line status for the menu header.
pub fn status_line(view: &ViewState) -> String {
    let file = view
        .selected
        .as_ref()
        .map(|f| format!("{} ({} bytes)", f.file_name, f.size_bytes))
        .unwrap_or_else(|| "no file selected".to_string());

    let phase = match view.phase() {
        Phase::Idle => "idle".to_string(),
        Phase::Loading => "processing".to_string(),
        Phase::Success => format!("{} action item(s) ready", view.action_items().len()),
        Phase::Error => "last submission failed".to_string(),
    };

    format!("[{}] {}", phase, file)
}
