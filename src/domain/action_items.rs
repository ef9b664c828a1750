//! Action-item extraction from the backend's bulleted text.

/// Marker that opens an item line.
const ITEM_MARKER: char = '-';

/// Split `text` into action items.
///
/// Lines are split on `\n` and trimmed; only lines starting with `-` are kept, with the
/// marker stripped and the rest trimmed. Other lines (headers, notes, blanks) are dropped.
/// Order follows the source text. Pure: the same input always yields the same output.
pub fn parse_action_items(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(ITEM_MARKER))
        .map(|item| item.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_lines_keep_dash_items_in_order() {
        assert_eq!(parse_action_items("- Do A\nNotes\n- Do B"), vec!["Do A", "Do B"]);
    }

    #[test]
    fn test_single_item() {
        assert_eq!(parse_action_items("- X"), vec!["X"]);
    }

    #[test]
    fn test_indented_and_crlf_lines() {
        let text = "ACTION_ITEMS:\r\n   - John to complete the report by Friday\r\n\t-Sarah to review documentation  \r\n";
        assert_eq!(
            parse_action_items(text),
            vec![
                "John to complete the report by Friday",
                "Sarah to review documentation"
            ]
        );
    }

    #[test]
    fn test_no_items() {
        assert!(parse_action_items("").is_empty());
        assert!(parse_action_items("\n\n  \n").is_empty());
        assert!(parse_action_items("No action items this week.").is_empty());
    }

    #[test]
    fn test_only_leading_marker_is_stripped() {
        assert_eq!(
            parse_action_items("-- follow-up - with legal"),
            vec!["- follow-up - with legal"]
        );
        // Bare marker still counts as an item line.
        assert_eq!(parse_action_items("-\n- real"), vec!["", "real"]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "- Team to schedule follow-up meeting\nnote\n- Ship it";
        assert_eq!(parse_action_items(text), parse_action_items(text));
    }
}
