/// Cleans raw recognizer output.
///
/// Line endings are unified to `\n`, whitespace runs inside a line collapse
/// to one space, lines are trimmed, and lines left empty are dropped. The
/// order of the remaining lines is kept.
pub fn normalize_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_line_endings_and_spacing() {
        let normalized = normalize_text("Hello   world\r\n\r\n  Line2  \n");
        assert_eq!(normalized, "Hello world\nLine2");
        assert_eq!(normalized.lines().count(), 2);
    }

    #[test]
    fn test_bare_carriage_returns() {
        assert_eq!(normalize_text("a\rb\r\rc"), "a\nb\nc");
    }

    #[test]
    fn test_tabs_and_form_feed() {
        assert_eq!(normalize_text("col1\t\tcol2\n\x0c"), "col1 col2");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(normalize_text(" \n\t\r\n  "), "");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_line_order_preserved() {
        assert_eq!(normalize_text("third\nfirst\nsecond"), "third\nfirst\nsecond");
    }
}
