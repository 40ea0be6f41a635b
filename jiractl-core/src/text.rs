//! Small text helpers for rendering issue lists.

/// Truncate `text` to at most `max` characters, appending `...` when content
/// was cut. Counts characters, not bytes, so multi-byte summaries never get
/// split mid-codepoint.
pub fn truncate(text: &str, max: usize) -> String {
  if text.chars().count() <= max {
    return text.to_string();
  }

  let kept: String = text.chars().take(max.saturating_sub(3)).collect();
  format!("{kept}...")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_short_text_unchanged() {
    assert_eq!(truncate("Fix login bug", 60), "Fix login bug");
  }

  #[test]
  fn test_long_text_truncated_with_ellipsis() {
    let long = "a".repeat(70);
    let truncated = truncate(&long, 60);

    assert_eq!(truncated.chars().count(), 60);
    assert!(truncated.ends_with("..."));
  }

  #[test]
  fn test_exact_length_unchanged() {
    let text = "b".repeat(60);
    assert_eq!(truncate(&text, 60), text);
  }

  #[test]
  fn test_multibyte_safe() {
    let text = "é".repeat(70);
    let truncated = truncate(&text, 10);

    assert_eq!(truncated.chars().count(), 10);
  }
}
