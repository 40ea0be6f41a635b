//! Precedence rules for merging per-call values with configured defaults.
//!
//! Every optional issue field follows the same total ordering: an explicit,
//! non-empty call-site value wins; otherwise a non-empty configured default
//! applies; otherwise the field stays unset. Empty strings and empty lists
//! count as "unset", never as sentinel values.

/// Resolve a single optional field.
///
/// Returns the override when it is present and non-empty, the configured
/// default when that is present and non-empty, and `None` otherwise.
pub fn resolve_optional<'a>(override_value: Option<&'a str>, configured: Option<&'a str>) -> Option<&'a str> {
  match override_value {
    Some(value) if !value.is_empty() => Some(value),
    _ => match configured {
      Some(value) if !value.is_empty() => Some(value),
      _ => None,
    },
  }
}

/// Resolve a label list.
///
/// A non-empty override list wins outright; an empty override falls back to
/// the configured labels; both empty yields the empty list.
pub fn resolve_labels(override_labels: &[String], configured: &[String]) -> Vec<String> {
  if !override_labels.is_empty() {
    override_labels.to_vec()
  } else {
    configured.to_vec()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_override_wins_when_present() {
    assert_eq!(
      resolve_optional(Some("bob@example.com"), Some("alice@example.com")),
      Some("bob@example.com")
    );
  }

  #[test]
  fn test_configured_default_applies_when_override_absent() {
    assert_eq!(resolve_optional(None, Some("alice@example.com")), Some("alice@example.com"));
    assert_eq!(resolve_optional(Some(""), Some("alice@example.com")), Some("alice@example.com"));
  }

  #[test]
  fn test_unset_only_when_both_empty() {
    assert_eq!(resolve_optional(None, None), None);
    assert_eq!(resolve_optional(Some(""), Some("")), None);
    assert_eq!(resolve_optional(None, Some("")), None);
  }

  #[test]
  fn test_epic_link_precedence() {
    // Same rule, exercised with epic keys since the create flow relies on it.
    assert_eq!(resolve_optional(Some("ABC-7"), Some("ABC-1")), Some("ABC-7"));
    assert_eq!(resolve_optional(None, Some("ABC-1")), Some("ABC-1"));
    assert_eq!(resolve_optional(None, None), None);
  }

  #[test]
  fn test_label_override_wins() {
    let override_labels = vec!["urgent".to_string()];
    let configured = vec!["backend".to_string(), "infra".to_string()];

    assert_eq!(resolve_labels(&override_labels, &configured), vec!["urgent"]);
  }

  #[test]
  fn test_labels_fall_back_to_configured() {
    let configured = vec!["backend".to_string()];

    assert_eq!(resolve_labels(&[], &configured), vec!["backend"]);
    assert!(resolve_labels(&[], &[]).is_empty());
  }
}
