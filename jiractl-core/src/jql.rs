//! JQL template expansion for saved queries.

/// Replaces every occurrence of the literal `${project}` placeholder with the
/// given project key.
///
/// No other placeholders are recognized; unresolved `${...}` sequences pass
/// through unchanged. The project key is substituted verbatim, with no
/// escaping.
pub fn expand_jql(template: &str, project: &str) -> String {
  template.replace("${project}", project)
}
