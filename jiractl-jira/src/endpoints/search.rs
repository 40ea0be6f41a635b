//! # Jira Search Endpoints
//!
//! JQL search over the v3 search endpoint (the rest of the client speaks v2;
//! the split matches the deployed API surface), plus the open-epics
//! convenience composition.

use tracing::debug;

use crate::client::JiraClient;
use crate::consts::{DEFAULT_SEARCH_LIMIT, EPIC_SEARCH_LIMIT, SEARCH_FIELDS};
use crate::error::{Error, Result};
use crate::models::{Issue, SearchResult};

impl JiraClient {
  /// Search for issues using JQL
  ///
  /// `max_results == 0` is normalized to the default limit. Zero matches
  /// yields an empty list, not an error. The JQL is passed through verbatim
  /// aside from URL escaping.
  pub async fn search_issues(&self, jql: &str, max_results: u32) -> Result<Vec<Issue>> {
    let max_results = if max_results == 0 { DEFAULT_SEARCH_LIMIT } else { max_results };

    let url = format!("{}/rest/api/3/search/jql", self.base_url);
    debug!(jql, max_results, "Searching Jira issues");

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .query(&[
        ("jql", jql),
        ("maxResults", &max_results.to_string()),
        ("fields", SEARCH_FIELDS),
      ])
      .send()
      .await
      .map_err(Error::transport)?;

    if !response.status().is_success() {
      return Err(Error::from_response(response).await);
    }

    let body = response.text().await.map_err(Error::transport)?;
    let result: SearchResult = serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))?;

    Ok(result.issues)
  }

  /// Return open epics in the given project
  ///
  /// A convenience composition over [`search_issues`](Self::search_issues),
  /// not a separate endpoint.
  pub async fn get_epics(&self, project_key: &str) -> Result<Vec<Issue>> {
    let jql =
      format!("project = {project_key} AND issuetype = Epic AND resolution = Unresolved ORDER BY created DESC");
    self.search_issues(&jql, EPIC_SEARCH_LIMIT).await
  }
}
