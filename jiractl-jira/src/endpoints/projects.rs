//! # Jira Project Endpoints
//!
//! Project metadata lookup, used to enumerate the issue types available for
//! a project.

use tracing::debug;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{IssueType, Project};

impl JiraClient {
  /// Return the available issue types for a project
  pub async fn get_issue_types(&self, project_key: &str) -> Result<Vec<IssueType>> {
    let url = format!("{}/rest/api/2/project/{}", self.base_url, project_key);
    debug!(project_key, "Fetching Jira project metadata");

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .send()
      .await
      .map_err(Error::transport)?;

    if !response.status().is_success() {
      return Err(Error::from_response(response).await);
    }

    let body = response.text().await.map_err(Error::transport)?;
    let project: Project = serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))?;

    Ok(project.issue_types)
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;
  use crate::error::Error;

  #[tokio::test]
  async fn test_get_issue_types() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project/ABC"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "key": "ABC",
          "name": "Alphabet",
          "issueTypes": [
              { "name": "Bug" },
              { "name": "Task" },
              { "name": "Epic" }
          ]
      })))
      .mount(&mock_server)
      .await;

    let types = client.get_issue_types("ABC").await?;

    let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Bug", "Task", "Epic"]);
    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_types_unknown_project() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project/NOPE"))
      .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
          "errorMessages": ["No project could be found with key 'NOPE'."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let err = client.get_issue_types("NOPE").await.unwrap_err();
    assert!(matches!(err, Error::Remote { status: Some(404), .. }));
    Ok(())
  }
}
