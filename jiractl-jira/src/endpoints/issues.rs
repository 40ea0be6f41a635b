//! # Jira Issue Endpoints
//!
//! Issue creation and single-issue lookup. Creation merges configured issue
//! defaults into the request for every field the caller left unset.

use jiractl_core::IssueDefaults;
use jiractl_core::defaults::{resolve_labels, resolve_optional};
use tracing::debug;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{
  CreateIssueOptions, CreatedIssue, Issue, IssueTypeRef, NewIssue, NewIssueFields, ParentRef, ProjectRef, UserRef,
};

impl JiraClient {
  /// Create a new issue
  ///
  /// Assignee, labels, and the epic link follow the defaults precedence:
  /// the per-call option wins, the configured default applies otherwise,
  /// and the field is omitted when both are unset. The epic link is sent as
  /// a parent reference, which is how team-managed projects model epics;
  /// classic projects map it to a custom field instead.
  pub async fn create_issue(
    &self,
    project: &str,
    issue_type: &str,
    summary: &str,
    description: &str,
    options: &CreateIssueOptions,
    defaults: &IssueDefaults,
  ) -> Result<CreatedIssue> {
    if summary.trim().is_empty() {
      return Err(Error::Validation("summary is required".to_string()));
    }

    let assignee = resolve_optional(options.assignee.as_deref(), defaults.assignee.as_deref());
    let labels = resolve_labels(&options.labels, &defaults.labels);
    let epic_link = resolve_optional(options.epic_link.as_deref(), defaults.epic_link.as_deref());

    let request = NewIssue {
      fields: NewIssueFields {
        project: ProjectRef {
          key: project.to_string(),
        },
        issue_type: IssueTypeRef {
          name: issue_type.to_string(),
        },
        summary: summary.to_string(),
        description: description.to_string(),
        assignee: assignee.map(|name| UserRef { name: name.to_string() }),
        labels,
        parent: epic_link.map(|key| ParentRef { key: key.to_string() }),
      },
    };

    let url = format!("{}/rest/api/2/issue", self.base_url);
    debug!(project, issue_type, "Creating Jira issue");

    let response = self
      .client
      .post(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .json(&request)
      .send()
      .await
      .map_err(Error::transport)?;

    if !response.status().is_success() {
      return Err(Error::from_response(response).await);
    }

    let body = response.text().await.map_err(Error::transport)?;
    serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
  }

  /// Get a Jira issue by key
  pub async fn get_issue(&self, issue_key: &str) -> Result<Issue> {
    let url = format!("{}/rest/api/2/issue/{}", self.base_url, issue_key);
    debug!(issue_key, "Fetching Jira issue");

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
    serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use jiractl_core::IssueDefaults;
  use wiremock::matchers::{basic_auth, body_partial_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;
  use crate::error::Error;
  use crate::models::CreateIssueOptions;

  fn defaults_with_epic(epic: &str) -> IssueDefaults {
    IssueDefaults {
      epic_link: Some(epic.to_string()),
      ..Default::default()
    }
  }

  #[tokio::test]
  async fn test_create_issue_applies_configured_epic_link() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .and(basic_auth("test_user", "test_token"))
      .and(body_partial_json(serde_json::json!({
          "fields": {
              "project": { "key": "ABC" },
              "issuetype": { "name": "Bug" },
              "summary": "x",
              "parent": { "key": "ABC-1" }
          }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "id": "10000",
          "key": "ABC-42"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let created = client
      .create_issue(
        "ABC",
        "Bug",
        "x",
        "",
        &CreateIssueOptions::default(),
        &defaults_with_epic("ABC-1"),
      )
      .await?;

    assert_eq!(created.key, "ABC-42");
    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_per_call_epic_wins_over_default() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .and(body_partial_json(serde_json::json!({
          "fields": { "parent": { "key": "ABC-7" } }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "id": "10001",
          "key": "ABC-43"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let options = CreateIssueOptions {
      epic_link: Some("ABC-7".to_string()),
      ..Default::default()
    };
    client
      .create_issue("ABC", "Task", "override epic", "", &options, &defaults_with_epic("ABC-1"))
      .await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_empty_summary_sends_nothing() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    let err = client
      .create_issue(
        "ABC",
        "Bug",
        "  ",
        "",
        &CreateIssueOptions::default(),
        &IssueDefaults::default(),
      )
      .await
      .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_failure_surfaces_body_verbatim() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .respond_with(
        ResponseTemplate::new(400)
          .set_body_string("{\"errorMessages\":[],\"errors\":{\"issuetype\":\"issue type is required\"}}"),
      )
      .mount(&mock_server)
      .await;

    let err = client
      .create_issue(
        "ABC",
        "Nonexistent",
        "x",
        "",
        &CreateIssueOptions::default(),
        &IssueDefaults::default(),
      )
      .await
      .unwrap_err();

    match err {
      Error::Remote { status, detail } => {
        assert_eq!(status, Some(400));
        assert!(detail.contains("issue type is required"));
      }
      other => panic!("expected Remote error, got {other:?}"),
    }

    Ok(())
  }

  #[tokio::test]
  async fn test_created_labels_round_trip_through_get_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .and(body_partial_json(serde_json::json!({
          "fields": { "labels": ["x", "y"] }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "id": "10002",
          "key": "ABC-44"
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/ABC-44"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": "10002",
          "key": "ABC-44",
          "fields": {
              "summary": "labelled",
              "labels": ["y", "x"]
          }
      })))
      .mount(&mock_server)
      .await;

    let options = CreateIssueOptions {
      labels: vec!["x".to_string(), "y".to_string()],
      ..Default::default()
    };
    let created = client
      .create_issue("ABC", "Task", "labelled", "", &options, &IssueDefaults::default())
      .await?;

    let issue = client.get_issue(&created.key).await?;
    let mut labels = issue.fields.labels.clone();
    labels.sort();
    assert_eq!(labels, vec!["x", "y"]);

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_not_found_is_remote_error() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/NONEXISTENT-123"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
          "errorMessages": ["Issue does not exist or you do not have permission to see it."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let err = client.get_issue("NONEXISTENT-123").await.unwrap_err();
    assert!(matches!(err, Error::Remote { status: Some(404), .. }));

    Ok(())
  }
}
