use reqwest::Client;
use tracing::debug;

use crate::consts::USER_AGENT;
use crate::error::{Error, Result};
use crate::models::JiraAuth;

/// Represents a Jira API client
///
/// Wraps one authenticated HTTP session. Authentication is HTTP Basic with
/// the API token as the password; the token is treated as long-lived and is
/// never refreshed.
#[derive(Debug)]
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  ///
  /// Fails with a configuration error naming the missing value when the
  /// server URL, username, or API token is empty; no network call is made.
  pub fn new(base_url: &str, auth: JiraAuth) -> Result<Self> {
    if base_url.trim().is_empty() {
      return Err(Error::Configuration(
        "server URL is not set; run 'jiractl configure' first".to_string(),
      ));
    }
    if auth.username.trim().is_empty() {
      return Err(Error::Configuration(
        "username is not set; run 'jiractl auth create' first".to_string(),
      ));
    }
    if auth.api_token.trim().is_empty() {
      return Err(Error::Configuration(
        "API token is not set; run 'jiractl auth create' first".to_string(),
      ));
    }

    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;

    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    })
  }

  /// The server base URL, without a trailing slash.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Test the Jira connection by fetching the authenticated identity
  ///
  /// Any 2xx response counts as success.
  pub async fn test_connection(&self) -> Result<()> {
    let url = format!("{}/rest/api/2/myself", self.base_url);
    debug!("Testing Jira connection to {url}");

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .send()
      .await
      .map_err(Error::transport)?;

    if response.status().is_success() {
      Ok(())
    } else {
      Err(Error::from_response(response).await)
    }
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  let auth = JiraAuth {
    username: username.trim().to_string(),
    api_token: api_token.trim().to_string(),
  };

  JiraClient::new(base_url, auth)
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::error::Error;

  #[test]
  fn test_client_creation_trims_trailing_slash() {
    let client = create_jira_client("https://test.atlassian.net/", "test_user", "test_token").unwrap();

    assert_eq!(client.base_url(), "https://test.atlassian.net");
    assert_eq!(client.auth.username, "test_user");
    assert_eq!(client.auth.api_token, "test_token");
  }

  #[test]
  fn test_client_creation_names_the_missing_value() {
    let err = create_jira_client("", "user", "token").unwrap_err();
    assert!(matches!(&err, Error::Configuration(msg) if msg.contains("server URL")));

    let err = create_jira_client("https://test.atlassian.net", "", "token").unwrap_err();
    assert!(matches!(&err, Error::Configuration(msg) if msg.contains("username")));

    let err = create_jira_client("https://test.atlassian.net", "user", "  ").unwrap_err();
    assert!(matches!(&err, Error::Configuration(msg) if msg.contains("API token")));
  }

  #[tokio::test]
  async fn test_connection_success() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/myself"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "name": "test_user",
          "displayName": "Test User",
          "emailAddress": "test@example.com"
      })))
      .mount(&mock_server)
      .await;

    client.test_connection().await?;
    Ok(())
  }

  #[tokio::test]
  async fn test_connection_failure_is_remote_error() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "bad_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/myself"))
      .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
          "errorMessages": ["Authentication failed"],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let err = client.test_connection().await.unwrap_err();
    match err {
      Error::Remote { status, detail } => {
        assert_eq!(status, Some(401));
        assert!(detail.contains("Authentication failed"));
      }
      other => panic!("expected Remote error, got {other:?}"),
    }

    Ok(())
  }
}
