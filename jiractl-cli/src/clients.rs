//! # Client Creation
//!
//! Centralized assembly of the authenticated Jira client from configuration
//! and stored credentials, plus the tokio runtime the synchronous command
//! handlers drive it with.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use directories::BaseDirs;
use jiractl_core::{Config, creds};
use jiractl_jira::{Error as JiraError, JiraClient, create_jira_client};
use tokio::runtime::Runtime;

/// The user's home directory, where config and credentials live.
pub fn home_dir() -> Result<PathBuf> {
  let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
  Ok(base_dirs.home_dir().to_path_buf())
}

/// Load the configuration, tolerating a missing or partial file.
pub fn load_config() -> Result<Config> {
  Config::load(&home_dir()?)
}

/// Load the configuration and require a server URL; credential management
/// works without a default project.
pub fn load_with_server() -> Result<Config> {
  let config = load_config()?;
  if config.server.is_empty() {
    bail!(JiraError::Configuration(
      "server is not set; run 'jiractl configure' first".to_string()
    ));
  }
  Ok(config)
}

/// Load the configuration and require the fields every workflow needs.
pub fn load_configured() -> Result<Config> {
  let config = load_config()?;
  if config.server.is_empty() || config.project.is_empty() {
    bail!(JiraError::Configuration(
      "server or project is not set; run 'jiractl configure' first".to_string()
    ));
  }
  Ok(config)
}

/// Creates an authenticated Jira client from stored credentials.
///
/// Missing credentials are a configuration error with a remediation hint,
/// distinct from any transport failure.
pub fn create_client_from_config(config: &Config) -> Result<JiraClient> {
  let home = home_dir()?;

  let Some(credentials) = creds::get_credentials(&home, &config.server)? else {
    bail!(JiraError::Configuration(
      "credentials are not configured; run 'jiractl auth create' first".to_string()
    ));
  };

  let client = create_jira_client(&config.server, &credentials.username, &credentials.token)?;
  Ok(client)
}

/// Creates a tokio runtime and an authenticated Jira client
///
/// This is a convenience function for command handlers that drive the async
/// client with blocking calls, one request at a time.
pub fn create_jira_runtime_and_client(config: &Config) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_client_from_config(config)?;
  Ok((rt, client))
}

#[cfg(test)]
mod tests {
  use jiractl_core::Config;
  use jiractl_test_utils::HomeEnvTestGuard;

  use super::*;

  #[test]
  fn test_load_configured_requires_server_and_project() {
    let guard = HomeEnvTestGuard::new();

    let err = load_configured().unwrap_err();
    assert!(err.to_string().contains("jiractl configure"));

    let config = Config {
      server: "https://example.atlassian.net".to_string(),
      project: "PROJ".to_string(),
      ..Default::default()
    };
    config.save(guard.home_dir()).unwrap();

    let loaded = load_configured().unwrap();
    assert_eq!(loaded.project, "PROJ");
  }

  #[test]
  fn test_missing_credentials_hint_at_auth_create() {
    let guard = HomeEnvTestGuard::new();

    let config = Config {
      server: "https://example.atlassian.net".to_string(),
      project: "PROJ".to_string(),
      ..Default::default()
    };
    config.save(guard.home_dir()).unwrap();

    let err = create_client_from_config(&config).unwrap_err();
    assert!(err.to_string().contains("jiractl auth create"));
  }
}
