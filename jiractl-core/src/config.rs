//! # Configuration Management
//!
//! Handles the jiractl configuration file (`~/.jiractl.toml`): the Jira
//! server URL, the default project key, per-field issue defaults, and the
//! list of saved JQL queries.
//!
//! Every field is independently optional when loading; workflows that need a
//! particular value check for it themselves. A missing config file loads as
//! the default (empty) configuration rather than an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::consts::CONFIG_FILE_NAME;

/// Per-field defaults applied when creating issues.
///
/// Empty/absent means "unset"; an explicit per-call value always takes
/// precedence over these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueDefaults {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assignee: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub component: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub epic_link: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub issue_type: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub labels: Vec<String>,
}

/// A saved JQL query, looked up by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
  pub name: String,
  pub jql: String,
  /// Maximum number of results; 0 or unset means "use the default limit".
  #[serde(default, skip_serializing_if = "is_zero")]
  pub limit: u32,
}

fn is_zero(limit: &u32) -> bool {
  *limit == 0
}

impl Query {
  /// The result limit to use for this query, falling back to the supplied
  /// default when none is configured.
  pub fn effective_limit(&self, fallback: u32) -> u32 {
    if self.limit == 0 { fallback } else { self.limit }
  }
}

/// The jiractl configuration, loaded from `~/.jiractl.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub server: String,
  #[serde(default)]
  pub project: String,
  #[serde(default)]
  pub issue_defaults: IssueDefaults,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub queries: Vec<Query>,
}

/// Returns the path to the configuration file for the provided home
/// directory.
pub fn config_path(home: &Path) -> PathBuf {
  home.join(CONFIG_FILE_NAME)
}

impl Config {
  /// Load the configuration from the user's home directory.
  ///
  /// A missing file yields the default configuration.
  pub fn load(home: &Path) -> Result<Self> {
    let path = config_path(home);
    if !path.exists() {
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(&path).with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: Self =
      toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))?;

    Ok(config)
  }

  /// Save the configuration to the user's home directory.
  pub fn save(&self, home: &Path) -> Result<()> {
    let path = config_path(home);
    let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
    fs::write(&path, content).with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
  }

  /// Look up a saved query by name.
  pub fn get_query(&self, name: &str) -> Option<&Query> {
    self.queries.iter().find(|q| q.name == name)
  }

  /// Names of all saved queries, in configuration order.
  pub fn query_names(&self) -> Vec<String> {
    self.queries.iter().map(|q| q.name.clone()).collect()
  }
}
