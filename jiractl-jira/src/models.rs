//! Wire models for the Jira REST API.
//!
//! Response models deserialize the subsets of Jira's JSON that jiractl
//! displays; search responses only carry the fixed field list, so everything
//! beyond the key is optional or defaulted.

use serde::{Deserialize, Serialize};

/// Represents Jira authentication credentials
#[derive(Clone, Debug)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// Represents a Jira issue
#[derive(Debug, Deserialize)]
pub struct Issue {
  pub key: String,
  #[serde(default)]
  pub fields: IssueFields,
}

/// Represents Jira issue fields
#[derive(Debug, Default, Deserialize)]
pub struct IssueFields {
  #[serde(default)]
  pub summary: String,
  pub description: Option<String>,
  pub status: Option<IssueStatus>,
  pub priority: Option<Priority>,
  pub assignee: Option<User>,
  pub reporter: Option<User>,
  #[serde(rename = "issuetype")]
  pub issue_type: Option<IssueType>,
  #[serde(default)]
  pub labels: Vec<String>,
  pub parent: Option<ParentRef>,
}

/// Represents a Jira issue status
#[derive(Debug, Deserialize)]
pub struct IssueStatus {
  pub name: String,
}

/// Represents a Jira issue priority
#[derive(Debug, Deserialize)]
pub struct Priority {
  pub name: String,
}

/// Represents a Jira user
#[derive(Debug, Deserialize)]
pub struct User {
  #[serde(rename = "displayName", default)]
  pub display_name: String,
  pub name: Option<String>,
}

/// Represents a per-project issue type
#[derive(Debug, Clone, Deserialize)]
pub struct IssueType {
  pub name: String,
}

/// A reference to a parent issue (the epic) by key
#[derive(Debug, Serialize, Deserialize)]
pub struct ParentRef {
  pub key: String,
}

/// Project metadata, of which only the issue types are used
#[derive(Debug, Deserialize)]
pub struct Project {
  pub key: String,
  #[serde(rename = "issueTypes", default)]
  pub issue_types: Vec<IssueType>,
}

/// Response shape of the JQL search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchResult {
  #[serde(default)]
  pub issues: Vec<Issue>,
  #[serde(default)]
  pub total: u32,
}

/// The server's confirmation of a created issue
#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
  pub id: Option<String>,
  pub key: String,
}

/// Optional per-call fields for issue creation.
///
/// Anything left unset falls back to the configured issue defaults.
#[derive(Debug, Default)]
pub struct CreateIssueOptions {
  pub assignee: Option<String>,
  pub epic_link: Option<String>,
  pub labels: Vec<String>,
}

/// Issue creation request payload
#[derive(Debug, Serialize)]
pub(crate) struct NewIssue {
  pub fields: NewIssueFields,
}

/// Fields of an issue creation request
#[derive(Debug, Serialize)]
pub(crate) struct NewIssueFields {
  pub project: ProjectRef,
  #[serde(rename = "issuetype")]
  pub issue_type: IssueTypeRef,
  pub summary: String,
  pub description: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<UserRef>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub labels: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parent: Option<ParentRef>,
}

/// A project reference by key for request bodies
#[derive(Debug, Serialize)]
pub(crate) struct ProjectRef {
  pub key: String,
}

/// An issue type reference by name for request bodies
#[derive(Debug, Serialize)]
pub(crate) struct IssueTypeRef {
  pub name: String,
}

/// A user reference by name for request bodies
#[derive(Debug, Serialize)]
pub(crate) struct UserRef {
  pub name: String,
}
