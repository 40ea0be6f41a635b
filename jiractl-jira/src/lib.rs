//! # Jira API Client
//!
//! Provides Jira REST API integration for issue creation, JQL search, project
//! metadata, and connectivity checks, wrapping one authenticated HTTP session
//! behind issue-centric operations for jiractl workflows.

mod client;
mod consts;
mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export the error taxonomy
pub use error::{Error, Result};
// Re-export models
pub use models::{CreateIssueOptions, CreatedIssue, Issue, IssueFields, IssueType, JiraAuth, SearchResult};
