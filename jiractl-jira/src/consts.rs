//! Constants for the jiractl Jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("jiractl/", env!("CARGO_PKG_VERSION"));

/// Fixed field set requested from the search endpoint
pub const SEARCH_FIELDS: &str = "key,summary,status,assignee,priority,created,updated";

/// Result limit applied when a search is requested with no limit
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

/// Result cap for the open-epics convenience search
pub const EPIC_SEARCH_LIMIT: u32 = 100;
