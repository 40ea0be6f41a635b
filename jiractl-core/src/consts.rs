//! Core constants shared across jiractl components.

/// File name of the jiractl configuration file in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".jiractl.toml";

/// Result limit applied to saved queries that do not set one of their own.
pub const DEFAULT_QUERY_LIMIT: u32 = 50;
