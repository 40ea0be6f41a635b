//! # Jiractl Core Library
//!
//! Shared building blocks for the jiractl command-line tool: the TOML
//! configuration model, `.netrc`-backed credential storage, the defaults
//! resolver applied at issue creation, JQL template expansion, and the
//! terminal output helpers used by the CLI.

pub mod config;
pub mod consts;
pub mod creds;
pub mod defaults;
pub mod jql;
pub mod output;
pub mod prompts;
pub mod text;

// Re-export main types for the CLI and the Jira client
pub use config::{Config, IssueDefaults, Query, config_path};
pub use creds::Credentials;
pub use defaults::{resolve_labels, resolve_optional};
pub use jql::expand_jql;
pub use output::{print_error, print_info, print_success, print_warning};
