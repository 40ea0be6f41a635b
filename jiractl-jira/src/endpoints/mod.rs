//! # Jira API Endpoints
//!
//! Organized endpoint implementations for different Jira API resource types:
//! issue creation and lookup, JQL search, and project metadata.

pub mod issues;
pub mod projects;
pub mod search;
