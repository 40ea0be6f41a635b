//! # Credential Management
//!
//! Storage and retrieval of the Jira username/API-token pair, keyed by the
//! Jira server's host in the user's `.netrc` file.
//!
//! Absent credentials are a valid "not configured" state (`Ok(None)`),
//! distinct from an I/O failure while reading the file.

pub mod netrc;

use std::path::Path;

use anyhow::Result;

use crate::creds::netrc::{get_netrc_path, parse_netrc_file, remove_netrc_entry, write_netrc_entry};

/// A Jira username and API token pair.
#[derive(Debug, Clone)]
pub struct Credentials {
  pub username: String,
  pub token: String,
}

/// Reduce a server URL or host string to a bare `.netrc` machine name.
///
/// Strips the scheme and anything after the host, e.g.
/// `https://example.atlassian.net/` becomes `example.atlassian.net`.
pub fn normalize_host(server: &str) -> String {
  let host = server
    .strip_prefix("https://")
    .or_else(|| server.strip_prefix("http://"))
    .unwrap_or(server);
  host.split('/').next().unwrap_or(host).to_string()
}

/// Retrieve credentials for the given host from `.netrc`.
///
/// Returns `Ok(None)` when no entry exists or the entry is incomplete.
pub fn get_credentials(home: &Path, host: &str) -> Result<Option<Credentials>> {
  let path = get_netrc_path(home);
  if !path.exists() {
    return Ok(None);
  }

  parse_netrc_file(&path, &normalize_host(host))
}

/// Store credentials for the given host, replacing any existing entry.
pub fn store_credentials(home: &Path, host: &str, username: &str, token: &str) -> Result<()> {
  let path = get_netrc_path(home);
  write_netrc_entry(&path, &normalize_host(host), username.trim(), token.trim())
}

/// Remove the credentials entry for the given host, if present.
pub fn clear_credentials(home: &Path, host: &str) -> Result<()> {
  let path = get_netrc_path(home);
  if !path.exists() {
    return Ok(());
  }

  remove_netrc_entry(&path, &normalize_host(host))
}

/// Check whether complete credentials exist for the given host.
pub fn has_credentials(home: &Path, host: &str) -> bool {
  matches!(get_credentials(home, host), Ok(Some(_)))
}
