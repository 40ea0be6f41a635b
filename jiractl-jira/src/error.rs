//! Typed errors for the Jira client.
//!
//! Every operation returns one of these; none are retried. `Remote` carries
//! the response body verbatim when the server supplied one, falling back to
//! the status text otherwise.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  /// Required configuration or credential is missing; no network call was
  /// attempted.
  #[error("Configuration missing: {0}")]
  Configuration(String),

  /// The caller supplied an invalid or missing required field; no network
  /// call was attempted.
  #[error("Invalid input: {0}")]
  Validation(String),

  /// The server responded with a non-success status, or the transport
  /// failed before a status was available.
  #[error("API error{}: {detail}", status_suffix(.status))]
  Remote { status: Option<u16>, detail: String },

  /// A response body could not be interpreted in the expected shape.
  #[error("Failed to decode response: {0}")]
  Decode(String),

  /// A named query or referenced issue does not exist.
  #[error("Not found: {0}")]
  NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

fn status_suffix(status: &Option<u16>) -> String {
  match status {
    Some(code) => format!(" (status {code})"),
    None => String::new(),
  }
}

impl Error {
  /// Wrap a transport-level failure.
  pub(crate) fn transport(err: reqwest::Error) -> Self {
    Self::Remote {
      status: err.status().map(|s| s.as_u16()),
      detail: err.to_string(),
    }
  }

  /// Build a `Remote` error from a non-success response, preferring the
  /// response body over a generic status message.
  pub(crate) async fn from_response(response: reqwest::Response) -> Self {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = if body.trim().is_empty() {
      status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
      body
    };

    Self::Remote {
      status: Some(status.as_u16()),
      detail,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_remote_display_includes_status_and_body() {
    let err = Error::Remote {
      status: Some(400),
      detail: "{\"errorMessages\":[\"Field 'summary' is required\"]}".to_string(),
    };

    let message = err.to_string();
    assert!(message.contains("status 400"));
    assert!(message.contains("summary"));
  }

  #[test]
  fn test_remote_display_without_status() {
    let err = Error::Remote {
      status: None,
      detail: "connection refused".to_string(),
    };

    assert_eq!(err.to_string(), "API error: connection refused");
  }

  #[test]
  fn test_configuration_display() {
    let err = Error::Configuration("server URL is not set; run 'jiractl configure' first".to_string());

    assert!(err.to_string().contains("server URL"));
  }
}
