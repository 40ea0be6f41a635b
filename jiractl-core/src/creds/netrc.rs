//! Helpers for reading and writing credentials stored in `.netrc` files.
//!
//! The parser supports both single-line (`machine host login user password
//! pass`) and multi-line entries. Serialization always writes the multi-line
//! form and tightens file permissions to `600` on Unix.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// If the target machine is not present or has missing `login`/`password`
/// values, `Ok(None)` is returned.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let file = File::open(path).context("Failed to open .netrc file")?;
  let reader = BufReader::new(file);

  let mut current_machine = String::new();
  let mut username = String::new();
  let mut token = String::new();

  for line in reader.lines() {
    let line = line.context("Failed to read line from .netrc")?;
    let parts: Vec<&str> = line.split_whitespace().collect();

    for i in 0..parts.len() {
      match parts[i] {
        "machine" if i + 1 < parts.len() => {
          // Finish the previous machine before starting a new one
          if current_machine == target_machine && !username.is_empty() && !token.is_empty() {
            return Ok(Some(Credentials { username, token }));
          }
          username = String::new();
          token = String::new();
          current_machine = parts[i + 1].to_string();
        }
        "login" if i + 1 < parts.len() => {
          username = parts[i + 1].to_string();
        }
        "password" if i + 1 < parts.len() => {
          token = parts[i + 1].to_string();
        }
        _ => {}
      }
    }
  }

  // Check the last machine in the file
  if current_machine == target_machine && !username.is_empty() && !token.is_empty() {
    return Ok(Some(Credentials { username, token }));
  }

  Ok(None)
}

/// Writes or updates a `.netrc` entry for the given machine.
///
/// Existing entries for the machine are replaced; otherwise a new entry is
/// appended.
pub fn write_netrc_entry(path: &Path, machine: &str, username: &str, token: &str) -> Result<()> {
  let mut content = if path.exists() {
    std::fs::read_to_string(path).context("Failed to read existing .netrc file")?
  } else {
    String::new()
  };

  if content.contains(&format!("machine {machine}")) {
    content = strip_machine_entry(&content, machine);
  }

  if !content.is_empty() && !content.ends_with('\n') {
    content.push('\n');
  }
  content.push_str(&format!("machine {machine}\n  login {username}\n  password {token}\n"));

  let mut file = File::create(path).context("Failed to write .netrc file")?;
  file.write_all(content.as_bytes()).context("Failed to write .netrc file")?;

  tighten_permissions(path)
}

/// Removes the `.netrc` entry for the given machine, if present.
pub fn remove_netrc_entry(path: &Path, machine: &str) -> Result<()> {
  let content = std::fs::read_to_string(path).context("Failed to read .netrc file")?;
  if !content.contains(&format!("machine {machine}")) {
    return Ok(());
  }

  let remaining = strip_machine_entry(&content, machine);
  std::fs::write(path, remaining).context("Failed to write .netrc file")?;
  Ok(())
}

/// Returns the file content with the multi-line entry for `machine` removed.
fn strip_machine_entry(content: &str, machine: &str) -> String {
  let mut result = String::new();
  let mut skipping = false;

  for line in content.lines() {
    let trimmed = line.trim();
    if trimmed.starts_with("machine ") {
      skipping = trimmed == format!("machine {machine}");
    }
    if !skipping {
      result.push_str(line);
      result.push('\n');
    }
  }

  result
}

#[cfg(unix)]
fn tighten_permissions(path: &Path) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  let mut permissions = std::fs::metadata(path)
    .context("Failed to read .netrc metadata")?
    .permissions();
  permissions.set_mode(0o600);
  std::fs::set_permissions(path, permissions).context("Failed to set .netrc permissions")?;
  Ok(())
}

#[cfg(not(unix))]
fn tighten_permissions(_path: &Path) -> Result<()> {
  Ok(())
}
