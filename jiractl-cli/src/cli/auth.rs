//! # Auth Command
//!
//! Credential management for the Jira server configured in
//! `~/.jiractl.toml`: list (masked), create/update, delete, and a
//! connectivity test.

use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{Confirm, Input, Password};
use jiractl_core::creds;
use jiractl_core::output::{print_info, print_success};
use jiractl_core::prompts::jiractl_theme;

use crate::clients;

/// Command for credential management
#[derive(Args)]
pub struct AuthArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: AuthSubcommands,
}

/// Subcommands for the auth command
#[derive(Subcommand)]
pub enum AuthSubcommands {
  /// List stored credentials
  List,
  /// Create or update credentials
  Create,
  /// Delete stored credentials
  Delete,
  /// Test connection with stored credentials
  Test,
}

pub(crate) fn handle_auth_command(auth: AuthArgs) -> Result<()> {
  match auth.subcommand {
    AuthSubcommands::List => handle_list_command(),
    AuthSubcommands::Create => handle_create_command(),
    AuthSubcommands::Delete => handle_delete_command(),
    AuthSubcommands::Test => handle_test_command(),
  }
}

fn handle_list_command() -> Result<()> {
  let config = clients::load_with_server()?;
  let home = clients::home_dir()?;

  match creds::get_credentials(&home, &config.server)? {
    None => print_info("No credentials stored."),
    Some(credentials) => {
      println!("Stored credentials:");
      println!("  Username: {}", credentials.username);
      println!("  Token:    {}", mask_token(&credentials.token));
    }
  }

  Ok(())
}

fn handle_create_command() -> Result<()> {
  let config = clients::load_with_server()?;
  let home = clients::home_dir()?;
  let theme = jiractl_theme();

  let current_username = creds::get_credentials(&home, &config.server)?
    .map(|c| c.username)
    .unwrap_or_default();

  let mut username_prompt = Input::with_theme(&theme).with_prompt("Username (email)");
  if !current_username.is_empty() {
    username_prompt = username_prompt.default(current_username);
  }
  let username: String = username_prompt.interact_text()?;

  let token = Password::with_theme(&theme).with_prompt("API token").interact()?;
  anyhow::ensure!(!token.trim().is_empty(), "API token is required");

  creds::store_credentials(&home, &config.server, &username, &token)?;

  print_success("Credentials saved to ~/.netrc.");
  Ok(())
}

fn handle_delete_command() -> Result<()> {
  let config = clients::load_with_server()?;
  let home = clients::home_dir()?;

  if !creds::has_credentials(&home, &config.server) {
    print_info("No credentials stored.");
    return Ok(());
  }

  let confirmed = Confirm::with_theme(&jiractl_theme())
    .with_prompt("Delete stored credentials?")
    .default(false)
    .interact()?;
  if !confirmed {
    print_info("Cancelled.");
    return Ok(());
  }

  creds::clear_credentials(&home, &config.server)?;
  print_success("Credentials deleted.");
  Ok(())
}

fn handle_test_command() -> Result<()> {
  let config = clients::load_with_server()?;

  print_info(&format!("Testing connection to {}...", config.server));

  let (rt, client) = clients::create_jira_runtime_and_client(&config)?;
  rt.block_on(client.test_connection())?;

  print_success("Connection successful!");
  Ok(())
}

/// Mask a token for display, keeping the first and last four characters.
fn mask_token(token: &str) -> String {
  let chars: Vec<char> = token.chars().collect();
  if chars.len() < 12 {
    return "****".to_string();
  }

  let head: String = chars[..4].iter().collect();
  let tail: String = chars[chars.len() - 4..].iter().collect();
  format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mask_token_keeps_edges() {
    assert_eq!(mask_token("abcd1234efgh5678"), "abcd...5678");
  }

  #[test]
  fn test_mask_token_short_tokens_fully_masked() {
    assert_eq!(mask_token("short"), "****");
    assert_eq!(mask_token(""), "****");
  }
}
