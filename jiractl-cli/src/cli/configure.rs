//! # Configure Command
//!
//! Interactive setup: server URL, default project key, username, and API
//! token. Configuration lands in `~/.jiractl.toml`, credentials in
//! `~/.netrc`, and the flow finishes with a non-fatal connection test.

use anyhow::{Result, ensure};
use dialoguer::{Input, Password};
use jiractl_core::output::{print_info, print_success, print_warning};
use jiractl_core::prompts::jiractl_theme;
use jiractl_core::{config_path, creds};
use url::Url;

use crate::clients;

pub(crate) fn handle_configure_command() -> Result<()> {
  let home = clients::home_dir()?;
  let mut config = clients::load_config()?;
  let theme = jiractl_theme();

  let mut server_prompt = Input::with_theme(&theme).with_prompt("Jira server URL");
  if !config.server.is_empty() {
    server_prompt = server_prompt.default(config.server.clone());
  }
  let server: String = server_prompt
    .validate_with(|input: &String| match Url::parse(input) {
      Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
      _ => Err("server URL must start with http:// or https://"),
    })
    .interact_text()?;
  config.server = server.trim().trim_end_matches('/').to_string();

  let mut project_prompt = Input::with_theme(&theme).with_prompt("Default project key");
  if !config.project.is_empty() {
    project_prompt = project_prompt.default(config.project.clone());
  }
  let project: String = project_prompt.interact_text()?;
  config.project = project.trim().to_uppercase();

  let current_username = creds::get_credentials(&home, &config.server)?
    .map(|c| c.username)
    .unwrap_or_default();
  let mut username_prompt = Input::with_theme(&theme).with_prompt("Username (email)");
  if !current_username.is_empty() {
    username_prompt = username_prompt.default(current_username);
  }
  let username: String = username_prompt.interact_text()?;

  let token = Password::with_theme(&theme).with_prompt("API token").interact()?;
  ensure!(!token.trim().is_empty(), "API token is required");

  creds::store_credentials(&home, &config.server, &username, &token)?;
  config.save(&home)?;

  print_success("Configuration saved!");
  println!("  Config file: {}", config_path(&home).display());
  println!("  Credentials: stored in ~/.netrc");

  // A failed probe leaves the saved configuration in place.
  print_info(&format!("Testing connection to {}...", config.server));
  match clients::create_jira_runtime_and_client(&config) {
    Ok((rt, client)) => match rt.block_on(client.test_connection()) {
      Ok(()) => print_success("Connection successful!"),
      Err(e) => print_warning(&format!("Connection failed: {e}")),
    },
    Err(e) => print_warning(&format!("Connection failed: {e}")),
  }

  Ok(())
}
