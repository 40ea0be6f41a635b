//! # Create Command
//!
//! The create-issue workflow: resolve the issue type (configured default
//! pre-selected), prompt for summary and description, resolve the epic link,
//! confirm, create, and print the browsable URL.

use anyhow::{Context, Result, ensure};
use clap::Args;
use dialoguer::{Confirm, Input, Select};
use jiractl_core::defaults::resolve_optional;
use jiractl_core::output::{format_issue_key, format_url, print_info, print_success};
use jiractl_core::prompts::jiractl_theme;
use jiractl_jira::CreateIssueOptions;

use crate::clients;

/// Arguments for the create command
#[derive(Args, Default)]
pub struct CreateArgs {
  /// Epic to link the new issue under (overrides the configured default)
  #[arg(long, value_name = "KEY")]
  pub epic: Option<String>,
}

pub(crate) fn handle_create_command(args: CreateArgs) -> Result<()> {
  let config = clients::load_configured()?;
  let (rt, client) = clients::create_jira_runtime_and_client(&config)?;
  let theme = jiractl_theme();

  // Resolve the issue type, pre-selecting the configured default
  let issue_types = rt
    .block_on(client.get_issue_types(&config.project))
    .context("Failed to get issue types")?;
  let type_names: Vec<String> = issue_types.iter().map(|t| t.name.clone()).collect();
  ensure!(!type_names.is_empty(), "project {} has no issue types", config.project);

  let default_idx = config
    .issue_defaults
    .issue_type
    .as_deref()
    .and_then(|name| type_names.iter().position(|n| n == name))
    .unwrap_or(0);

  let Some(type_idx) = Select::with_theme(&theme)
    .with_prompt("Issue type")
    .items(&type_names)
    .default(default_idx)
    .interact_opt()?
  else {
    print_info("Issue creation cancelled.");
    return Ok(());
  };
  let issue_type = type_names[type_idx].clone();

  let summary: String = Input::with_theme(&theme)
    .with_prompt("Summary")
    .validate_with(|input: &String| {
      if input.trim().is_empty() {
        Err("summary is required")
      } else {
        Ok(())
      }
    })
    .interact_text()?;

  let description: String = Input::with_theme(&theme)
    .with_prompt("Description (optional)")
    .allow_empty(true)
    .interact_text()?;

  println!("\nCreating issue:");
  println!("  Project:     {}", config.project);
  println!("  Type:        {issue_type}");
  println!("  Summary:     {}", summary.trim());
  if !description.is_empty() {
    println!("  Description: {description}");
  }

  // Show which epic the issue will land under; the summary lookup is purely
  // cosmetic and a failed fetch only omits it.
  if let Some(epic_key) = resolve_optional(args.epic.as_deref(), config.issue_defaults.epic_link.as_deref()) {
    match rt.block_on(client.get_issue(epic_key)) {
      Ok(epic) => println!("  Epic:        {epic_key} ({})", epic.fields.summary),
      Err(_) => println!("  Epic:        {epic_key}"),
    }
  }

  let confirmed = Confirm::with_theme(&theme)
    .with_prompt("Create this issue?")
    .default(false)
    .interact()?;
  if !confirmed {
    print_info("Issue creation cancelled.");
    return Ok(());
  }

  let options = CreateIssueOptions {
    epic_link: args.epic,
    ..Default::default()
  };
  let created = rt.block_on(client.create_issue(
    &config.project,
    &issue_type,
    summary.trim(),
    &description,
    &options,
    &config.issue_defaults,
  ))?;

  print_success(&format!("Created issue: {}", format_issue_key(&created.key)));
  println!(
    "URL: {}",
    format_url(&format!("{}/browse/{}", config.server, created.key))
  );

  Ok(())
}
