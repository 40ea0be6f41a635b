//! # Query Command
//!
//! Runs a saved JQL query: expands the `${project}` placeholder, applies the
//! configured limit, and displays the matches as a selectable list with a
//! per-issue detail view.

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{FuzzySelect, Select};
use jiractl_core::consts::DEFAULT_QUERY_LIMIT;
use jiractl_core::jql::expand_jql;
use jiractl_core::output::print_info;
use jiractl_core::prompts::jiractl_theme;
use jiractl_core::text::truncate;
use jiractl_jira::models::Issue;
use jiractl_jira::{Error as JiraError, JiraClient};
use owo_colors::OwoColorize;
use tokio::runtime::Runtime;

use crate::clients;

/// Arguments for the query command
#[derive(Args)]
pub struct QueryArgs {
  /// Name of the saved query to run; picks interactively when omitted
  #[arg(index = 1)]
  pub name: Option<String>,
}

pub(crate) fn handle_query_command(args: QueryArgs) -> Result<()> {
  let config = clients::load_configured()?;

  let name = match args.name {
    Some(name) => name,
    None => {
      if config.queries.is_empty() {
        print_info("No queries configured. Add queries to ~/.jiractl.toml");
        return Ok(());
      }

      let names = config.query_names();
      let Some(idx) = FuzzySelect::with_theme(&jiractl_theme())
        .with_prompt("Select query")
        .items(&names)
        .default(0)
        .interact_opt()?
      else {
        return Ok(());
      };
      names[idx].clone()
    }
  };

  let query = config
    .get_query(&name)
    .ok_or_else(|| JiraError::NotFound(format!("query '{name}'")))?;

  let jql = expand_jql(&query.jql, &config.project);
  let limit = query.effective_limit(DEFAULT_QUERY_LIMIT);

  println!("Running query: {name}");
  println!("JQL: {jql}\n");

  let (rt, client) = clients::create_jira_runtime_and_client(&config)?;
  let issues = rt.block_on(client.search_issues(&jql, limit)).context("Query failed")?;

  if issues.is_empty() {
    print_info("No issues found.");
    return Ok(());
  }

  let items: Vec<String> = issues.iter().map(format_issue_row).collect();
  let Some(idx) = Select::with_theme(&jiractl_theme())
    .with_prompt(format!("Found {} issues (select to view details)", issues.len()))
    .items(&items)
    .default(0)
    .max_length(15)
    .interact_opt()?
  else {
    return Ok(());
  };

  show_issue_details(&rt, &client, &issues[idx].key)
}

fn format_issue_row(issue: &Issue) -> String {
  let status = issue.fields.status.as_ref().map(|s| s.name.as_str()).unwrap_or("");
  format!(
    "{:<12} {:<15} {}",
    issue.key,
    status,
    truncate(&issue.fields.summary, 60)
  )
}

fn show_issue_details(rt: &Runtime, client: &JiraClient, key: &str) -> Result<()> {
  let issue = rt.block_on(client.get_issue(key)).context("Failed to get issue")?;

  println!("\n{}: {}", issue.key.bright_cyan().bold(), issue.fields.summary);
  println!("─────────────────────────────────────────────────────────");

  if let Some(status) = &issue.fields.status {
    println!("Status:      {}", status.name);
  }
  if let Some(issue_type) = &issue.fields.issue_type {
    println!("Type:        {}", issue_type.name);
  }
  if let Some(priority) = &issue.fields.priority {
    println!("Priority:    {}", priority.name);
  }
  if let Some(assignee) = &issue.fields.assignee {
    println!("Assignee:    {}", assignee.display_name);
  }
  if let Some(reporter) = &issue.fields.reporter {
    println!("Reporter:    {}", reporter.display_name);
  }
  if !issue.fields.labels.is_empty() {
    println!("Labels:      {}", issue.fields.labels.join(", "));
  }
  if let Some(parent) = &issue.fields.parent {
    println!("Epic:        {}", parent.key);
  }
  if let Some(description) = &issue.fields.description
    && !description.is_empty()
  {
    println!("\nDescription:\n{description}");
  }

  Ok(())
}
