//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the jiractl tool:
//! interactive configuration, issue creation, saved queries, and credential
//! management. Invoking jiractl with no subcommand opens the interactive
//! action menu.

mod auth;
mod completion;
mod configure;
mod create;
mod query;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use dialoguer::FuzzySelect;
use jiractl_core::prompts::jiractl_theme;

/// Top-level CLI command for the jiractl tool
#[derive(Parser)]
#[command(name = "jiractl")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "A command-line client for Jira")]
#[command(
  long_about = "jiractl is an interactive command-line client for Jira.\n\n\
        It creates issues with configured defaults (assignee, labels, epic link)\n\
        and runs saved JQL queries from your ~/.jiractl.toml."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Subcommands; omit to pick an action interactively
  #[command(subcommand)]
  pub command: Option<Commands>,
}

/// Subcommands for the jiractl tool
#[derive(Subcommand)]
pub enum Commands {
  /// Configure jiractl settings
  #[command(long_about = "Interactive setup for jiractl.\n\n\
            Prompts for the Jira server URL, default project key, username,\n\
            and API token, then verifies the connection.")]
  Configure,

  /// Create a new Jira issue
  #[command(long_about = "Interactively create a new Jira issue.\n\n\
            Prompts for issue type, summary, and description; assignee, labels,\n\
            and the epic link fall back to the configured issue defaults.")]
  Create(create::CreateArgs),

  /// Run a saved query
  #[command(long_about = "Run a saved JQL query from your config file and display\n\
            results interactively. With no name, picks from the configured queries.")]
  Query(query::QueryArgs),

  /// Manage authentication credentials
  #[command(long_about = "Manage the Jira username and API token stored in your\n\
            .netrc file, and test connectivity with them.")]
  #[command(arg_required_else_help = true)]
  Auth(auth::AuthArgs),

  /// Generate shell completions
  #[command(long_about = "Generates shell completion scripts for jiractl commands.\n\n\
            Supported shells include bash, zsh, and fish.")]
  Completion(completion::CompletionArgs),
}

/// Handle the parsed CLI command
pub fn handle_cli(cli: Cli) -> Result<()> {
  match cli.command {
    Some(Commands::Configure) => configure::handle_configure_command(),
    Some(Commands::Create(args)) => create::handle_create_command(args),
    Some(Commands::Query(args)) => query::handle_query_command(args),
    Some(Commands::Auth(args)) => auth::handle_auth_command(args),
    Some(Commands::Completion(args)) => completion::handle_completion_command(args),
    None => run_interactive_menu(),
  }
}

/// The bare-invocation action menu
fn run_interactive_menu() -> Result<()> {
  let actions = ["Create new issue", "Run query", "Configure", "Exit"];

  let Some(selection) = FuzzySelect::with_theme(&jiractl_theme())
    .with_prompt("Select action")
    .items(&actions)
    .default(0)
    .interact_opt()?
  else {
    return Ok(());
  };

  match selection {
    0 => create::handle_create_command(create::CreateArgs::default()),
    1 => query::handle_query_command(query::QueryArgs { name: None }),
    2 => configure::handle_configure_command(),
    _ => Ok(()),
  }
}
