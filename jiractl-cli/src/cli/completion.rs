//! # Completion Command
//!
//! Generates shell completion scripts for jiractl commands.

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Command for generating shell completions
#[derive(Args)]
pub struct CompletionArgs {
  /// Shell to generate completions for
  #[arg(required = true, value_parser = ["bash", "zsh", "fish"])]
  pub shell: String,
}

pub(crate) fn handle_completion_command(completion: CompletionArgs) -> Result<()> {
  let shell = match completion.shell.to_lowercase().as_str() {
    "bash" => Shell::Bash,
    "zsh" => Shell::Zsh,
    "fish" => Shell::Fish,
    other => anyhow::bail!("Unsupported shell: {other}"),
  };

  let mut cmd = Cli::command();
  let bin_name = cmd.get_name().to_string();
  generate(shell, &mut cmd, bin_name, &mut io::stdout());

  Ok(())
}
