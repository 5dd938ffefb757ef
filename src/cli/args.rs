// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cz - Conventional commit message template generator
///
/// Asks for the type, scope, subject, body and footer of a change, previews
/// the resulting message and commits it once confirmed.
#[derive(Parser, Debug)]
#[command(name = "cz")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit message template generator", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to commit if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the message instead of creating a commit
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Disable all interactive prompts
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive commit creation (default command)
    Commit(CommitArgs),

    /// Print version information
    Version,

    /// Initialize cz configuration
    Init(InitArgs),
}

/// Arguments for the commit command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CommitArgs {
    /// Pre-fill the commit type
    #[arg(short = 't', long)]
    pub r#type: Option<String>,

    /// Pre-fill the scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Pre-fill the subject
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Pre-fill the body
    #[arg(short, long)]
    pub body: Option<String>,

    /// Pre-fill the footer
    #[arg(short, long)]
    pub footer: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Commit if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Commit(CommitArgs::default()))
    }
}
