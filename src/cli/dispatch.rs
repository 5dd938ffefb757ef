// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Write;
use std::path::Path;

use console::style;

use crate::config::CzConfig;
use crate::error::{ConfigError, CzError, GitError, Result, ResultExt};
use crate::git;
use crate::prompt::{
    NonInteractivePrompter, Outcome, PrefilledPrompter, Prompter, QuestionFlow, QuestionName,
    TerminalPrompter,
};

use super::args::{Cli, Commands, CommitArgs, InitArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CzConfig::load_from(config_path)?
    } else {
        CzConfig::load()?
    };

    if cli.no_color || !config.ui.color {
        console::set_colors_enabled(false);
    }

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Commit(args) => run_commit(&cli, &config, args),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

/// Run the commit command.
fn run_commit(cli: &Cli, config: &CzConfig, args: CommitArgs) -> Result<()> {
    tracing::debug!("Running commit command with args: {:?}", args);

    // Refuse before asking anything when there is nothing to commit
    let repo = if cli.dry_run {
        None
    } else {
        let repo = git::Repository::open_current()?;
        if !repo.has_staged_changes()? {
            return Err(CzError::Git(GitError::NoStagedChanges));
        }
        Some(repo)
    };

    let flow = QuestionFlow::new(config.format.max_line_width);
    let mut out = std::io::stdout();

    let outcome = if cli.non_interactive {
        let mut prompter = prefill(NonInteractivePrompter, &args);
        commit_with(&flow, &mut prompter, &mut out, repo.as_ref())?
    } else {
        let mut prompter = prefill(TerminalPrompter::new(), &args);
        commit_with(&flow, &mut prompter, &mut out, repo.as_ref())?
    };

    match outcome {
        Outcome::Committed { .. } => tracing::debug!("Commit flow finished"),
        Outcome::Cancelled => tracing::debug!("Commit flow cancelled"),
    }

    Ok(())
}

/// Wrap a prompter with the answers given on the command line.
fn prefill<P: Prompter>(inner: P, args: &CommitArgs) -> PrefilledPrompter<P> {
    let prompter = PrefilledPrompter::new(inner)
        .with_optional_answer(QuestionName::Type, args.r#type.as_deref())
        .with_optional_answer(QuestionName::Scope, args.scope.as_deref())
        .with_optional_answer(QuestionName::Subject, args.message.as_deref())
        .with_optional_answer(QuestionName::Body, args.body.as_deref())
        .with_optional_answer(QuestionName::Footer, args.footer.as_deref());

    if args.yes {
        prompter.with_answer(QuestionName::ConfirmCommit, "yes")
    } else {
        prompter
    }
}

/// Run the flow, committing into `repo` or printing the message when there is
/// no repository (dry run).
fn commit_with<P: Prompter>(
    flow: &QuestionFlow,
    prompter: &mut P,
    out: &mut dyn Write,
    repo: Option<&git::Repository>,
) -> Result<Outcome> {
    flow.run(prompter, out, |message, out| match repo {
        Some(repo) => {
            let sha = git::create_commit_in_repo(repo, message)?;
            let short_sha = &sha[..7.min(sha.len())];
            tracing::info!("Created commit {}", short_sha);
            Ok(())
        }
        None => {
            writeln!(
                out,
                "{} Would create commit:\n{}",
                style("[dry-run]").yellow(),
                message
            )?;
            Ok(())
        }
    })
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cz {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);
    write_example_config(Path::new("cz.toml"), args.force)?;
    println!("✓ Created cz.toml");
    Ok(())
}

/// Write the example configuration, refusing to clobber an existing file.
fn write_example_config(path: &Path, force: bool) -> Result<()> {
    use crate::config::default::example_config;

    if path.exists() && !force {
        return Err(CzError::Config(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        }));
    }

    std::fs::write(path, example_config()).context("Failed to write configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_example_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cz.toml");

        write_example_config(&path, false).unwrap();
        let config = CzConfig::load_from(&path).unwrap();
        assert_eq!(config, CzConfig::default());
    }

    #[test]
    fn test_write_example_config_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cz.toml");
        std::fs::write(&path, "[format]\nmax_line_width = 72\n").unwrap();

        let result = write_example_config(&path, false);
        assert!(matches!(
            result,
            Err(CzError::Config(ConfigError::AlreadyExists { .. }))
        ));

        write_example_config(&path, true).unwrap();
        let config = CzConfig::load_from(&path).unwrap();
        assert_eq!(config.format.max_line_width, 100);
    }

    #[test]
    fn test_prefill_from_args() {
        let args = CommitArgs {
            r#type: Some("fix".to_string()),
            message: Some("Handle empty scope.".to_string()),
            yes: true,
            ..Default::default()
        };
        let mut prompter = prefill(NonInteractivePrompter, &args);
        let flow = QuestionFlow::default();
        let mut out = Vec::new();

        let outcome = commit_with(&flow, &mut prompter, &mut out, None).unwrap();
        assert_eq!(
            outcome,
            Outcome::Committed {
                message: "fix: handle empty scope\n\n\n\n".to_string()
            }
        );
    }

    #[test]
    fn test_dry_run_writes_to_output() {
        let args = CommitArgs {
            r#type: Some("docs".to_string()),
            message: Some("Describe init".to_string()),
            yes: true,
            ..Default::default()
        };
        let mut prompter = prefill(NonInteractivePrompter, &args);
        let flow = QuestionFlow::default();
        let mut out = Vec::new();

        commit_with(&flow, &mut prompter, &mut out, None).unwrap();
        let output = String::from_utf8(out).unwrap();

        let notice = output.find("Would create commit:").unwrap();
        let created = output.find("Commit has been created.").unwrap();
        assert!(output.contains("[dry-run]"));
        assert!(notice < created);
        assert!(output.contains("docs: describe init\n\n\n\n"));
    }

    #[test]
    fn test_prefill_without_confirmation_fails_non_interactive() {
        let args = CommitArgs {
            r#type: Some("fix".to_string()),
            ..Default::default()
        };
        let mut prompter = prefill(NonInteractivePrompter, &args);
        let flow = QuestionFlow::default();
        let mut out = Vec::new();

        let result = commit_with(&flow, &mut prompter, &mut out, None);
        assert!(matches!(result, Err(CzError::Prompt(_))));
    }
}
