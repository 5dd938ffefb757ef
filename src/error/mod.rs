// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cz application.
//!
//! Formatting a commit message never fails; every error here comes from the
//! collaborators around it (configuration files, the terminal, git).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cz operations.
#[derive(Error, Debug)]
pub enum CzError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Question flow errors
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for CzError {
    fn from(err: dialoguer::Error) -> Self {
        CzError::Ui(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("No staged changes found")]
    NoStagedChanges,

    #[error("Failed to get diff: {message}")]
    DiffFailed { message: String },

    #[error("Failed to create commit: {message}")]
    CommitFailed { message: String },
}

/// Question flow errors.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("An answer is required for '{question}' but prompting is disabled")]
    AnswerRequired { question: String },

    #[error("Invalid value '{value}' for '{question}'")]
    InvalidChoice { question: String, value: String },

    #[error("No answer recorded for '{question}'")]
    MissingAnswer { question: String },
}

/// Result type alias for cz operations.
pub type Result<T> = std::result::Result<T, CzError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CzError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
