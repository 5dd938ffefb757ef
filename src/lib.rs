// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cz - Conventional commit message template generator
//!
//! Asks a fixed sequence of questions (type, scope, subject, body, footer),
//! previews the resulting conventional-commit message and hands it to a commit
//! callback once the user confirms.
//!
//! # Example
//!
//! ```
//! use cz::commit::{build_commit, Answers};
//! use cz::config::CommitType;
//!
//! let answers = Answers::new(CommitType::Feat, "add dry-run flag")
//!     .with_scope("cli")
//!     .with_footer("closes #42");
//!
//! assert_eq!(
//!     build_commit(&answers, 100),
//!     "feat(cli): add dry-run flag\n\n\n\ncloses #42"
//! );
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod prompt;

// Re-exports for convenience
pub use config::CzConfig;
pub use error::{CzError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cz.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
