// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Answers collected by the question flow.

use crate::config::CommitType;
use crate::error::{PromptError, Result};

/// Final confirmation choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Proceed with the commit.
    Yes,
    /// Abort the commit.
    No,
}

impl Confirmation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confirmation::Yes => "yes",
            Confirmation::No => "no",
        }
    }
}

impl std::str::FromStr for Confirmation {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Confirmation::Yes),
            "no" => Ok(Confirmation::No),
            _ => Err(()),
        }
    }
}

/// Answers to the commit questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub commit_type: CommitType,
    pub scope: String,
    pub subject: String,
    pub body: String,
    pub footer: String,
    /// `None` until the confirmation question has been answered.
    pub confirm_commit: Option<Confirmation>,
}

impl Answers {
    /// Create answers with only a type and subject.
    pub fn new(commit_type: CommitType, subject: impl Into<String>) -> Self {
        Self {
            commit_type,
            scope: String::new(),
            subject: subject.into(),
            body: String::new(),
            footer: String::new(),
            confirm_commit: None,
        }
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the footer.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Whether the user chose to proceed.
    pub fn is_confirmed(&self) -> bool {
        self.confirm_commit == Some(Confirmation::Yes)
    }
}

/// Answers accumulated while the questions are being asked.
#[derive(Debug, Clone, Default)]
pub struct AnswersDraft {
    pub commit_type: Option<CommitType>,
    pub scope: String,
    pub subject: String,
    pub body: String,
    pub footer: String,
    pub confirm_commit: Option<Confirmation>,
}

impl AnswersDraft {
    /// Take a snapshot of the answers collected so far.
    ///
    /// Only the type is mandatory: free-text questions that have not been
    /// asked yet show up as empty strings.
    pub fn snapshot(&self) -> Result<Answers> {
        let commit_type = self.commit_type.ok_or_else(|| PromptError::MissingAnswer {
            question: "type".to_string(),
        })?;

        Ok(Answers {
            commit_type,
            scope: self.scope.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
            footer: self.footer.clone(),
            confirm_commit: self.confirm_commit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CzError;

    #[test]
    fn test_confirmation_from_str() {
        assert_eq!("yes".parse::<Confirmation>(), Ok(Confirmation::Yes));
        assert_eq!("no".parse::<Confirmation>(), Ok(Confirmation::No));
        assert!("Yes".parse::<Confirmation>().is_err());
    }

    #[test]
    fn test_snapshot_requires_type() {
        let draft = AnswersDraft::default();
        assert!(matches!(
            draft.snapshot(),
            Err(CzError::Prompt(PromptError::MissingAnswer { .. }))
        ));
    }

    #[test]
    fn test_snapshot_before_confirmation() {
        let draft = AnswersDraft {
            commit_type: Some(CommitType::Fix),
            subject: "handle empty input".to_string(),
            ..Default::default()
        };
        let answers = draft.snapshot().unwrap();
        assert_eq!(answers, Answers::new(CommitType::Fix, "handle empty input"));
        assert!(!answers.is_confirmed());
    }
}
