// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Question descriptors for the commit flow.

use crate::commit::Confirmation;
use crate::config::CommitType;

/// Transform applied to a free-text answer before it is recorded.
pub type Filter = fn(&str) -> String;

/// Identifies which answer a question fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionName {
    Type,
    Scope,
    Subject,
    Body,
    Footer,
    ConfirmCommit,
}

impl QuestionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionName::Type => "type",
            QuestionName::Scope => "scope",
            QuestionName::Subject => "subject",
            QuestionName::Body => "body",
            QuestionName::Footer => "footer",
            QuestionName::ConfirmCommit => "confirmCommit",
        }
    }
}

impl std::fmt::Display for QuestionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of a list question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// What the user sees.
    pub label: String,
    /// What gets recorded.
    pub value: &'static str,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: &'static str) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Prompt text of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Shown as is.
    Static(&'static str),
    /// Shown after the message built from the answers so far has been
    /// previewed.
    Preview(&'static str),
}

impl Message {
    pub fn text(&self) -> &'static str {
        match self {
            Message::Static(text) | Message::Preview(text) => text,
        }
    }
}

/// A question descriptor.
#[derive(Debug, Clone)]
pub enum Question {
    /// Single choice from a fixed list.
    List {
        name: QuestionName,
        message: Message,
        choices: Vec<Choice>,
    },
    /// Free text, optionally transformed before being recorded.
    Input {
        name: QuestionName,
        message: Message,
        filter: Option<Filter>,
    },
}

impl Question {
    pub fn name(&self) -> QuestionName {
        match self {
            Question::List { name, .. } | Question::Input { name, .. } => *name,
        }
    }

    pub fn message(&self) -> Message {
        match self {
            Question::List { message, .. } | Question::Input { message, .. } => *message,
        }
    }
}

/// Strip one trailing `.` and lower-case the first character.
pub fn normalize_subject(value: &str) -> String {
    let value = value.strip_suffix('.').unwrap_or(value);
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Label for a commit type entry, with descriptions aligned in one column.
fn type_label(commit_type: CommitType) -> String {
    format!(
        "{:<10}{}",
        format!("{}:", commit_type.as_str()),
        commit_type.description()
    )
}

/// The commit questions, in the order they are asked.
pub fn commit_questions() -> Vec<Question> {
    vec![
        Question::List {
            name: QuestionName::Type,
            message: Message::Static("Select the type of change that you're committing:"),
            choices: CommitType::all()
                .iter()
                .map(|t| Choice::new(type_label(*t), t.as_str()))
                .collect(),
        },
        Question::Input {
            name: QuestionName::Scope,
            message: Message::Static(
                "Denote the scope of this change (action-sheet, animations, cards, config, etc.):",
            ),
            filter: None,
        },
        Question::Input {
            name: QuestionName::Subject,
            message: Message::Static("Write a short description of the change:"),
            filter: Some(normalize_subject),
        },
        Question::Input {
            name: QuestionName::Body,
            message: Message::Static("Provide a longer description of the change:"),
            filter: None,
        },
        Question::Input {
            name: QuestionName::Footer,
            message: Message::Static(
                "List any breaking changes or issues closed by this change \
                 (e.g references #5077, closes #5077, etc.):",
            ),
            filter: None,
        },
        Question::List {
            name: QuestionName::ConfirmCommit,
            message: Message::Preview("Are you sure you want to proceed with the commit above?"),
            choices: vec![
                Choice::new("Yes", Confirmation::Yes.as_str()),
                Choice::new("Abort commit", Confirmation::No.as_str()),
            ],
        },
    ]
}
