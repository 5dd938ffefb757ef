// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit question flow.
//!
//! Asks the commit questions in order, previews the message right before the
//! confirmation question and hands the final text to a commit callback.

use std::io::Write;

use console::style;

use crate::commit::{AnswersDraft, CommitMessage, CommitPreview, Confirmation};
use crate::config::{CommitType, DEFAULT_MAX_LINE_WIDTH};
use crate::error::{PromptError, Result};

use super::prompter::Prompter;
use super::question::{commit_questions, Message, Question, QuestionName};

/// How the flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The commit callback accepted this message.
    Committed { message: String },
    /// The user aborted at the confirmation question.
    Cancelled,
}

/// Runs the commit questions.
#[derive(Debug, Clone)]
pub struct QuestionFlow {
    max_line_width: usize,
    questions: Vec<Question>,
}

impl QuestionFlow {
    /// Create a flow cropping and wrapping at `max_line_width`.
    pub fn new(max_line_width: usize) -> Self {
        Self {
            max_line_width,
            questions: commit_questions(),
        }
    }

    /// Ask every question, then commit or cancel.
    ///
    /// `commit` is only called when the user confirms. It receives the message
    /// and `out`, and the success notice is only written once it returns `Ok`.
    pub fn run<P, F>(&self, prompter: &mut P, out: &mut dyn Write, commit: F) -> Result<Outcome>
    where
        P: Prompter + ?Sized,
        F: FnOnce(&str, &mut dyn Write) -> Result<()>,
    {
        self.write_banner(out)?;

        let mut draft = AnswersDraft::default();
        for question in &self.questions {
            self.ask(question, prompter, out, &mut draft)?;
        }

        let answers = draft.snapshot()?;
        if answers.is_confirmed() {
            let message = CommitMessage::from_answers(&answers, self.max_line_width).format();
            commit(&message, out)?;
            tracing::debug!("Commit callback accepted the message");
            writeln!(out, "{}", style("Commit has been created.").green())?;
            Ok(Outcome::Committed { message })
        } else {
            tracing::debug!("Commit aborted at confirmation");
            writeln!(out, "{}", style("Commit has been canceled.").red())?;
            Ok(Outcome::Cancelled)
        }
    }

    fn write_banner(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "Line 1 will be cropped at {width} characters. \
             All other lines will be wrapped after {width} characters.",
            width = self.max_line_width
        )?;
        writeln!(out)?;
        Ok(())
    }

    fn ask<P>(
        &self,
        question: &Question,
        prompter: &mut P,
        out: &mut dyn Write,
        draft: &mut AnswersDraft,
    ) -> Result<()>
    where
        P: Prompter + ?Sized,
    {
        let name = question.name();
        tracing::debug!("Asking {}", name);

        if let Message::Preview(_) = question.message() {
            let snapshot = draft.snapshot()?;
            let message = CommitMessage::from_answers(&snapshot, self.max_line_width);
            CommitPreview::new(&message).render(out)?;
        }

        match question {
            Question::List {
                message, choices, ..
            } => {
                let index = prompter.select(name, message.text(), choices)?;
                let value = choices.get(index).map(|c| c.value).ok_or_else(|| {
                    PromptError::InvalidChoice {
                        question: name.to_string(),
                        value: index.to_string(),
                    }
                })?;
                record_choice(draft, name, value)
            }
            Question::Input {
                message, filter, ..
            } => {
                let raw = prompter.input(name, message.text())?;
                let value = match filter {
                    Some(filter) => filter(&raw),
                    None => raw,
                };
                record_text(draft, name, value);
                Ok(())
            }
        }
    }
}

impl Default for QuestionFlow {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_WIDTH)
    }
}

fn record_choice(draft: &mut AnswersDraft, name: QuestionName, value: &str) -> Result<()> {
    let invalid = || PromptError::InvalidChoice {
        question: name.to_string(),
        value: value.to_string(),
    };

    match name {
        QuestionName::Type => {
            draft.commit_type = Some(value.parse::<CommitType>().map_err(|_| invalid())?);
        }
        QuestionName::ConfirmCommit => {
            draft.confirm_commit = Some(value.parse::<Confirmation>().map_err(|_| invalid())?);
        }
        _ => return Err(invalid().into()),
    }
    Ok(())
}

fn record_text(draft: &mut AnswersDraft, name: QuestionName, value: String) {
    match name {
        QuestionName::Scope => draft.scope = value,
        QuestionName::Subject => draft.subject = value,
        QuestionName::Body => draft.body = value,
        QuestionName::Footer => draft.footer = value,
        QuestionName::Type | QuestionName::ConfirmCommit => {
            tracing::warn!("Ignoring free-text answer for list question {}", name);
        }
    }
}
