// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Prompting backends for the question flow.

use std::collections::HashMap;

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::error::{PromptError, Result};

use super::question::{Choice, QuestionName};

/// Something that can answer the commit questions.
pub trait Prompter {
    /// Ask a single-choice question, returning the index of the chosen entry.
    fn select(&mut self, name: QuestionName, message: &str, choices: &[Choice]) -> Result<usize>;

    /// Ask a free-text question. Empty answers are allowed.
    fn input(&mut self, name: QuestionName, message: &str) -> Result<String>;
}

/// Interactive prompter on the terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, _name: QuestionName, message: &str, choices: &[Choice]) -> Result<usize> {
        let items: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&items)
            // Initial cursor position only; enter is still required.
            .default(0)
            .interact()?;

        Ok(selection)
    }

    fn input(&mut self, _name: QuestionName, message: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;

        Ok(value)
    }
}

/// Prompter that never asks anything.
///
/// Free-text questions are answered with an empty string; list questions have
/// no sensible empty answer and fail.
#[derive(Debug, Default)]
pub struct NonInteractivePrompter;

impl Prompter for NonInteractivePrompter {
    fn select(&mut self, name: QuestionName, _message: &str, _choices: &[Choice]) -> Result<usize> {
        Err(PromptError::AnswerRequired {
            question: name.to_string(),
        }
        .into())
    }

    fn input(&mut self, _name: QuestionName, _message: &str) -> Result<String> {
        Ok(String::new())
    }
}

/// Answers questions from preset values, deferring the rest to another
/// prompter.
///
/// Presets for list questions hold the choice value (e.g. `feat`, `yes`).
pub struct PrefilledPrompter<P> {
    presets: HashMap<QuestionName, String>,
    inner: P,
}

impl<P: Prompter> PrefilledPrompter<P> {
    pub fn new(inner: P) -> Self {
        Self {
            presets: HashMap::new(),
            inner,
        }
    }

    /// Preset the answer to a question.
    pub fn with_answer(mut self, name: QuestionName, value: impl Into<String>) -> Self {
        self.presets.insert(name, value.into());
        self
    }

    /// Preset the answer to a question when a value is present.
    pub fn with_optional_answer(self, name: QuestionName, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with_answer(name, value),
            None => self,
        }
    }
}

impl<P: Prompter> Prompter for PrefilledPrompter<P> {
    fn select(&mut self, name: QuestionName, message: &str, choices: &[Choice]) -> Result<usize> {
        let Some(preset) = self.presets.remove(&name) else {
            return self.inner.select(name, message, choices);
        };

        tracing::debug!("Using preset answer for {}: {}", name, preset);

        let wanted = preset.to_lowercase();
        choices
            .iter()
            .position(|c| c.value == wanted)
            .ok_or_else(|| {
                PromptError::InvalidChoice {
                    question: name.to_string(),
                    value: preset,
                }
                .into()
            })
    }

    fn input(&mut self, name: QuestionName, message: &str) -> Result<String> {
        match self.presets.remove(&name) {
            Some(preset) => {
                tracing::debug!("Using preset answer for {}", name);
                Ok(preset)
            }
            None => self.inner.input(name, message),
        }
    }
}
