// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Question flow for building a commit message interactively.

mod flow;
mod prompter;
pub mod question;

pub use flow::{Outcome, QuestionFlow};
pub use prompter::{NonInteractivePrompter, PrefilledPrompter, Prompter, TerminalPrompter};
pub use question::{commit_questions, normalize_subject, Choice, Message, Question, QuestionName};
