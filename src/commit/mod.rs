// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module for answers, message formatting and preview.

mod answers;
mod message;
mod preview;

pub use answers::{Answers, AnswersDraft, Confirmation};
pub use message::{build_commit, wrap_text, CommitMessage};
pub use preview::{CommitPreview, SEPARATOR_WIDTH};
