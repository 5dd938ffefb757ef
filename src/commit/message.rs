// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message formatting.

use textwrap::{Options, WordSeparator, WrapAlgorithm};

use super::answers::Answers;

/// A commit message rendered from a set of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// First line, cropped to the maximum line width.
    pub head: String,
    /// Wrapped body, possibly empty.
    pub body: String,
    /// Wrapped footer, possibly empty.
    pub footer: String,
}

impl CommitMessage {
    /// Render the answers into a commit message.
    ///
    /// The head is `type(scope): subject`, with the parentheses only present
    /// when the trimmed scope is non-empty. It is hard-cropped at
    /// `max_line_width` characters, which can cut a word in half. Body and
    /// footer are wrapped independently at the same width.
    pub fn from_answers(answers: &Answers, max_line_width: usize) -> Self {
        let scope = answers.scope.trim();
        let scope = if scope.is_empty() {
            String::new()
        } else {
            format!("({})", scope)
        };

        let head = format!(
            "{}{}: {}",
            answers.commit_type,
            scope,
            answers.subject.trim()
        );

        Self {
            head: head.chars().take(max_line_width).collect(),
            body: wrap_text(&answers.body, max_line_width),
            footer: wrap_text(&answers.footer, max_line_width),
        }
    }

    /// Format the commit message as a string.
    ///
    /// Both blank-line separators are always emitted, even when body or
    /// footer are empty.
    pub fn format(&self) -> String {
        format!("{}\n\n{}\n\n{}", self.head, self.body, self.footer)
    }

    /// Get the first line (header) of the commit message.
    pub fn header(&self) -> &str {
        &self.head
    }
}

/// Format answers straight into the final message text.
pub fn build_commit(answers: &Answers, max_line_width: usize) -> String {
    CommitMessage::from_answers(answers, max_line_width).format()
}

/// Word-wrap text at `width` columns.
///
/// Lines are filled greedily. Words are split on ASCII whitespace and never
/// broken, so a single word longer than `width` stays on its own overlong
/// line. Trailing whitespace is trimmed from every line. Existing line breaks
/// are kept, including the `\r` of a `\r\n` pair. Tabs and form feeds are
/// turned into spaces so they can serve as break points.
pub fn wrap_text(text: &str, width: usize) -> String {
    let options = Options::new(width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    text.split('\n')
        .map(|line| {
            let (content, line_end) = match line.strip_suffix('\r') {
                Some(content) => (content, "\r"),
                None => (line, ""),
            };
            let content = content.replace(|c: char| c == '\t' || c == '\x0C', " ");

            let wrapped = textwrap::wrap(&content, options.clone())
                .iter()
                .map(|segment| segment.trim_end())
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}{}", wrapped, line_end)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
