// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message preview.

use std::io::Write;

use super::message::CommitMessage;

/// Width of the separator lines around the preview.
pub const SEPARATOR_WIDTH: usize = 64;

/// Commit preview renderer.
pub struct CommitPreview<'a> {
    message: &'a CommitMessage,
}

impl<'a> CommitPreview<'a> {
    /// Create a new preview for a commit message.
    pub fn new(message: &'a CommitMessage) -> Self {
        Self { message }
    }

    /// Render the preview between two separator lines.
    pub fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        writeln!(out)?;
        writeln!(out, "{}", separator)?;
        writeln!(out, "{}", self.message.format())?;
        writeln!(out, "{}", separator)?;
        writeln!(out)?;
        Ok(())
    }

    /// Get a formatted string representation.
    pub fn to_string(&self) -> String {
        self.message.format()
    }
}
